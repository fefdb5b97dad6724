//! HTTP client with an explicit request pipeline. Every call made by the crate
//! goes through [`HttpClient::send`], which applies the pre-hooks, dispatches with
//! the configured timeout, unwraps the body and applies the post-hooks.
//!
//! The builder always installs two hooks that callers cannot remove: bearer auth
//! as the last pre-hook and failure notification as the last post-hook. Nothing
//! is retried.

pub mod config;
pub mod errors;
pub mod hooks;
pub mod request;

pub use self::config::ClientConfig;
pub use self::errors::{ClientError, GENERIC_FAILURE_MESSAGE};
pub use self::hooks::{RequestHook, ResponseHook};
pub use self::request::{OutgoingRequest, Payload, RequestOptions, ResponseType};

use self::errors::{error_detail, map_request_error};
use crate::{
    notify::{Notifier, StderrNotifier},
    session::Session,
};
use reqwest::{
    Method,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, debug, info_span};

#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    session: Session,
    notifier: Arc<dyn Notifier>,
    pre_hooks: Arc<[RequestHook]>,
    post_hooks: Arc<[ResponseHook]>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("pre_hooks", &self.pre_hooks.len())
            .field("post_hooks", &self.post_hooks.len())
            .finish_non_exhaustive()
    }
}

pub struct HttpClientBuilder {
    config: ClientConfig,
    session: Session,
    notifier: Arc<dyn Notifier>,
    pre_hooks: Vec<RequestHook>,
    post_hooks: Vec<ResponseHook>,
}

impl HttpClientBuilder {
    #[must_use]
    pub fn session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Adds a pre-hook. It runs before the bearer-auth hook.
    #[must_use]
    pub fn pre_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(OutgoingRequest) -> OutgoingRequest + Send + Sync + 'static,
    {
        self.pre_hooks.push(Arc::new(hook));
        self
    }

    /// Adds a post-hook. It runs before the failure notifier.
    #[must_use]
    pub fn post_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(Result<Payload, ClientError>) -> Result<Payload, ClientError> + Send + Sync + 'static,
    {
        self.post_hooks.push(Arc::new(hook));
        self
    }

    /// # Errors
    /// Returns an error if the underlying reqwest client cannot be built.
    pub fn build(self) -> Result<HttpClient, ClientError> {
        let inner = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(self.config.timeout)
            .build()
            .map_err(ClientError::Transport)?;

        let mut pre_hooks = self.pre_hooks;
        pre_hooks.push(hooks::bearer_auth(self.session.clone()));

        let mut post_hooks = self.post_hooks;
        post_hooks.push(hooks::notify_failure(Arc::clone(&self.notifier)));

        Ok(HttpClient {
            inner,
            config: self.config,
            session: self.session,
            notifier: self.notifier,
            pre_hooks: pre_hooks.into(),
            post_hooks: post_hooks.into(),
        })
    }
}

impl HttpClient {
    #[must_use]
    pub fn builder(config: ClientConfig) -> HttpClientBuilder {
        HttpClientBuilder {
            config,
            session: Session::new(),
            notifier: Arc::new(StderrNotifier),
            pre_hooks: Vec::new(),
            post_hooks: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The session whose token is attached to outgoing requests.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Reports a failure found by a caller after a successful dispatch, such as a
    /// response missing a required field. Pipeline failures are already reported.
    pub fn report(&self, err: &ClientError) {
        self.notifier.notify(&err.user_message());
    }

    /// Runs `request` through the full pipeline.
    ///
    /// # Errors
    /// Returns the normalized failure after it has been reported to the notifier.
    pub async fn send(
        &self,
        request: OutgoingRequest,
        options: RequestOptions,
    ) -> Result<Payload, ClientError> {
        let request = self
            .pre_hooks
            .iter()
            .fold(request, |request, hook| hook(request));

        let result = self.dispatch(request, options).await;

        self.complete(result)
    }

    /// # Errors
    /// See [`HttpClient::send`].
    pub async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.send_json(Method::GET, path, None::<&()>).await
    }

    /// Fetches opaque content, returning the body bytes unmodified.
    ///
    /// # Errors
    /// See [`HttpClient::send`].
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        self.send(OutgoingRequest::get(path), RequestOptions::bytes())
            .await?
            .into_bytes()
    }

    /// # Errors
    /// See [`HttpClient::send`].
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        self.send_json(Method::POST, path, Some(body)).await
    }

    /// # Errors
    /// See [`HttpClient::send`].
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        self.send_json(Method::PUT, path, Some(body)).await
    }

    /// # Errors
    /// See [`HttpClient::send`].
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ClientError> {
        self.send_json(Method::PATCH, path, Some(body)).await
    }

    /// # Errors
    /// See [`HttpClient::send`].
    pub async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.send_json(Method::DELETE, path, None::<&()>).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ClientError> {
        let mut request = OutgoingRequest::new(method, path);

        if let Some(body) = body {
            match serde_json::to_value(body) {
                Ok(value) => request.body = Some(value),
                // Still a failed call, so it goes through the post-hooks.
                Err(err) => {
                    return self
                        .complete(Err(ClientError::Encode(err.to_string())))
                        .and_then(Payload::into_json);
                }
            }
        }

        self.send(request, RequestOptions::json()).await?.into_json()
    }

    fn complete(&self, result: Result<Payload, ClientError>) -> Result<Payload, ClientError> {
        self.post_hooks
            .iter()
            .fold(result, |result, hook| hook(result))
    }

    async fn dispatch(
        &self,
        request: OutgoingRequest,
        options: RequestOptions,
    ) -> Result<Payload, ClientError> {
        let url = self.config.endpoint(&request.path)?;
        let headers = header_map(&request)?;

        let mut builder = self
            .inner
            .request(request.method.clone(), url.clone())
            .headers(headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let span = info_span!(
            "novelist.request",
            http.method = %request.method,
            url = %url
        );

        let response = builder
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        unwrap_response(response, options.response_type).await
    }
}

fn header_map(request: &OutgoingRequest) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::with_capacity(request.headers.len());

    for (name, value) in &request.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|err| ClientError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            })?;
        let mut header_value =
            HeaderValue::from_str(value).map_err(|err| ClientError::InvalidHeader {
                name: name.clone(),
                reason: err.to_string(),
            })?;

        if header_name == reqwest::header::AUTHORIZATION {
            header_value.set_sensitive(true);
        }

        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Reduces a transport response to its payload, or to a `Status` error.
async fn unwrap_response(
    response: reqwest::Response,
    response_type: ResponseType,
) -> Result<Payload, ClientError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_request_error)?;

    debug!(status = status.as_u16(), bytes = body.len(), "response received");

    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        });
    }

    match response_type {
        ResponseType::Bytes => Ok(Payload::Bytes(body.to_vec())),
        ResponseType::Json => {
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(Payload::Json(Value::Null));
            }
            serde_json::from_slice(&body)
                .map(Payload::Json)
                .map_err(|err| ClientError::Decode(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_always_installs_auth_and_notify() -> Result<(), ClientError> {
        let client = HttpClient::builder(ClientConfig::default())
            .pre_hook(|request| request)
            .post_hook(|result| result)
            .build()?;
        assert_eq!(client.pre_hooks.len(), 2);
        assert_eq!(client.post_hooks.len(), 2);
        Ok(())
    }

    #[test]
    fn auth_hook_runs_after_caller_hooks() -> Result<(), ClientError> {
        let client = HttpClient::builder(ClientConfig::default())
            .session(Session::with_token("real"))
            .pre_hook(|mut request| {
                request.headers.remove(hooks::AUTHORIZATION);
                request.set_header(hooks::AUTHORIZATION, "Bearer forged");
                request
            })
            .build()?;

        let request = client
            .pre_hooks
            .iter()
            .fold(OutgoingRequest::get("/novel/list"), |request, hook| {
                hook(request)
            });
        assert_eq!(request.header(hooks::AUTHORIZATION), Some("Bearer real"));
        Ok(())
    }

    #[test]
    fn header_map_rejects_invalid_values() {
        let request = OutgoingRequest::get("/").with_header("X-Bad", "line\nbreak");
        assert!(matches!(
            header_map(&request),
            Err(ClientError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn header_map_marks_authorization_sensitive() -> Result<(), ClientError> {
        let request = OutgoingRequest::get("/").with_header("Authorization", "Bearer t");
        let headers = header_map(&request)?;
        let value = headers.get(reqwest::header::AUTHORIZATION);
        assert!(value.is_some_and(HeaderValue::is_sensitive));
        Ok(())
    }

    #[test]
    fn debug_does_not_leak_token() -> Result<(), ClientError> {
        let client = HttpClient::builder(ClientConfig::default())
            .session(Session::with_token("hidden-token"))
            .build()?;
        assert!(!format!("{client:?}").contains("hidden-token"));
        Ok(())
    }
}
