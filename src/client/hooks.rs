//! Pipeline stages applied around every dispatch.
//!
//! Pre-hooks see the [`OutgoingRequest`] before it is sent; post-hooks see the
//! unwrapped result. Both run in the order they were registered on the builder.

use super::{
    errors::ClientError,
    request::{OutgoingRequest, Payload},
};
use crate::{notify::Notifier, session::Session};
use secrecy::ExposeSecret;
use std::sync::Arc;

pub type RequestHook = Arc<dyn Fn(OutgoingRequest) -> OutgoingRequest + Send + Sync>;
pub type ResponseHook =
    Arc<dyn Fn(Result<Payload, ClientError>) -> Result<Payload, ClientError> + Send + Sync>;

pub const AUTHORIZATION: &str = "Authorization";

/// Attaches `Authorization: Bearer <token>` when the session holds a token.
///
/// Only the headers are touched. Without a token the request passes through
/// unchanged and the server decides whether the endpoint needs auth.
#[must_use]
pub fn bearer_auth(session: Session) -> RequestHook {
    Arc::new(move |mut request: OutgoingRequest| {
        if let Some(token) = session.token() {
            request.set_header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()));
        }
        request
    })
}

/// Reports each failure once through `notifier` and passes the result on.
#[must_use]
pub fn notify_failure(notifier: Arc<dyn Notifier>) -> ResponseHook {
    Arc::new(move |result: Result<Payload, ClientError>| {
        if let Err(err) = &result {
            notifier.notify(&err.user_message());
        }
        result
    })
}
