use super::errors::ClientError;
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// A request as seen by the pipeline hooks, before it is handed to reqwest.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub method: Method,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl OutgoingRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: BTreeMap::new(),
            body: None,
            query: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets a header, replacing any existing one with the same name in any case.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers
            .retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// How the success body is handed back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseType {
    #[default]
    Json,
    /// Opaque content such as an export file; never parsed.
    Bytes,
}

/// Per-call settings that do not belong to the request itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub response_type: ResponseType,
}

impl RequestOptions {
    #[must_use]
    pub const fn json() -> Self {
        Self {
            response_type: ResponseType::Json,
        }
    }

    #[must_use]
    pub const fn bytes() -> Self {
        Self {
            response_type: ResponseType::Bytes,
        }
    }
}

/// The unwrapped body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Bytes(Vec<u8>),
}

impl Payload {
    /// # Errors
    /// Returns `UnexpectedPayload` if the call was made in binary mode.
    pub fn into_json(self) -> Result<Value, ClientError> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Bytes(_) => Err(ClientError::UnexpectedPayload("binary")),
        }
    }

    /// # Errors
    /// Returns `UnexpectedPayload` if the call was made in JSON mode.
    pub fn into_bytes(self) -> Result<Vec<u8>, ClientError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Json(_) => Err(ClientError::UnexpectedPayload("JSON")),
        }
    }
}
