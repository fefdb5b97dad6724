use serde_json::Value;
use thiserror::Error;

/// Message surfaced when the server gives no usable `detail`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
    #[error("request timed out")]
    Timeout,
    #[error("unable to reach the server: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("request failed ({status}): {}", detail.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Status { status: u16, detail: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("unexpected {0} payload")]
    UnexpectedPayload(&'static str),
}

impl ClientError {
    /// The text shown to the user: the server's `detail` when it sent one,
    /// the generic fallback otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// HTTP status for server-reported failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Maps reqwest failures, keeping timeouts distinct from other transport errors.
pub(crate) fn map_request_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Transport(err)
    }
}

/// Extracts the human-readable `detail` from an error body.
///
/// Accepts `{"detail": "text"}` and the validation shape
/// `{"detail": [{"msg": "..."}, ...]}`; anything else yields `None`.
pub(crate) fn error_detail(body: &[u8]) -> Option<String> {
    let json: Value = serde_json::from_slice(body).ok()?;

    match json.get("detail")? {
        Value::String(detail) => non_empty(detail),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .map(str::trim)
                .filter(|msg| !msg.is_empty())
                .collect();
            non_empty(&messages.join("; "))
        }
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
