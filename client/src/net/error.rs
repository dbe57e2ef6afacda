//! Error type shared by every REST wrapper.
//!
//! ERROR HANDLING
//! ==============
//! Callers never distinguish retryable from fatal failures; they log the
//! error and surface `Display` output in a toast. The backend's FastAPI
//! `{"detail": ...}` body is preferred over a bare status code.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; `detail` carries the backend's message when present.
    #[error("{}", status_message(*.status, .detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called during server rendering where no browser HTTP stack exists.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status { status, detail: extract_detail(body) }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_owned(),
        None => format!("request failed: {status}"),
    }
}

/// Pull a human-readable message from a FastAPI error body.
///
/// Handles both `{"detail": "text"}` and validation errors shaped
/// `{"detail": [{"msg": "text", ...}]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let messages = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect::<Vec<_>>();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
