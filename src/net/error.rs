//! API failure classification.
//!
//! ERROR HANDLING
//! ==============
//! The backend sends structured error bodies with a human-readable message;
//! anything else (connection refused, malformed JSON) collapses into the
//! transport/decode variants. Components only branch on "is this the
//! structured kind" to decide whether the server message is safe to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// A failed API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Structured error response from the backend; `message` is shown verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The request never produced a usable HTTP response.
    #[error("request failed: {0}")]
    Http(String),
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the server supplied a message that can be surfaced verbatim.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// Error body shape used by the backend. FastAPI-style endpoints use
/// `detail`; older handlers use `message`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

/// Build an [`ApiError::Api`] from a non-2xx response body, falling back to
/// a generic status line when the body carries no recognizable message.
#[must_use]
pub fn structured_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail.or(b.message))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    ApiError::Api { status, message }
}
