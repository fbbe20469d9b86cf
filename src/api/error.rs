//! API error types
//!
//! Every failure is reported to the user as one message string; the variants only
//! keep enough context for logging.

use serde_json::Value;
use thiserror::Error;

/// Message used when a failed response carries no readable error message
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend call failure
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS or request-building failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status
    ///
    /// `message` is the envelope's `error.message`, or the generic fallback.
    #[error("{message}")]
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Success status with a body that does not match the expected type
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Request URL could not be formed (e.g. a relative path without a base URL)
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build a status error from a failed response body
    ///
    /// Uses `{"error": {"message": ...}}` when present and non-empty, otherwise the
    /// generic fallback message.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        // Fields are read individually so a mistyped sibling does not hide the message.
        let detail = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("error").cloned())
            .unwrap_or(Value::Null);

        let text = |field: &str| {
            detail
                .get(field)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };
        let code = text("code");
        let message = text("message");

        ApiError::Status {
            status,
            code,
            message: message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    /// HTTP status, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}
