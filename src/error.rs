//! Error types for the NFHub NFCe client.
//!
//! Every operation resolves to exactly one [`ApiResponse`](crate::ApiResponse)
//! or exactly one [`NfceError`]; nothing is retried or suppressed inside this
//! crate.

use thiserror::Error;

/// Unified error type for all NFCe operations.
#[derive(Debug, Error)]
pub enum NfceError {
    /// Input rejected locally, before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backend answered with a non-success status.
    ///
    /// `message` carries the most specific detail the response body offered:
    /// its `message` field, its `errors` list joined line by line, or the
    /// serialized response envelope as a last resort.
    #[error("api error (status {status}): {message}")]
    ApiError {
        status: u16,
        message: String,
        /// Decoded response body, when the backend sent one.
        body: Option<serde_json::Value>,
    },

    /// The HTTP transport itself failed (connection, TLS, body read).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON-mode response body could not be decoded.
    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration (base URL, header name/value).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl NfceError {
    /// Create an API error without a decoded body.
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// HTTP status associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was produced before reaching the network.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_constructor_carries_status() {
        let err = NfceError::api_error(422, "unprocessable");
        assert_eq!(err.status_code(), Some(422));
        assert!(!err.is_local());
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: NfceError = json_err.into();
        assert!(matches!(err, NfceError::Json(_)));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn local_errors_are_flagged() {
        assert!(NfceError::InvalidInput("empty".into()).is_local());
        assert!(NfceError::Configuration("bad url".into()).is_local());
    }
}
