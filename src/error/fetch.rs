//! The single error kind surfaced by the lesson table.
//!
//! The variants only carry diagnostics for the log. The fetch coordinator
//! treats every variant the same way: keep the rows, report, clear loading.

use thiserror::Error;

use crate::traits::HttpError;

/// Fixed text shown to the user whenever a page fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Error Loading Lessons.";

/// A page of lessons could not be fetched.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] HttpError),

    /// Server answered with a non-2xx status
    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text for the user-facing error channel.
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "E_FETCH_TRANSPORT",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Decode(_) => "E_FETCH_DECODE",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_fixed() {
        let errors = [
            FetchError::Transport(HttpError::Timeout("30s".to_string())),
            FetchError::Status {
                status: 500,
                message: "boom".to_string(),
            },
            FetchError::Decode("eof".to_string()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), "Error Loading Lessons.");
        }
    }

    #[test]
    fn test_display_and_codes() {
        let err = FetchError::Status {
            status: 404,
            message: "no such course".to_string(),
        };
        assert_eq!(err.to_string(), "server returned HTTP 404: no such course");
        assert_eq!(err.error_code(), "E_FETCH_STATUS");

        let err: FetchError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.to_string(), "request failed: connection failed: refused");
        assert_eq!(err.error_code(), "E_FETCH_TRANSPORT");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
