//! Error types for the hiscores client.
//!
//! This module provides:
//! - [`HiscoresError`]: every way a single hiscores request can fail
//! - [`FailureKind`]: transport vs. format classification used in logs
//!
//! A missing player is not an error; the client reports it as `Ok(None)`.

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

use crate::models::GameMode;

/// Errors that can occur while fetching a player from the hiscores.
#[derive(Error, Debug)]
pub enum HiscoresError {
    /// The request exceeded the client timeout.
    #[error("Request for '{username}' in {mode} mode timed out")]
    Timeout { username: String, mode: GameMode },

    /// The request could not be sent or the body could not be read.
    #[error("Request for '{username}' in {mode} mode failed: {message}")]
    Request {
        username: String,
        mode: GameMode,
        message: String,
    },

    /// The endpoint answered with a non-2xx status other than 404.
    #[error("HTTP {status} for '{username}' in {mode} mode")]
    Http {
        username: String,
        mode: GameMode,
        status: u16,
    },

    /// The endpoint answered 2xx but the body is not a hiscores document.
    #[error("Malformed response for '{username}' in {mode} mode: {message}")]
    MalformedResponse {
        username: String,
        mode: GameMode,
        message: String,
    },
}

impl HiscoresError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hiscores_api::{FailureKind, GameMode, HiscoresError};
    ///
    /// let error = HiscoresError::Http {
    ///     username: "Zezima".to_string(),
    ///     mode: GameMode::Regular,
    ///     status: 503,
    /// };
    /// assert_eq!(error.kind(), FailureKind::Transport);
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } | Self::Request { .. } | Self::Http { .. } => {
                FailureKind::Transport
            }
            Self::MalformedResponse { .. } => FailureKind::Format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_transport() {
        let error = HiscoresError::Timeout {
            username: "Lynx Titan".to_string(),
            mode: GameMode::Regular,
        };
        assert_eq!(error.kind(), FailureKind::Transport);
        assert_eq!(
            error.to_string(),
            "Request for 'Lynx Titan' in regular mode timed out"
        );
    }

    #[test]
    fn test_request_failure_is_transport() {
        let error = HiscoresError::Request {
            username: "Zezima".to_string(),
            mode: GameMode::Ironman,
            message: "connection refused".to_string(),
        };
        assert_eq!(error.kind(), FailureKind::Transport);
    }

    #[test]
    fn test_http_status_is_transport() {
        let error = HiscoresError::Http {
            username: "Zezima".to_string(),
            mode: GameMode::Hardcore,
            status: 500,
        };
        assert_eq!(error.kind(), FailureKind::Transport);
        assert_eq!(
            error.to_string(),
            "HTTP 500 for 'Zezima' in hardcore mode"
        );
    }

    #[test]
    fn test_malformed_response_is_format() {
        let error = HiscoresError::MalformedResponse {
            username: "Gibbed".to_string(),
            mode: GameMode::Ultimate,
            message: "missing field `skills`".to_string(),
        };
        assert_eq!(error.kind(), FailureKind::Format);
        assert_eq!(FailureKind::Format.to_string(), "format");
    }
}
