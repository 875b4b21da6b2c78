//! Error types for the Wobble client.
//!
//! Every failure a call or a notification stream can produce maps onto one
//! variant of [`WobbleError`]. The type is `Clone` because a dead
//! subscription hands the same terminal error to every later retrieval.

use std::time::Duration;
use thiserror::Error;

/// Main error type for the Wobble client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WobbleError {
    // Transport errors
    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected HTTP status {status}")]
    HttpStatus { status: u16 },

    // Envelope errors
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// Structured error object returned by the server.
    #[error("{code}: {message}")]
    Remote { code: i64, message: String },

    #[error("Failed to decode result: {message}")]
    Decode { message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Notification subscription closed")]
    SubscriptionClosed,
}

/// Result type alias for Wobble operations.
pub type Result<T> = std::result::Result<T, WobbleError>;

impl From<serde_json::Error> for WobbleError {
    fn from(err: serde_json::Error) -> Self {
        WobbleError::Decode {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for WobbleError {
    fn from(err: url::ParseError) -> Self {
        WobbleError::Config {
            message: format!("Invalid endpoint URL: {}", err),
        }
    }
}

impl WobbleError {
    /// The server-assigned error code, if this is a remote application error.
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            WobbleError::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the failure happened below the JSON-RPC layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WobbleError::Transport { .. } | WobbleError::Timeout(_) | WobbleError::HttpStatus { .. }
        )
    }
}
