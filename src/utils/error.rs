//! Error types and handling
//!
//! Transport and serialization failures surface through `ClientError`.
//! Application-level failures reported by the service travel inside the
//! response envelope (`status`/`msg`) and are never converted into this
//! enum; callers inspect the envelope instead of catching errors.

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (connection refused,
    /// timeout, TLS failure)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body, empty if unreadable
        body: String,
    },

    /// The request payload could not be serialized to JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected envelope
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

// Implement From for common error types

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Transport(format!("request timed out: {}", err))
        } else if err.is_connect() {
            ClientError::Transport(format!("connection failed: {}", err))
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Deserialization(err.to_string())
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
