//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never got a response (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response received but the status indicates failure
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response status is a success, but not the one the endpoint promises
    #[error("Unexpected status: expected {expected}, got {actual}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body is not the expected JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status carried by the error, if a response was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::UnexpectedStatus { actual, .. } => Some(*actual),
            Self::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Self::Network(e) => e.status(),
            Self::Parse(_) | Self::Config(_) => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
