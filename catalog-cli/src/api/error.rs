//! Errors returned by the HTTP client

use thiserror::Error;

/// Failure of a single API request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Only POST and PUT may carry a payload
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A configured header could not be sent
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status {
        status: u16,
        url: String,
        body: Option<String>,
    },

    /// Connection, timeout, or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body, when the server sent one
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
