// src/errors.rs
// DOCUMENTATION: Custom error types for the client library
// PURPOSE: Centralized error handling for every backend wrapper

use thiserror::Error;

/// Client-side error types
/// DOCUMENTATION: One enum for every failure a wrapper can surface
/// Request/response methods propagate these; polling loops log them and
/// hand them to the error observer instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Location tracking not supported on this device")]
    LocationUnavailable,

    /// Non-success HTTP status. No distinction is made between 4xx and 5xx.
    #[error("{operation}")]
    RequestFailed {
        operation: &'static str,
        status: u16,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Map error: {0}")]
    Map(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status carried by a request failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Parse(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(e: validator::ValidationErrors) -> Self {
        ClientError::InvalidInput(e.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}

/// Callback receiving failures swallowed by background loops
pub type ErrorObserver = std::sync::Arc<dyn Fn(&ClientError) + Send + Sync>;
