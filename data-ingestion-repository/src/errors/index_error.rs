//! Index error types.
//!
//! This module defines the errors that can occur while writing records to the
//! remote search index.

use thiserror::Error;

/// Errors that can occur during record index operations.
#[derive(Debug, Clone, Error)]
pub enum IndexError {
    /// The client was given an incomplete or malformed configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to reach the index service.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The service refused the credentials.
    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// The service rejected the write.
    #[error("Index rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Failed to serialize records for the request body.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IndexError {
    /// Create a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Classify a non-success HTTP status returned by the service.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Authentication { status, message },
            _ => Self::Rejected { status, message },
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
