//! Error types for evidence retrieval

use thiserror::Error;
use veracity_domain::ErrorKind;

/// Evidence retrieval errors
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// No topics to search for
    #[error("Empty search query")]
    EmptyQuery,

    /// Connection error (network, DNS, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request did not complete in time
    #[error("Request timed out")]
    Timeout,

    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Status {
        /// Status code returned by the server
        status: u16,
        /// Error description
        message: String,
    },

    /// Error object returned by the MediaWiki API
    #[error("API error {code}: {info}")]
    Api {
        /// MediaWiki error code
        code: String,
        /// Human-readable description
        info: String,
    },

    /// Body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Other request failure
    #[error("Request error: {0}")]
    Request(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RetrievalError {
    /// Failure category reported to the user
    pub fn kind(&self) -> ErrorKind {
        match self {
            RetrievalError::EmptyQuery => ErrorKind::NoTopicFound,
            _ => ErrorKind::RetrievalFailure,
        }
    }
}

impl From<reqwest::Error> for RetrievalError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RetrievalError::Timeout
        } else if e.is_connect() {
            RetrievalError::Connection(e.to_string())
        } else if let Some(status) = e.status() {
            RetrievalError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else if e.is_decode() {
            RetrievalError::Decode(e.to_string())
        } else {
            RetrievalError::Request(e.to_string())
        }
    }
}
