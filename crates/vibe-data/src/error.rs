//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when calling the upstream API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Upstream answered with a non-2xx status.
    #[error("HTTP {status} for {url}")]
    Http {
        status: u16,
        url: String,
        /// Upstream `message` field or raw body, if any.
        message: Option<String>,
    },

    /// The request never produced a response.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The body was not the JSON we expected.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The request could not be built.
    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// HTTP status if upstream answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}
