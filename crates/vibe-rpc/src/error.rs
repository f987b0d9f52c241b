//! RPC error codes and upstream error mapping.

use std::fmt;

use http::StatusCode;
use serde::Serialize;
use vibe_data::FetchError;

/// Error codes a procedure can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcErrorCode {
    BadRequest,
    NotFound,
    MethodNotSupported,
    InternalServerError,
}

impl RpcErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotSupported => "METHOD_NOT_SUPPORTED",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP status for the RPC endpoint response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON-RPC 2.0 numeric code carried in the error envelope.
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::BadRequest => -32600,
            Self::NotFound => -32004,
            Self::MethodNotSupported => -32005,
            Self::InternalServerError => -32603,
        }
    }
}

impl fmt::Display for RpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed procedure call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct RpcError {
    pub code: RpcErrorCode,
    pub message: String,
}

impl RpcError {
    pub fn new(code: RpcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::InternalServerError, message)
    }

    pub fn method_not_supported(message: impl Into<String>) -> Self {
        Self::new(RpcErrorCode::MethodNotSupported, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.code == RpcErrorCode::NotFound
    }

    /// Map an upstream failure for the action described by `action`
    /// (e.g. "fetch product").
    ///
    /// `not_found` replaces the message for upstream 404s when given.
    pub fn from_fetch(error: &FetchError, action: &str, not_found: Option<String>) -> Self {
        match error {
            FetchError::Http { status: 404, .. } => Self::not_found(
                not_found.unwrap_or_else(|| format!("Failed to {}: {}", action, reason(404))),
            ),
            FetchError::Http { status, .. } => {
                Self::bad_request(format!("Failed to {}: {}", action, reason(*status)))
            }
            FetchError::Connection(_) | FetchError::Deserialization(_) | FetchError::Request(_) => {
                Self::internal(format!("Failed to {}", action))
            }
        }
    }
}

fn reason(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status))
}
