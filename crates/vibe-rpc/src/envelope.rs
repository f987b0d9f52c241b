//! Wire envelope for the RPC endpoint.
//!
//! Success: `{"result":{"data":<value>}}`.
//! Failure: `{"error":{"message","code","data":{"code","httpStatus","path"}}}`.

use http::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};

use crate::RpcError;

/// A rendered RPC response.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RpcResponse {
    pub fn success<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                status: StatusCode::OK,
                body: json!({ "result": { "data": data } }),
            },
            Err(e) => Self::error(
                &RpcError::internal(format!("Failed to serialize response: {}", e)),
                None,
            ),
        }
    }

    /// Error envelope. `path` is the procedure path when one was resolved.
    pub fn error(error: &RpcError, path: Option<&str>) -> Self {
        let status = error.code.status_code();
        Self {
            status,
            body: json!({
                "error": {
                    "message": error.message,
                    "code": error.code.json_rpc_code(),
                    "data": {
                        "code": error.code.as_str(),
                        "httpStatus": status.as_u16(),
                        "path": path,
                    }
                }
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as a JSON string.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}
