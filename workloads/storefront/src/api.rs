//! `/api/rpc/*` endpoint.

use vibe_core::RequestContext;
use vibe_data::Transport;
use vibe_observability::StructuredLogger;
use vibe_rpc::{dispatch, procedure_path, ProductRouter, RpcResponse};

/// Run one procedure call and log its outcome.
pub async fn handle<T: Transport>(
    router: &ProductRouter<T>,
    ctx: &RequestContext,
    body: &[u8],
    logger: &StructuredLogger,
) -> RpcResponse {
    let procedure = procedure_path(&ctx.path).unwrap_or("");
    let response = dispatch(router, procedure, ctx.method, ctx.query_param("input"), body).await;

    let status = response.status.as_u16();
    let builder = if response.is_success() {
        logger.info_builder("RPC call completed")
    } else if response.status.is_server_error() {
        logger.error_builder("RPC call failed")
    } else {
        logger.warn_builder("RPC call rejected")
    };
    builder
        .field("procedure", procedure)
        .field("method", ctx.method.as_str())
        .field_u64("status", status as u64)
        .emit();

    response
}

/// Response headers for an RPC reply.
pub fn response_headers(request_id: &str) -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("x-request-id".to_string(), request_id.to_string()),
        ("cache-control".to_string(), "no-store".to_string()),
    ]
}
