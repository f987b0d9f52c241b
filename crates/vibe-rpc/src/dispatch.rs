//! HTTP dispatch for `/api/rpc/product.<name>`.
//!
//! Queries are called with GET and take their input as a URL-encoded JSON
//! `input` query parameter. Mutations are called with POST and take a JSON
//! body. A missing or `null` input is read as `{}`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use vibe_core::Method;
use vibe_data::Transport;

use crate::input::*;
use crate::{Procedure, ProcedureKind, ProductRouter, RpcError, RpcResponse};

/// Path prefix the RPC endpoint is mounted under.
pub const RPC_PREFIX: &str = "/api/rpc/";

/// Procedure path from a request path, e.g. `product.list` from
/// `/api/rpc/product.list`.
pub fn procedure_path(request_path: &str) -> Option<&str> {
    request_path
        .strip_prefix(RPC_PREFIX)
        .map(|p| p.trim_end_matches('/'))
        .filter(|p| !p.is_empty())
}

/// Resolve, validate and run one procedure call.
///
/// `input` is the decoded `input` query parameter; `body` is the request
/// body. Only the one matching the procedure kind is read.
pub async fn dispatch<T: Transport>(
    router: &ProductRouter<T>,
    path: &str,
    method: Method,
    input: Option<&str>,
    body: &[u8],
) -> RpcResponse {
    let Some(procedure) = Procedure::parse(path) else {
        return RpcResponse::error(
            &RpcError::not_found(format!("No \"{}\" procedure on path \"{}\"", kind_word(method), path)),
            Some(path),
        );
    };

    let raw = match (procedure.kind(), method) {
        (ProcedureKind::Query, Method::Get | Method::Head) => input.map(str::as_bytes),
        (ProcedureKind::Mutation, Method::Post) => Some(body),
        (ProcedureKind::Query, _) => {
            return RpcResponse::error(
                &RpcError::method_not_supported(format!(
                    "Unsupported {} method called on query procedure",
                    method.as_str()
                )),
                Some(path),
            );
        }
        (ProcedureKind::Mutation, _) => {
            return RpcResponse::error(
                &RpcError::method_not_supported(format!(
                    "Unsupported {} method called on mutation procedure",
                    method.as_str()
                )),
                Some(path),
            );
        }
    };

    match call(router, procedure, raw).await {
        Ok(resp) => resp,
        Err(e) => RpcResponse::error(&e, Some(path)),
    }
}

async fn call<T: Transport>(
    router: &ProductRouter<T>,
    procedure: Procedure,
    raw: Option<&[u8]>,
) -> Result<RpcResponse, RpcError> {
    match procedure {
        Procedure::List => ok(router.list(&parse_input(raw)?).await?),
        Procedure::GetById => ok(router.get_by_id(&parse_input(raw)?).await?),
        Procedure::GetByCategory => ok(router.get_by_category(&parse_input(raw)?).await?),
        Procedure::Search => ok(router.search(&parse_input(raw)?).await?),
        Procedure::Categories => ok(router.categories().await?),
        Procedure::CategoryList => ok(router.category_list().await?),
        Procedure::AddProduct => {
            let input: AddProductInput = parse_input(raw)?;
            ok(router.add_product(&input).await?)
        }
        Procedure::UpdateProduct => {
            let input: UpdateProductInput = parse_input(raw)?;
            ok(router.update_product(&input).await?)
        }
        Procedure::DeleteProduct => {
            let input: DeleteProductInput = parse_input(raw)?;
            ok(router.delete_product(&input).await?)
        }
    }
}

fn ok<R: Serialize>(data: R) -> Result<RpcResponse, RpcError> {
    Ok(RpcResponse::success(&data))
}

/// Decode a procedure input. Empty, absent and `null` all mean `{}`.
pub fn parse_input<I: DeserializeOwned>(raw: Option<&[u8]>) -> Result<I, RpcError> {
    let value = match raw.filter(|b| !b.iter().all(u8::is_ascii_whitespace)) {
        Some(bytes) => serde_json::from_slice::<Value>(bytes)
            .map_err(|e| RpcError::bad_request(format!("Input is not valid JSON: {}", e)))?,
        None => Value::Null,
    };
    let value = match value {
        Value::Null => Value::Object(Default::default()),
        v => v,
    };
    serde_json::from_value(value).map_err(|e| RpcError::bad_request(format!("Invalid input: {}", e)))
}

fn kind_word(method: Method) -> &'static str {
    match method {
        Method::Post => "mutation",
        _ => "query",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedure_path() {
        assert_eq!(procedure_path("/api/rpc/product.list"), Some("product.list"));
        assert_eq!(procedure_path("/api/rpc/product.list/"), Some("product.list"));
        assert_eq!(procedure_path("/api/rpc/"), None);
        assert_eq!(procedure_path("/products"), None);
    }

    #[test]
    fn test_parse_input_defaults() {
        let input: ListInput = parse_input(None).unwrap();
        assert_eq!(input.limit, 30);
        let input: ListInput = parse_input(Some(b"null")).unwrap();
        assert_eq!(input.skip, 0);
        let input: ListInput = parse_input(Some(b"  ")).unwrap();
        assert_eq!(input, ListInput::default());
    }

    #[test]
    fn test_parse_input_errors() {
        let err = parse_input::<GetByIdInput>(None).unwrap_err();
        assert_eq!(err.code, crate::RpcErrorCode::BadRequest);
        assert!(err.message.starts_with("Invalid input"));

        let err = parse_input::<GetByIdInput>(Some(b"{id:")).unwrap_err();
        assert!(err.message.starts_with("Input is not valid JSON"));

        assert!(parse_input::<GetByIdInput>(Some(br#"{"id":"seven"}"#)).is_err());
        assert_eq!(
            parse_input::<GetByIdInput>(Some(br#"{"id":7}"#)).unwrap(),
            GetByIdInput { id: 7 }
        );
    }
}
