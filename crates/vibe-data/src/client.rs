//! Upstream fetch client with retry and call recording.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use vibe_core::{Method, RequestId};

use crate::dependency::DependencyTag;
use crate::{FetchError, RequestBuilder, Response, Transport};

/// Header carrying the storefront request ID upstream.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// One finished upstream call, retries folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    pub tag: DependencyTag,
    /// Caller-supplied label, e.g. the procedure path.
    pub label: String,
    pub method: Method,
    pub url: String,
    /// Status of the last attempt, if upstream answered.
    pub status: Option<u16>,
    pub attempts: u32,
    pub duration: Duration,
    pub error: Option<String>,
}

impl CallRecord {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Client for the upstream product API.
///
/// Generic over the transport so procedures can be exercised against a
/// scripted transport in tests. Every call is recorded for request metrics.
pub struct FetchClient<T> {
    transport: T,
    base_url: String,
    request_id: RequestId,
    query_retries: u32,
    calls: RefCell<Vec<CallRecord>>,
}

impl<T: Transport> FetchClient<T> {
    /// Create a client. A trailing `/` on `base_url` is ignored.
    pub fn new(transport: T, base_url: impl Into<String>, request_id: RequestId) -> Self {
        let base_url = base_url.into();
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            request_id,
            query_retries: 1,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Retries for non-mutation calls.
    pub fn with_query_retries(mut self, retries: u32) -> Self {
        self.query_retries = retries;
        self
    }

    /// Absolute URL for a path such as `/products/1`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Send a request, retrying per the tag's policy.
    ///
    /// Returns the 2xx response, or the last error once retries are spent.
    pub async fn send(
        &self,
        tag: DependencyTag,
        label: &str,
        request: RequestBuilder,
    ) -> Result<Response, FetchError> {
        let policy = tag.retry_policy(self.query_retries);
        let request = request
            .accept("application/json")
            .header(REQUEST_ID_HEADER, self.request_id.to_string());

        let start = Instant::now();
        let mut attempt = 0;
        let (result, status) = loop {
            let outcome = match self.transport.send(&request).await {
                Ok(resp) => {
                    let status = resp.status;
                    (resp.error_for_status(&request.url), Some(status))
                }
                Err(e) => (Err(e), None),
            };

            let retry = matches!(&outcome.0, Err(e) if policy.should_retry(e, attempt));
            if !retry {
                break outcome;
            }
            attempt += 1;
        };

        self.calls.borrow_mut().push(CallRecord {
            tag,
            label: label.to_string(),
            method: request.method,
            url: request.url.clone(),
            status,
            attempts: attempt + 1,
            duration: start.elapsed(),
            error: result.as_ref().err().map(|e| e.to_string()),
        });

        result
    }

    /// GET a path and decode the JSON body.
    pub async fn get_json<R: DeserializeOwned>(
        &self,
        tag: DependencyTag,
        label: &str,
        path: &str,
    ) -> Result<R, FetchError> {
        let request = RequestBuilder::new(Method::Get, self.url(path));
        self.send(tag, label, request).await?.json()
    }

    /// Send a JSON body and decode the JSON response.
    pub async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        tag: DependencyTag,
        label: &str,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, FetchError> {
        let request = RequestBuilder::new(method, self.url(path)).json(body)?;
        self.send(tag, label, request).await?.json()
    }

    /// Send a body-less request (e.g. DELETE) and decode the JSON response.
    pub async fn call_json<R: DeserializeOwned>(
        &self,
        tag: DependencyTag,
        label: &str,
        method: Method,
        path: &str,
    ) -> Result<R, FetchError> {
        let request = RequestBuilder::new(method, self.url(path));
        self.send(tag, label, request).await?.json()
    }

    /// Drain the calls recorded so far.
    pub fn take_calls(&self) -> Vec<CallRecord> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::collections::VecDeque;

    /// Replays canned responses in order and remembers what was sent.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<Response, FetchError>>>,
        seen: RefCell<Vec<RequestBuilder>>,
    }

    impl ScriptedTransport {
        fn reply(self, r: Result<Response, FetchError>) -> Self {
            self.replies.borrow_mut().push_back(r);
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: &RequestBuilder) -> Result<Response, FetchError> {
            self.seen.borrow_mut().push(request.clone());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Connection("script exhausted".into())))
        }
    }

    fn ok(body: serde_json::Value) -> Result<Response, FetchError> {
        Ok(Response::json_body(200, &body))
    }

    fn status(code: u16) -> Result<Response, FetchError> {
        Ok(Response::json_body(code, &serde_json::json!({"message": "nope"})))
    }

    fn client(t: ScriptedTransport) -> FetchClient<ScriptedTransport> {
        FetchClient::new(t, "https://dummyjson.com/", RequestId::from_string("req-42"))
    }

    #[test]
    fn test_url_joining() {
        let c = client(ScriptedTransport::default());
        assert_eq!(c.url("/products/1"), "https://dummyjson.com/products/1");
        assert_eq!(c.url("products"), "https://dummyjson.com/products");
        assert_eq!(c.url("http://other/x"), "http://other/x");
    }

    #[test]
    fn test_get_json_sends_headers_and_records() {
        let c = client(ScriptedTransport::default().reply(ok(serde_json::json!({"id": 1}))));
        let v: serde_json::Value =
            block_on(c.get_json(DependencyTag::Catalog, "product.getById", "/products/1")).unwrap();
        assert_eq!(v["id"], 1);

        let sent = c.transport.seen.borrow();
        assert_eq!(sent[0].header_value("x-request-id"), Some("req-42"));
        assert_eq!(sent[0].header_value("accept"), Some("application/json"));

        let calls = c.take_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].label, "product.getById");
        assert_eq!(calls[0].status, Some(200));
        assert!(calls[0].succeeded());
        assert!(c.take_calls().is_empty());
    }

    #[test]
    fn test_query_retried_once_on_server_error() {
        let c = client(
            ScriptedTransport::default()
                .reply(status(503))
                .reply(ok(serde_json::json!({"products": []}))),
        );
        let v: Result<serde_json::Value, _> =
            block_on(c.get_json(DependencyTag::Catalog, "product.list", "/products"));
        assert!(v.is_ok());
        let calls = c.take_calls();
        assert_eq!(calls[0].attempts, 2);
        assert_eq!(calls[0].status, Some(200));
    }

    #[test]
    fn test_not_found_not_retried() {
        let c = client(ScriptedTransport::default().reply(status(404)).reply(ok(serde_json::json!({}))));
        let err = block_on(c.get_json::<serde_json::Value>(
            DependencyTag::Catalog,
            "product.getById",
            "/products/999",
        ))
        .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(c.transport.seen.borrow().len(), 1);
        assert_eq!(c.take_calls()[0].error.as_deref(), Some("HTTP 404 for https://dummyjson.com/products/999"));
    }

    #[test]
    fn test_mutation_never_retried() {
        let c = client(ScriptedTransport::default().reply(status(500)).reply(ok(serde_json::json!({}))));
        let result: Result<serde_json::Value, _> = block_on(c.send_json(
            DependencyTag::Mutation,
            "product.addProduct",
            Method::Post,
            "/products/add",
            &serde_json::json!({"title": "Lamp"}),
        ));
        assert_eq!(result.unwrap_err().status(), Some(500));
        let seen = c.transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(seen[0].header_value("content-type"), Some("application/json"));
    }

    #[test]
    fn test_connection_error_exhausts_retries() {
        let c = client(ScriptedTransport::default()).with_query_retries(2);
        let err = block_on(c.get_json::<serde_json::Value>(DependencyTag::Search, "product.search", "/products/search?q=x"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
        let calls = c.take_calls();
        assert_eq!(calls[0].attempts, 3);
        assert_eq!(calls[0].status, None);
    }

    #[test]
    fn test_bad_json_is_deserialization_error() {
        let c = client(ScriptedTransport::default().reply(Ok(Response::new(200, Vec::new(), b"<html>".to_vec()))));
        let err = block_on(c.get_json::<serde_json::Value>(DependencyTag::Catalog, "product.list", "/products"))
            .unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
    }
}
