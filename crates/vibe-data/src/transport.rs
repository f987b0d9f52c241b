//! The seam between `FetchClient` and the network.

use async_trait::async_trait;

use crate::{FetchError, RequestBuilder, Response};

/// Sends one request and returns the raw response.
///
/// Non-2xx statuses are returned as `Ok`; only failures to get any response
/// at all are errors.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &RequestBuilder) -> Result<Response, FetchError>;
}

/// Outbound HTTP through the Spin host.
///
/// The upstream host must be listed in the component's
/// `allowed_outbound_hosts`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn send(&self, request: &RequestBuilder) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};
        use vibe_core::Method;

        let method = match request.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
            Method::Head => SpinMethod::Head,
            Method::Options => SpinMethod::Options,
        };

        let mut builder = Request::builder();
        builder.method(method);
        builder.uri(request.url.as_str());
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        let outgoing = match &request.body {
            Some(body) => builder.body(body.clone()).build(),
            None => builder.build(),
        };

        let response: spin_sdk::http::Response = spin_sdk::http::send(outgoing)
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.to_string(), v.to_string())))
            .collect();

        Ok(Response::new(status, headers, response.into_body()))
    }
}
