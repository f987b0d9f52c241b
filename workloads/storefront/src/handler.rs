//! Spin entry point.

use anyhow::{anyhow, Result};
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use vibe_core::{Method, RequestContext};
use vibe_data::{FetchClient, SpinTransport};
use vibe_observability::{LogFormat, MetricsCollector, StructuredLogger};
use vibe_rpc::{procedure_path, ProductRouter, RpcError, RpcResponse};
use vibe_streaming::StreamingSink;

use crate::pages::{self, Site};
use crate::routes::Route;
use crate::writer::PageWriter;
use crate::{api, load_config, page_headers, record_calls, sends_page_body, COMPONENT};

#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("storefront: invalid configuration: {}", e);
            if let Err(e) = respond(response_out, 500, &[], b"Configuration error".to_vec()).await {
                eprintln!("storefront: failed to send error response: {}", e);
            }
            return;
        }
    };

    let method = convert_method(&req.method());
    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(method.unwrap_or(Method::Get), &path_with_query);
    let route = Route::resolve(&ctx.path);

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_component(COMPONENT)
        .with_route(route.name())
        .with_config(&config.logging);
    let mut metrics = MetricsCollector::new(ctx.request_id.clone());
    metrics.set_component(COMPONENT);
    metrics.set_route(&ctx.path);

    logger
        .info_builder("Request started")
        .field("method", ctx.method.as_str())
        .field("path", ctx.path.as_str())
        .emit();

    let client = FetchClient::new(SpinTransport, &config.api.base_url, ctx.request_id.clone())
        .with_query_retries(config.api.query_retries);
    let router = ProductRouter::new(client);

    let outcome = match method {
        None => {
            respond(response_out, 405, &[("allow".to_string(), "GET, HEAD, POST".to_string())], Vec::new())
                .await
                .map(|_| 405)
        }
        Some(m) if route.is_rpc() => {
            let body = if m == Method::Post {
                req.into_body().await.map_err(|e| format!("{:?}", e))
            } else {
                Ok(Vec::new())
            };
            serve_rpc(&router, &ctx, body, &logger, response_out).await
        }
        Some(Method::Get | Method::Head) => {
            let site = Site {
                config: &config,
                router: &router,
                logger: &logger,
            };
            serve_page(&route, &ctx, &site, &mut metrics, response_out).await
        }
        Some(_) => {
            respond(response_out, 405, &[("allow".to_string(), "GET, HEAD".to_string())], Vec::new())
                .await
                .map(|_| 405)
        }
    };

    record_calls(&mut metrics, router.client().take_calls());
    let status = match outcome {
        Ok(status) => Some(status),
        Err(e) => {
            logger
                .error_builder("Response failed")
                .field("error", e.to_string())
                .emit();
            None
        }
    };

    let summary = metrics.finalize(status);
    match logger.format() {
        LogFormat::Json => eprintln!("{}", summary.to_json()),
        LogFormat::Human => logger.info(&summary.to_summary()),
    }
}

async fn serve_rpc(
    router: &ProductRouter<SpinTransport>,
    ctx: &RequestContext,
    body: std::result::Result<Vec<u8>, String>,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> Result<u16> {
    let reply = match body {
        Ok(body) => api::handle(router, ctx, &body, logger).await,
        Err(e) => {
            logger
                .warn_builder("Failed to read RPC request body")
                .field("error", e)
                .emit();
            RpcResponse::error(
                &RpcError::bad_request("Failed to read request body"),
                procedure_path(&ctx.path),
            )
        }
    };

    let status = reply.status.as_u16();
    let headers = api::response_headers(&ctx.request_id.to_string());
    respond(response_out, status, &headers, reply.body_string().into_bytes()).await?;
    Ok(status)
}

async fn serve_page(
    route: &Route,
    ctx: &RequestContext,
    site: &Site<'_, SpinTransport>,
    metrics: &mut MetricsCollector,
    response_out: ResponseOutparam,
) -> Result<u16> {
    let plan = pages::plan(route, &ctx.path, &ctx.query, site).await;
    let status = plan.status();

    let response = build_response(status, &page_headers(&ctx.request_id.to_string()))?;
    let body = response.take_body();
    response_out.set(response);
    if !sends_page_body(ctx.method) {
        return Ok(status);
    }

    let sink = StreamingSink::new(body, ctx.timing.clone());
    let mut writer = PageWriter::new(sink, metrics);
    pages::render(&plan, site, &mut writer).await?;

    let sink = writer.sink();
    let timing = sink.timing();
    let micros = |d: Option<std::time::Duration>| d.map(|d| d.as_micros() as u64).unwrap_or(0);
    site.logger
        .debug_builder("Page streamed")
        .field_u64("bytes", sink.bytes_sent() as u64)
        .field_u64("sections", sink.sections_sent().len() as u64)
        .field_u64("time_to_shell_us", micros(timing.time_to_shell()))
        .field_u64("time_to_first_section_us", micros(timing.time_to_first_section()))
        .field_u64("elapsed_us", micros(Some(timing.elapsed())))
        .emit();
    Ok(status)
}

fn build_response(status: u16, headers: &[(String, String)]) -> Result<OutgoingResponse> {
    let list: Vec<(String, Vec<u8>)> = headers
        .iter()
        .map(|(k, v)| (k.clone(), v.clone().into_bytes()))
        .collect();
    let fields = Fields::from_list(&list).map_err(|e| anyhow!("invalid headers: {:?}", e))?;
    let response = OutgoingResponse::new(fields);
    response
        .set_status_code(status)
        .map_err(|_| anyhow!("invalid status code {}", status))?;
    Ok(response)
}

/// Send a complete, non-streamed response.
async fn respond(
    response_out: ResponseOutparam,
    status: u16,
    headers: &[(String, String)],
    body: Vec<u8>,
) -> Result<()> {
    let response = build_response(status, headers)?;
    let mut sink = response.take_body();
    response_out.set(response);
    if !body.is_empty() {
        sink.send(body).await.map_err(|e| anyhow!("{}", e))?;
    }
    Ok(())
}

/// `None` for methods the site never serves.
fn convert_method(method: &SpinMethod) -> Option<Method> {
    match method {
        SpinMethod::Get => Some(Method::Get),
        SpinMethod::Head => Some(Method::Head),
        SpinMethod::Post => Some(Method::Post),
        SpinMethod::Put => Some(Method::Put),
        SpinMethod::Delete => Some(Method::Delete),
        SpinMethod::Patch => Some(Method::Patch),
        SpinMethod::Options => Some(Method::Options),
        _ => None,
    }
}

