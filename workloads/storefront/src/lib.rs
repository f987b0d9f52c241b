//! Vibe Check storefront.
//!
//! A Spin HTTP component serving:
//! - `/`, `/about`, `/contact` - static pages
//! - `/products` - filtered, sorted, paginated product listing
//! - `/products/{id}` - product detail with related products
//! - `/api/rpc/product.*` - the typed product procedures as JSON
//!
//! Pages stream shell-first. Everything but the Spin entry point in
//! `handler` builds natively and is tested against an in-memory transport.

pub mod api;
pub mod pages;
pub mod routes;
pub mod sections;
pub mod styles;
pub mod writer;

#[cfg(target_arch = "wasm32")]
mod handler;

use vibe_core::{ConfigError, Method, SiteConfig};
use vibe_data::CallRecord;
use vibe_observability::MetricsCollector;

/// Component name used in logs and metrics.
pub const COMPONENT: &str = "storefront";

/// Bundled defaults, overridable through `VIBE_*` variables.
pub const DEFAULT_CONFIG: &str = include_str!("../vibe.toml");

pub fn load_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::load(DEFAULT_CONFIG)
}

/// Move finished upstream calls into the request metrics.
pub fn record_calls(metrics: &mut MetricsCollector, calls: Vec<CallRecord>) {
    for call in &calls {
        metrics.record_upstream(writer::upstream_metrics(call));
    }
}

/// HEAD gets the status and headers of a page, never its body.
pub fn sends_page_body(method: Method) -> bool {
    method != Method::Head
}

/// Response headers for an HTML page.
pub fn page_headers(request_id: &str) -> Vec<(String, String)> {
    vec![
        ("content-type".to_string(), "text/html; charset=utf-8".to_string()),
        ("x-request-id".to_string(), request_id.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_skips_page_body() {
        assert!(!sends_page_body(Method::Head));
        assert!(sends_page_body(Method::Get));
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::from_toml_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.site.name, "Vibe Check");
        assert_eq!(config.api.base_url, "https://dummyjson.com");
        assert_eq!(config.catalog.page_size, 9);
        assert_eq!(config.catalog.page_size_options, vec![9, 12, 24, 30]);
        assert_eq!(config.catalog.related_count, 4);
    }
}
