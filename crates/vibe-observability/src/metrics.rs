//! Per-request timing metrics.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use vibe_core::RequestId;

/// Metrics for a single storefront request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Component name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first section (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_section_us: Option<u64>,
    /// Section timings, in the order they were started.
    pub sections: Vec<SectionMetrics>,
    /// Upstream API calls, in the order they completed.
    pub upstream: Vec<UpstreamMetrics>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a single page section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    pub name: String,
    /// Time from request start to section start (microseconds).
    pub start_us: u64,
    /// Time from request start to section sent (microseconds).
    pub sent_us: u64,
    /// Section render duration (microseconds).
    pub duration_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Whether the section rendered its error or empty state.
    pub used_fallback: bool,
}

/// One call to the upstream product API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamMetrics {
    /// Procedure path, e.g. `product.getById`.
    pub procedure: String,
    pub url: String,
    pub duration_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Attempts made, including the first.
    pub attempts: u32,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpstreamMetrics {
    /// Build an entry from a finished call.
    pub fn new(procedure: impl Into<String>, url: impl Into<String>, duration: Duration) -> Self {
        Self {
            procedure: procedure.into(),
            url: url.into(),
            duration_us: duration.as_micros() as u64,
            status_code: None,
            attempts: 1,
            success: true,
            error: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self.success = (200..300).contains(&status);
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.success = false;
        self.error = Some(error.into());
        self
    }
}

/// Collector for request metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    component: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    first_section_sent: Option<Instant>,
    sections: Vec<SectionMetricsBuilder>,
    upstream: Vec<UpstreamMetrics>,
}

#[derive(Debug)]
struct SectionMetricsBuilder {
    name: String,
    start: Instant,
    sent: Option<Instant>,
    bytes: Option<usize>,
    used_fallback: bool,
}

impl MetricsCollector {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            component: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            first_section_sent: None,
            sections: Vec::new(),
            upstream: Vec::new(),
        }
    }

    pub fn set_component(&mut self, component: impl Into<String>) {
        self.component = Some(component.into());
    }

    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Record section start. Restarting a known section resets its timing.
    pub fn record_section_start(&mut self, name: &str) {
        let now = Instant::now();
        match self.section_mut(name) {
            Some(section) => {
                section.start = now;
                section.sent = None;
            }
            None => self.sections.push(SectionMetricsBuilder {
                name: name.to_string(),
                start: now,
                sent: None,
                bytes: None,
                used_fallback: false,
            }),
        }
    }

    /// Record section sent.
    pub fn record_section_sent(&mut self, name: &str, bytes: Option<usize>, used_fallback: bool) {
        let now = Instant::now();

        if self.first_section_sent.is_none() {
            self.first_section_sent = Some(now);
        }

        match self.section_mut(name) {
            Some(section) => {
                section.sent = Some(now);
                section.bytes = bytes;
                section.used_fallback = used_fallback;
            }
            // Never started explicitly
            None => self.sections.push(SectionMetricsBuilder {
                name: name.to_string(),
                start: now,
                sent: Some(now),
                bytes,
                used_fallback,
            }),
        }
    }

    /// Record a finished upstream call.
    pub fn record_upstream(&mut self, call: UpstreamMetrics) {
        self.upstream.push(call);
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut SectionMetricsBuilder> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        let now = Instant::now();
        let start = self.start;
        let micros = |t: Instant, from: Instant| t.duration_since(from).as_micros() as u64;

        let sections = self
            .sections
            .into_iter()
            .map(|builder| {
                let sent = builder.sent.unwrap_or(now);
                SectionMetrics {
                    start_us: micros(builder.start, start),
                    sent_us: micros(sent, start),
                    duration_us: micros(sent, builder.start),
                    name: builder.name,
                    bytes: builder.bytes,
                    used_fallback: builder.used_fallback,
                }
            })
            .collect();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            component: self.component,
            route: self.route,
            time_to_shell_us: self.shell_sent.map(|t| micros(t, start)),
            time_to_first_section_us: self.first_section_sent.map(|t| micros(t, start)),
            sections,
            upstream: self.upstream,
            total_duration_us: micros(now, start),
            status_code,
        }
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Number of upstream calls that failed.
    pub fn failed_upstream_calls(&self) -> usize {
        self.upstream.iter().filter(|c| !c.success).count()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Request: {}", self.request_id));

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!("  Time to shell: {}us ({:.2}ms)", tts, tts as f64 / 1000.0));
        }

        lines.push(format!(
            "  Total: {}us ({:.2}ms)",
            self.total_duration_us,
            self.total_duration_us as f64 / 1000.0
        ));

        if !self.sections.is_empty() {
            lines.push("  Sections:".to_string());
            for section in &self.sections {
                let fallback = if section.used_fallback { " [fallback]" } else { "" };
                lines.push(format!(
                    "    {}: {}us ({:.2}ms){}",
                    section.name,
                    section.duration_us,
                    section.duration_us as f64 / 1000.0,
                    fallback
                ));
            }
        }

        if !self.upstream.is_empty() {
            lines.push(format!("  Upstream ({} failed):", self.failed_upstream_calls()));
            for call in &self.upstream {
                let status = match (call.success, call.status_code) {
                    (true, Some(code)) => code.to_string(),
                    (false, Some(code)) => format!("FAILED {}", code),
                    _ => "FAILED".to_string(),
                };
                lines.push(format!(
                    "    {} [{}] x{}: {}us - {}",
                    call.procedure, status, call.attempts, call.duration_us, call.url
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_keep_start_order() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-7"));
        metrics.set_component("storefront");
        metrics.record_shell_sent();
        metrics.record_section_start("filters");
        metrics.record_section_start("grid");
        metrics.record_section_sent("grid", Some(2048), false);
        metrics.record_section_sent("filters", Some(512), true);

        let result = metrics.finalize(Some(200));
        let names: Vec<&str> = result.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["filters", "grid"]);
        assert!(result.sections[0].used_fallback);
        assert_eq!(result.sections[1].bytes, Some(2048));
        assert!(result.time_to_shell_us.is_some());
        assert!(result.time_to_first_section_us.is_some());
        assert_eq!(result.status_code, Some(200));
    }

    #[test]
    fn test_unstarted_section_recorded_on_send() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-8"));
        metrics.record_section_sent("footer", None, false);
        let result = metrics.finalize(None);
        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].duration_us, 0);
    }

    #[test]
    fn test_upstream_status_sets_success() {
        let ok = UpstreamMetrics::new("product.list", "https://dummyjson.com/products", Duration::from_millis(3))
            .with_status(200);
        let missing = UpstreamMetrics::new("product.getById", "https://dummyjson.com/products/999", Duration::ZERO)
            .with_status(404);
        let broken = UpstreamMetrics::new("product.search", "https://dummyjson.com/products/search", Duration::ZERO)
            .with_attempts(2)
            .with_error("connection reset");

        assert!(ok.success);
        assert!(!missing.success);
        assert_eq!(broken.attempts, 2);

        let mut metrics = MetricsCollector::new(RequestId::from_string("req-9"));
        metrics.record_upstream(ok);
        metrics.record_upstream(missing);
        metrics.record_upstream(broken);
        let result = metrics.finalize(Some(502));

        assert_eq!(result.failed_upstream_calls(), 2);
        let summary = result.to_summary();
        assert!(summary.contains("product.getById [FAILED 404]"));
        assert!(summary.contains("product.search [FAILED] x2"));
    }

    #[test]
    fn test_json_shape() {
        let metrics = MetricsCollector::new(RequestId::from_string("req-10"));
        let json: serde_json::Value = serde_json::from_str(&metrics.finalize(Some(200)).to_json()).unwrap();
        assert_eq!(json["request_id"], "req-10");
        assert!(json["sections"].as_array().unwrap().is_empty());
        assert!(json.get("component").is_none());
    }
}
