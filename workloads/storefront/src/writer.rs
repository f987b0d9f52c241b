//! Page output: streaming sink plus section metrics.

use std::fmt::Display;

use futures::Sink;
use vibe_core::WorkloadError;
use vibe_data::CallRecord;
use vibe_observability::{MetricsCollector, UpstreamMetrics};
use vibe_streaming::{Shell, StreamingSink};

/// Writes a page shell-first and records each section in the request
/// metrics.
pub struct PageWriter<'m, S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    sink: StreamingSink<S, E>,
    metrics: &'m mut MetricsCollector,
}

impl<'m, S, E> PageWriter<'m, S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: StreamingSink<S, E>, metrics: &'m mut MetricsCollector) -> Self {
        Self { sink, metrics }
    }

    /// Flush the opening shell.
    pub async fn open(&mut self, shell: &Shell) -> Result<(), WorkloadError> {
        self.sink.send_shell(&shell.render_opening()).await?;
        self.metrics.record_shell_sent();
        Ok(())
    }

    pub async fn section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.send(name, html, false).await
    }

    /// A section showing its error or empty state.
    pub async fn fallback(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.send(name, html, true).await
    }

    async fn send(&mut self, name: &str, html: &str, used_fallback: bool) -> Result<(), WorkloadError> {
        self.metrics.record_section_start(name);
        let bytes = self.sink.send_section(name, html).await?;
        self.metrics.record_section_sent(name, Some(bytes), used_fallback);
        Ok(())
    }

    /// Send the closing shell and complete the response.
    pub async fn close(&mut self, shell: &Shell) -> Result<(), WorkloadError> {
        self.sink.finish(&shell.render_closing()).await
    }

    pub fn sink(&self) -> &StreamingSink<S, E> {
        &self.sink
    }

    pub fn into_sink(self) -> StreamingSink<S, E> {
        self.sink
    }
}

/// Metrics entry for a finished upstream call.
pub fn upstream_metrics(call: &CallRecord) -> UpstreamMetrics {
    let mut metrics = UpstreamMetrics::new(&call.label, &call.url, call.duration)
        .with_attempts(call.attempts);
    if let Some(status) = call.status {
        metrics = metrics.with_status(status);
    }
    if let Some(error) = &call.error {
        metrics = metrics.with_error(error);
    }
    metrics
}
