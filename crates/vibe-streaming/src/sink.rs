//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use vibe_core::{TimingContext, WorkloadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    Initial,
    ShellSent,
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over any `Sink<Vec<u8>>`, so the same page code writes to Spin's
/// outgoing body in production and to a `Vec<Vec<u8>>` in tests.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called exactly once, before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.state != SinkState::Initial {
            return Err(WorkloadError::StreamError(
                "Shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Returns the number of bytes written.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<usize, WorkloadError> {
        self.ensure_open()?;

        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(html.len())
    }

    /// Send the closing HTML and complete the response.
    pub async fn finish(&mut self, closing_html: &str) -> Result<(), WorkloadError> {
        self.ensure_open()?;
        self.write(closing_html.as_bytes().to_vec()).await?;
        self.complete()
    }

    /// Mark the response complete without writing anything more.
    pub fn complete(&mut self) -> Result<(), WorkloadError> {
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), WorkloadError> {
        match self.state {
            SinkState::Initial => Err(WorkloadError::ShellNotSent),
            SinkState::Completed => Err(WorkloadError::StreamError(
                "Sink already completed".to_string(),
            )),
            SinkState::ShellSent => Ok(()),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }

    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written, shell included.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_section_before_shell_rejected() {
        let mut sink = sink();
        let err = block_on(sink.send_section("grid", "<div></div>")).unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
        assert!(sink.sections_sent().is_empty());
    }

    #[test]
    fn test_shell_then_sections_in_order() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            let n = sink.send_section("filters", "<form></form>").await.unwrap();
            assert_eq!(n, 13);
            sink.send_section("grid", "<ul></ul>").await.unwrap();
            sink.finish("</html>").await.unwrap();
        });

        assert_eq!(sink.sections_sent(), ["filters", "grid"]);
        assert!(sink.timing().time_to_shell().is_some());
        assert!(sink.timing().time_to_first_section().is_some());
        assert_eq!(sink.bytes_sent(), 6 + 13 + 9 + 7);

        let chunks = sink.into_inner();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], b"<html>");
        assert_eq!(chunks[3], b"</html>");
    }

    #[test]
    fn test_shell_only_once() {
        let mut sink = sink();
        block_on(sink.send_shell("a")).unwrap();
        assert!(block_on(sink.send_shell("b")).is_err());
    }

    #[test]
    fn test_no_writes_after_completion() {
        let mut sink = sink();
        block_on(sink.send_shell("a")).unwrap();
        sink.complete().unwrap();
        assert!(block_on(sink.send_section("late", "x")).is_err());
        assert!(block_on(sink.finish("y")).is_err());
    }
}
