//! Request lifecycle tracking.

use std::time::{Duration, Instant};

/// Named timing marks relative to the start of a request.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: Vec<(String, Instant)>,
}

impl TimingContext {
    /// Create a new timing context starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    /// Record a timing mark. Re-marking a name replaces the earlier mark.
    pub fn mark(&mut self, name: &str) {
        let now = Instant::now();
        match self.marks.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = now,
            None => self.marks.push((name.to_string(), now)),
        }
    }

    /// Mark section sent.
    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section_{}_sent", section));
    }

    /// Offset of a mark from the request start.
    pub fn offset_of(&self, name: &str) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.duration_since(self.start))
    }

    /// Elapsed time since the request started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time until the shell was flushed.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.offset_of("shell_sent")
    }

    /// Time until the first section was sent.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.starts_with("section_") && k.ends_with("_sent"))
            .map(|(_, t)| t.duration_since(self.start))
            .min()
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_section_and_shell() {
        let mut timing = TimingContext::new();
        assert!(timing.time_to_shell().is_none());
        assert!(timing.time_to_first_section().is_none());

        timing.mark("shell_sent");
        timing.mark_section_sent("hero");
        assert!(timing.time_to_shell().is_some());
        assert!(timing.time_to_first_section().is_some());
    }

    #[test]
    fn test_remark_replaces() {
        let mut timing = TimingContext::new();
        timing.mark("a");
        timing.mark("a");
        assert_eq!(timing.marks.len(), 1);
    }
}
