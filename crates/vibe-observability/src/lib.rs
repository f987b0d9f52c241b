//! Observability for the Vibe Check storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `MetricsCollector` - Per-request section and upstream timings

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export RequestId and TimingContext from vibe-core for convenience
pub use vibe_core::{RequestId, TimingContext};
