//! Core abstractions for the Vibe Check storefront.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `RequestContext` - Typed request parameters
//! - `SiteConfig` - Site-wide configuration loaded from `vibe.toml`
//! - `TimingContext` - Request timing marks
//! - URL and HTML encoding helpers

mod config;
mod context;
mod encoding;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use encoding::*;
pub use error::*;
pub use lifecycle::*;
