//! Upstream data access for the Vibe Check storefront.
//!
//! This crate provides:
//! - `FetchClient` - Base-URL client with retry and per-call recording
//! - `Transport` - The seam between the client and the network
//! - `DependencyTag` - Semantic categories for upstream calls
//! - `RetryPolicy` - When a failed call is attempted again

mod client;
mod dependency;
mod error;
mod request;
mod response;
mod retry;
mod transport;

pub use client::*;
pub use dependency::*;
pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;
pub use retry::*;
pub use transport::*;
pub use vibe_core::Method;
