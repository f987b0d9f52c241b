//! Typed RPC procedures for the product catalog.
//!
//! Each procedure validates its input, forwards to one upstream REST endpoint
//! and maps failures onto a small set of error codes:
//! - upstream 404 -> `NOT_FOUND`
//! - any other non-2xx -> `BAD_REQUEST`
//! - transport or decode failure -> `INTERNAL_SERVER_ERROR`
//!
//! `dispatch` exposes the same procedures over HTTP at `/api/rpc/product.<name>`.

mod dispatch;
mod envelope;
mod error;
mod input;
mod procedure;
mod router;

pub use dispatch::*;
pub use envelope::*;
pub use error::*;
pub use input::*;
pub use procedure::*;
pub use router::*;
