//! Shell-first HTML streaming.
//!
//! Every storefront page flushes its shell (doctype, head, navbar) before
//! any upstream call is awaited, then streams named sections:
//! - `StreamingSink` - Enforces shell-before-sections ordering
//! - `Shell` / `HeadContent` - Document skeleton around the sections

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
