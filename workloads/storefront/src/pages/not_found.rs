//! 404 page for unknown paths.

use std::fmt::Display;

use futures::Sink;
use vibe_core::{SiteConfig, WorkloadError};

use crate::sections::{page_shell, render_page_not_found};
use crate::writer::PageWriter;

pub async fn render<S, E>(
    path: &str,
    config: &SiteConfig,
    out: &mut PageWriter<'_, S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = page_shell(config, "Page Not Found", "Page not found", None);
    out.open(&shell).await?;
    out.fallback("not-found", &render_page_not_found(path)).await?;
    out.close(&shell).await
}
