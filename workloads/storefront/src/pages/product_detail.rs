//! Product detail page.
//!
//! The product is fetched before the status line goes out so a missing
//! product gets a real 404. Related products are fetched after the main
//! sections are already streaming.

use std::fmt::Display;

use futures::Sink;
use vibe_catalog::{create_safe_product, Product, SafeProduct};
use vibe_core::{QueryParams, SiteConfig, WorkloadError};
use vibe_data::Transport;
use vibe_rpc::{GetByCategoryInput, GetByIdInput};

use super::{PagePlan, Site};
use crate::routes::NavItem;
use crate::sections::{
    page_shell, render_product_not_found, render_product_overview, render_related,
    render_related_fallback, render_tabs,
};
use crate::writer::PageWriter;

/// Upstream failures other than not-found.
pub const UPSTREAM_FAILURE_STATUS: u16 = 502;

/// Longest page description taken from the product text.
const DESCRIPTION_MAX_CHARS: usize = 160;

/// Look the product up. `id` is `None` when the path segment was not a number.
pub async fn load<T: Transport>(id: Option<u64>, query: &QueryParams, site: &Site<'_, T>) -> PagePlan {
    let Some(id) = id else {
        site.logger.info("Product id is not numeric");
        return PagePlan::ProductMissing { status: 404 };
    };

    match site.router.get_by_id(&GetByIdInput { id }).await {
        Ok(product) => PagePlan::Product {
            product: Box::new(product),
            image: query.parse_as("image").unwrap_or(0),
        },
        Err(e) if e.is_not_found() => {
            site.logger
                .info_builder("Product not found")
                .field_u64("product_id", id)
                .emit();
            PagePlan::ProductMissing { status: 404 }
        }
        Err(e) => {
            site.logger
                .error_builder("Product lookup failed")
                .field_u64("product_id", id)
                .field("error", e.to_string())
                .emit();
            PagePlan::ProductMissing {
                status: UPSTREAM_FAILURE_STATUS,
            }
        }
    }
}

pub async fn render<T, S, E>(
    product: &Product,
    image: usize,
    site: &Site<'_, T>,
    out: &mut PageWriter<'_, S, E>,
) -> Result<(), WorkloadError>
where
    T: Transport,
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let safe = create_safe_product(product);
    let shell = page_shell(
        site.config,
        &safe.title,
        &page_description(&safe.description),
        Some(NavItem::Products),
    );

    out.open(&shell).await?;
    out.section("product", &render_product_overview(&safe, image))
        .await?;
    out.section("tabs", &render_tabs(product, &safe)).await?;

    let related = fetch_related(product, site).await;
    if related.is_empty() {
        out.fallback("related", &render_related_fallback()).await?;
    } else {
        out.section("related", &render_related(&related)).await?;
    }

    out.close(&shell).await
}

/// Other products in the same category. Empty on failure.
async fn fetch_related<T: Transport>(product: &Product, site: &Site<'_, T>) -> Vec<SafeProduct> {
    let Some(category) = product.category_slug().filter(|c| !c.trim().is_empty()) else {
        return Vec::new();
    };
    let count = site.config.catalog.related_count as usize;
    if count == 0 {
        return Vec::new();
    }

    let input = GetByCategoryInput {
        category: category.to_string(),
        // One extra in case the current product is among them.
        limit: Some(site.config.catalog.related_count.saturating_add(1)),
        skip: None,
    };

    match site.router.get_by_category(&input).await {
        Ok(page) => pick_related(&page.products, product.id, count),
        Err(e) => {
            site.logger
                .warn_builder("Related products unavailable")
                .field("category", category)
                .field("error", e.to_string())
                .emit();
            Vec::new()
        }
    }
}

/// Up to `count` products, skipping `current_id`.
pub fn pick_related(candidates: &[Product], current_id: u64, count: usize) -> Vec<SafeProduct> {
    candidates
        .iter()
        .filter(|p| p.id != current_id)
        .take(count)
        .map(create_safe_product)
        .collect()
}

fn page_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_MAX_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// "Product Not Found" page, sent with whatever status the lookup produced.
pub async fn render_missing<S, E>(
    config: &SiteConfig,
    out: &mut PageWriter<'_, S, E>,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let title = "Product Not Found";
    let html = render_product_not_found();
    let shell = page_shell(config, title, title, Some(NavItem::Products));
    out.open(&shell).await?;
    out.fallback("not-found", &html).await?;
    out.close(&shell).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(ids: &[u64]) -> Vec<Product> {
        ids.iter()
            .map(|id| Product {
                id: *id,
                ..Product::default()
            })
            .collect()
    }

    #[test]
    fn test_pick_related_skips_current() {
        let picked = pick_related(&products(&[1, 2, 3, 4, 5]), 2, 4);
        let ids: Vec<u64> = picked.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_pick_related_truncates() {
        let picked = pick_related(&products(&[6, 7, 8, 9, 10]), 1, 4);
        assert_eq!(picked.len(), 4);
        assert_eq!(picked[3].id, 9);
    }

    #[test]
    fn test_page_description_truncated() {
        let long = "word ".repeat(60);
        let description = page_description(&long);
        assert!(description.ends_with("..."));
        assert!(description.chars().count() <= DESCRIPTION_MAX_CHARS + 3);
        assert_eq!(page_description("Short."), "Short.");
    }
}
