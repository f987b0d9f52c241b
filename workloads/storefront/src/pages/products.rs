//! Products listing page.

use std::fmt::Display;

use futures::Sink;
use vibe_catalog::{
    create_safe_product, Pagination, ProductSource, ProductsPage, ProductsQuery, SafeProduct,
    SortOrder,
};
use vibe_core::WorkloadError;
use vibe_data::Transport;
use vibe_rpc::{GetByCategoryInput, ListInput, ListOrder, ProductRouter, RpcError, SearchInput};

use super::Site;
use crate::routes::NavItem;
use crate::sections::{
    page_shell, render_empty_state, render_error_banner, render_filters, render_pagination,
    render_product_grid, render_products_header, render_stats,
};
use crate::writer::PageWriter;

/// The procedure call that feeds a products page.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsCall {
    List(ListInput),
    Category(GetByCategoryInput),
    Search(SearchInput),
}

impl ProductsCall {
    /// Category beats search, search beats the plain list. A category with a
    /// sort goes through `list`, which can sort inside a category.
    pub fn for_query(query: &ProductsQuery) -> Self {
        let limit = query.limit;
        let skip = query.skip();

        match query.source() {
            ProductSource::Category(category) if query.sort_by.is_none() => {
                Self::Category(GetByCategoryInput {
                    category: category.to_string(),
                    limit: Some(limit),
                    skip: Some(skip),
                })
            }
            ProductSource::Search(q) => Self::Search(SearchInput {
                q: q.to_string(),
                limit: Some(limit),
                skip: Some(skip),
            }),
            source => Self::List(ListInput {
                limit,
                skip,
                sort_by: query.sort_by.map(|f| f.as_str().to_string()),
                order: Some(match query.order {
                    SortOrder::Asc => ListOrder::Asc,
                    SortOrder::Desc => ListOrder::Desc,
                }),
                category: match source {
                    ProductSource::Category(c) => Some(c.to_string()),
                    _ => None,
                },
            }),
        }
    }

    pub async fn run<T: Transport>(&self, router: &ProductRouter<T>) -> Result<ProductsPage, RpcError> {
        match self {
            Self::List(input) => router.list(input).await,
            Self::Category(input) => router.get_by_category(input).await,
            Self::Search(input) => router.search(input).await,
        }
    }
}

pub async fn render<T, S, E>(
    query: &ProductsQuery,
    site: &Site<'_, T>,
    out: &mut PageWriter<'_, S, E>,
) -> Result<(), WorkloadError>
where
    T: Transport,
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = page_shell(
        site.config,
        "Products",
        "Browse our selection of high-quality products from various categories.",
        Some(NavItem::Products),
    );
    out.open(&shell).await?;
    out.section("products-header", &render_products_header()).await?;

    let call = ProductsCall::for_query(query);
    let (products, categories) = futures::join!(call.run(site.router), site.router.categories());

    let categories = categories.unwrap_or_else(|e| {
        site.logger
            .warn_builder("Categories unavailable, rendering empty filter bar")
            .field("error", e.to_string())
            .emit();
        Vec::new()
    });
    out.section(
        "filters",
        &render_filters(&categories, query, &site.config.catalog.page_size_options),
    )
    .await?;

    let page = match products {
        Ok(page) => page,
        Err(e) => {
            site.logger
                .error_builder("Products unavailable")
                .field("error", e.to_string())
                .field("code", e.code.as_str())
                .emit();
            out.fallback("products", &render_error_banner(&query.href()))
                .await?;
            return out.close(&shell).await;
        }
    };

    let products: Vec<SafeProduct> = page.products.iter().map(create_safe_product).collect();
    if products.is_empty() {
        out.fallback("products", &render_empty_state()).await?;
    } else {
        out.section(
            "products",
            &format!(
                r#"<section data-section="products">{}</section>"#,
                render_product_grid(&products)
            ),
        )
        .await?;
    }

    let pagination = Pagination::new(query.page, query.limit, page.total);
    if pagination.should_render() {
        out.section("pagination", &render_pagination(&pagination, query))
            .await?;
    }
    out.section("stats", &render_stats(products.len(), page.total))
        .await?;

    site.logger
        .debug_builder("Products page rendered")
        .field_u64("shown", products.len() as u64)
        .field_u64("total", page.total)
        .field_u64("page", query.page as u64)
        .emit();

    out.close(&shell).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(qs: &str) -> ProductsCall {
        ProductsCall::for_query(&ProductsQuery::from_query_string(qs, 9))
    }

    #[test]
    fn test_plain_list() {
        assert_eq!(
            call("page=3"),
            ProductsCall::List(ListInput {
                limit: 9,
                skip: 18,
                sort_by: None,
                order: Some(ListOrder::Asc),
                category: None,
            })
        );
    }

    #[test]
    fn test_category_wins_over_search() {
        assert_eq!(
            call("category=beauty&q=red&page=2&limit=12"),
            ProductsCall::Category(GetByCategoryInput {
                category: "beauty".to_string(),
                limit: Some(12),
                skip: Some(12),
            })
        );
    }

    #[test]
    fn test_search() {
        assert_eq!(
            call("q=phone"),
            ProductsCall::Search(SearchInput {
                q: "phone".to_string(),
                limit: Some(9),
                skip: Some(0),
            })
        );
    }

    #[test]
    fn test_sorted_category_goes_through_list() {
        match call("category=laptops&sortBy=price&order=desc") {
            ProductsCall::List(input) => {
                assert_eq!(input.category.as_deref(), Some("laptops"));
                assert_eq!(input.sort_by.as_deref(), Some("price"));
                assert_eq!(input.order, Some(ListOrder::Desc));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }
}
