//! Page handlers.
//!
//! A page is handled in two steps. `plan` does whatever must happen before
//! the status line is committed (only the product page needs to look
//! anything up), then `render` streams the shell and sections.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod product_detail;
pub mod products;

use std::fmt::Display;

use futures::Sink;
use vibe_catalog::{Product, ProductsQuery};
use vibe_core::{QueryParams, SiteConfig, WorkloadError};
use vibe_data::Transport;
use vibe_observability::StructuredLogger;
use vibe_rpc::ProductRouter;

use crate::routes::Route;
use crate::writer::PageWriter;

/// What a page handler needs from the request.
pub struct Site<'a, T> {
    pub config: &'a SiteConfig,
    pub router: &'a ProductRouter<T>,
    pub logger: &'a StructuredLogger,
}

/// A page ready to stream.
#[derive(Debug, Clone, PartialEq)]
pub enum PagePlan {
    Home,
    About,
    Contact,
    Products(ProductsQuery),
    Product { product: Box<Product>, image: usize },
    /// Product lookup failed; `status` is 404 or 502.
    ProductMissing { status: u16 },
    NotFound { path: String },
}

impl PagePlan {
    pub fn status(&self) -> u16 {
        match self {
            PagePlan::ProductMissing { status } => *status,
            PagePlan::NotFound { .. } => 404,
            _ => 200,
        }
    }
}

/// Resolve a page route. RPC routes are not pages and plan as not found.
pub async fn plan<T: Transport>(
    route: &Route,
    path: &str,
    query: &QueryParams,
    site: &Site<'_, T>,
) -> PagePlan {
    match route {
        Route::Home => PagePlan::Home,
        Route::About => PagePlan::About,
        Route::Contact => PagePlan::Contact,
        Route::Products => {
            PagePlan::Products(ProductsQuery::from_params(query, site.config.catalog.page_size))
        }
        Route::Product(id) => product_detail::load(*id, query, site).await,
        Route::Rpc(_) | Route::NotFound => PagePlan::NotFound {
            path: path.to_string(),
        },
    }
}

/// Stream a planned page.
pub async fn render<T, S, E>(
    plan: &PagePlan,
    site: &Site<'_, T>,
    out: &mut PageWriter<'_, S, E>,
) -> Result<(), WorkloadError>
where
    T: Transport,
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    match plan {
        PagePlan::Home => home::render(site.config, out).await,
        PagePlan::About => about::render(site.config, out).await,
        PagePlan::Contact => contact::render(site.config, out).await,
        PagePlan::Products(query) => products::render(query, site, out).await,
        PagePlan::Product { product, image } => {
            product_detail::render(product, *image, site, out).await
        }
        PagePlan::ProductMissing { .. } => product_detail::render_missing(site.config, out).await,
        PagePlan::NotFound { path } => not_found::render(path, site.config, out).await,
    }
}
