//! Product catalog model and display formatting.
//!
//! Products come from the upstream demo API with any field possibly missing.
//! This crate holds the wire model, the normalised `SafeProduct`, and the small
//! pieces of display arithmetic (discounts, stock tiers, pagination windows).

pub mod pagination;
pub mod pricing;
pub mod product;
pub mod query;
pub mod safe;
pub mod stock;

pub use pagination::{Pagination, PAGE_WINDOW};
pub use pricing::{calculate_discounted_price, format_price, savings};
pub use product::*;
pub use query::{ProductSource, ProductsQuery, SortField, SortOrder};
pub use safe::{
    create_safe_product, fallback_value, SafeProduct, DEFAULT_CATEGORY, PLACEHOLDER_IMAGE,
};
pub use stock::StockStatus;
