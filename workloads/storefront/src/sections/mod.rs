//! HTML section renderers.

pub mod banner;
pub mod filters;
pub mod gallery;
pub mod info;
pub mod layout;
pub mod pagination;
pub mod product_card;
pub mod related;
pub mod tabs;

pub use banner::*;
pub use filters::{render_filters, render_products_header};
pub use gallery::render_gallery;
pub use info::{render_info, render_product_overview};
pub use layout::{page_shell, render_footer, render_navbar};
pub use pagination::render_pagination;
pub use product_card::{render_price, render_product_card, render_product_grid, render_stars};
pub use related::{render_related, render_related_fallback};
pub use tabs::render_tabs;
