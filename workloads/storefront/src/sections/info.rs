//! Product info panel.

use vibe_catalog::{format_price, savings, SafeProduct, DEFAULT_CATEGORY};
use vibe_core::{html_escape, url_encode};

use super::gallery::render_gallery;
use super::product_card::{render_price, render_stars};

/// Discounts above this percentage get the savings callout.
const SAVINGS_CALLOUT_MIN: f64 = 5.0;

/// Back link, gallery and info panel side by side.
pub fn render_product_overview(product: &SafeProduct, image: usize) -> String {
    format!(
        r#"<section data-section="product">
<div class="back-link"><a href="/products" class="btn btn-outline">&larr; Back to Products</a></div>
<div class="product-detail">
{}
{}
</div>
</section>"#,
        render_gallery(product, image),
        render_info(product)
    )
}

pub fn render_info(product: &SafeProduct) -> String {
    let stock = product.stock_status();

    let available = if stock.is_available() {
        format!(r#"<span class="muted">{} available</span>"#, product.stock)
    } else {
        String::new()
    };

    let tags = if product.tags.is_empty() {
        String::new()
    } else {
        let links: String = product
            .tags
            .iter()
            .map(|tag| {
                format!(
                    r#"<a href="/products?q={}" class="badge">{}</a>"#,
                    url_encode(tag),
                    html_escape(tag)
                )
            })
            .collect();
        format!(
            r#"<div><p class="info-heading">Tags</p><div class="tag-list">{}</div></div>"#,
            links
        )
    };

    // No category to filter by.
    let category = if product.category == DEFAULT_CATEGORY {
        format!(
            r#"<span class="badge category-badge">{}</span>"#,
            html_escape(&product.category_name)
        )
    } else {
        format!(
            r#"<a href="/products?category={}" class="badge category-badge">{}</a>"#,
            url_encode(&product.category),
            html_escape(&product.category_name)
        )
    };

    let action = if stock.is_available() {
        r#"<button type="button" class="btn">Add to Cart</button>"#
    } else {
        r#"<button type="button" class="btn" disabled>Out of Stock</button>"#
    };

    format!(
        r#"<div class="card product-info">
    <div class="info-badges">
        {category}
        {stars}
        <span class="muted">{rating:.1}</span>
    </div>
    <h1>{title}</h1>
    <p class="muted">by {brand}</p>
    <div class="price-box">{price}</div>
    <div class="stock-row">
        <span class="badge {stock_class}">{stock_label}</span>
        {available}
    </div>
    <div>
        <p class="info-heading">Description</p>
        <p>{description}</p>
    </div>
    {tags}
    {callout}
    <div class="product-actions">{action}</div>
</div>"#,
        category = category,
        stars = render_stars(product.rating),
        rating = product.rating,
        title = html_escape(&product.title),
        brand = html_escape(&product.brand),
        price = render_price(product),
        stock_class = stock.css_class(),
        stock_label = stock.label(),
        available = available,
        description = html_escape(&product.description),
        tags = tags,
        callout = render_savings_callout(product),
        action = action,
    )
}

fn render_savings_callout(product: &SafeProduct) -> String {
    if product.discount_percentage <= SAVINGS_CALLOUT_MIN {
        return String::new();
    }
    format!(
        r#"<div class="savings-callout"><strong>SAVE {}</strong><span>You're saving {}% compared to the regular price!</span></div>"#,
        format_price(savings(product.price, product.discount_percentage)),
        product.discount_percentage.round() as i64
    )
}
