//! Details / Specifications / Reviews tabs.
//!
//! Tabs switch with radio inputs and CSS only, so the section works without
//! any client script.

use vibe_catalog::{Product, Review, SafeProduct};
use vibe_core::html_escape;

use super::product_card::render_stars;

const SHIPPING_FALLBACK: &str =
    "Free shipping on all orders over $50. Standard delivery takes 3-5 business days.";
const RETURNS_FALLBACK: &str =
    "30-day returns on unopened items. Please contact our customer support team to initiate a return.";

pub fn render_tabs(product: &Product, safe: &SafeProduct) -> String {
    format!(
        r#"<section class="card tabs" data-section="tabs">
    <input type="radio" name="product-tab" id="tab-details" checked>
    <input type="radio" name="product-tab" id="tab-specs">
    <input type="radio" name="product-tab" id="tab-reviews">
    <div class="tab-labels">
        <label for="tab-details">Details</label>
        <label for="tab-specs">Specifications</label>
        <label for="tab-reviews">Reviews</label>
    </div>
    <div class="tab-panel panel-details">{}</div>
    <div class="tab-panel panel-specs">{}</div>
    <div class="tab-panel panel-reviews">{}</div>
</section>"#,
        render_details(product, safe),
        render_specs(product, safe),
        render_reviews(product, safe)
    )
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn render_details(product: &Product, safe: &SafeProduct) -> String {
    let block = |heading: &str, body: &str| {
        format!(
            r#"<div class="detail-block"><h3>{}</h3><p>{}</p></div>"#,
            heading,
            html_escape(body)
        )
    };

    [
        block("Full Description", &safe.description),
        block(
            "Shipping Information",
            non_blank(product.shipping_information.as_deref()).unwrap_or(SHIPPING_FALLBACK),
        ),
        block(
            "Return Policy",
            non_blank(product.return_policy.as_deref()).unwrap_or(RETURNS_FALLBACK),
        ),
    ]
    .concat()
}

fn render_specs(product: &Product, safe: &SafeProduct) -> String {
    let mut rows: Vec<(&str, String)> = vec![("Brand", safe.brand.clone())];
    if let Some(sku) = non_blank(product.sku.as_deref()) {
        rows.push(("SKU", sku.to_string()));
    }
    if let Some(weight) = product.weight.filter(|w| *w > 0.0) {
        rows.push(("Weight", format!("{} kg", weight)));
    }
    rows.push(("Stock", format!("{} units", safe.stock)));
    if let Some(dimensions) = &product.dimensions {
        rows.push(("Dimensions", format!("{} cm", dimensions.display())));
    }
    if let Some(warranty) = non_blank(product.warranty_information.as_deref()) {
        rows.push(("Warranty", warranty.to_string()));
    }
    if let Some(min) = product.minimum_order_quantity.filter(|m| *m > 0) {
        rows.push(("Min. Order", format!("{} units", min)));
    }

    let body: String = rows
        .iter()
        .map(|(label, value)| format!("<tr><th>{}</th><td>{}</td></tr>", label, html_escape(value)))
        .collect();
    format!(r#"<table class="spec-table"><tbody>{}</tbody></table>"#, body)
}

fn render_reviews(product: &Product, safe: &SafeProduct) -> String {
    let reviews = product.reviews();
    let average = product.average_review_rating().unwrap_or(safe.rating);

    let summary = format!(
        r#"<div class="review-summary">
        <span class="average">{:.1}</span>
        <div>{}<div class="muted">Based on {} reviews</div></div>
    </div>"#,
        average,
        render_stars(average),
        reviews.len()
    );

    let list = if reviews.is_empty() {
        r#"<div class="no-reviews"><h3>No Reviews Yet</h3><p>Be the first to review this product!</p></div>"#
            .to_string()
    } else {
        reviews.iter().map(render_review).collect()
    };

    format!("{}{}", summary, list)
}

fn render_review(review: &Review) -> String {
    let date = match review.formatted_date() {
        Some(date) => format!(r#"<span class="review-date">{}</span>"#, html_escape(&date)),
        None => String::new(),
    };

    format!(
        r#"<div class="review">
        <div class="review-head"><strong>{}</strong>{}</div>
        {}
        <p>{}</p>
    </div>"#,
        html_escape(non_blank(review.reviewer_name.as_deref()).unwrap_or("Anonymous")),
        date,
        render_stars(review.rating.unwrap_or(0.0)),
        html_escape(review.comment.as_deref().unwrap_or(""))
    )
}
