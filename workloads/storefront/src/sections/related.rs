//! "You Might Also Like" strip on the product page.

use vibe_catalog::SafeProduct;

use super::product_card::render_product_grid;

pub fn render_related(products: &[SafeProduct]) -> String {
    if products.is_empty() {
        return render_related_fallback();
    }
    format!(
        r#"<section class="card related" data-section="related">
    <h2>You Might Also Like</h2>
    {}
</section>"#,
        render_product_grid(products)
    )
}

/// Shown when the category lookup fails or has nothing else in it.
pub fn render_related_fallback() -> String {
    r#"<section class="card related" data-section="related">
    <h2>You Might Also Like</h2>
    <p class="related-empty">Related products coming soon!</p>
</section>"#
        .to_string()
}
