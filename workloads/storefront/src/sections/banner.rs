//! Error, empty and not-found states.

use vibe_core::html_escape;

/// Products failed to load. "Try Again" reloads the same URL.
pub fn render_error_banner(retry_href: &str) -> String {
    format!(
        r#"<section data-section="products"><div class="error-banner" role="alert">
    <span>Failed to load products. Please try again.</span>
    <a href="{}">Try Again</a>
</div></section>"#,
        html_escape(retry_href)
    )
}

pub fn render_empty_state() -> String {
    r#"<section data-section="products"><div class="card empty-state">
    <p>No products found.</p>
    <a href="/products" class="btn">Clear filters</a>
</div></section>"#
        .to_string()
}

/// "Showing X of Y products".
pub fn render_stats(shown: usize, total: u64) -> String {
    format!(
        r#"<p class="stats" data-section="stats">Showing {} of {} products</p>"#,
        shown, total
    )
}

pub fn render_product_not_found() -> String {
    r#"<section class="card not-found" data-section="not-found">
    <h1>Product Not Found</h1>
    <p>Sorry, we couldn't find the product you're looking for.</p>
    <a href="/products" class="btn">Back to Products</a>
</section>"#
        .to_string()
}

pub fn render_page_not_found(path: &str) -> String {
    format!(
        r#"<section class="card not-found" data-section="not-found">
    <h1>Page Not Found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <a href="/" class="btn">Go Home</a>
</section>"#,
        html_escape(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_banner_retry_link() {
        let html = render_error_banner("/products?q=a&page=2");
        assert!(html.contains(r#"<a href="/products?q=a&amp;page=2">Try Again</a>"#));
    }

    #[test]
    fn test_stats() {
        assert_eq!(
            render_stats(9, 194),
            r#"<p class="stats" data-section="stats">Showing 9 of 194 products</p>"#
        );
    }

    #[test]
    fn test_not_found_path_escaped() {
        let html = render_page_not_found("/<script>");
        assert!(html.contains("/&lt;script&gt;"));
    }
}
