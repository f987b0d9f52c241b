//! Pagination controls.

use vibe_catalog::{Pagination, ProductsQuery, PAGE_WINDOW};

/// Previous / numbered / Next links. Empty when there is a single page.
pub fn render_pagination(pagination: &Pagination, query: &ProductsQuery) -> String {
    if !pagination.should_render() {
        return String::new();
    }

    let prev = if pagination.has_prev {
        format!(
            r#"<a href="{}" aria-label="Previous page">Previous</a>"#,
            query.href_for_page(pagination.page - 1)
        )
    } else {
        r#"<span class="disabled" aria-disabled="true">Previous</span>"#.to_string()
    };

    let next = if pagination.has_next {
        format!(
            r#"<a href="{}" aria-label="Next page">Next</a>"#,
            query.href_for_page(pagination.page + 1)
        )
    } else {
        r#"<span class="disabled" aria-disabled="true">Next</span>"#.to_string()
    };

    let pages: String = pagination
        .page_numbers(PAGE_WINDOW)
        .into_iter()
        .map(|p| {
            if p == pagination.page {
                format!(r#"<span class="current" aria-current="page">{}</span>"#, p)
            } else {
                format!(
                    r#"<a href="{}" aria-label="Page {}">{}</a>"#,
                    query.href_for_page(p),
                    p,
                    p
                )
            }
        })
        .collect();

    format!(
        r#"<nav class="pagination" aria-label="Pagination" data-section="pagination">{}{}{}</nav>"#,
        prev, pages, next
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buttons(html: &str) -> Vec<String> {
        html.split("aria-label=\"Page ")
            .skip(1)
            .map(|s| s.split('"').next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_single_page_hidden() {
        let q = ProductsQuery::from_query_string("", 9);
        assert_eq!(render_pagination(&Pagination::new(1, 9, 9), &q), "");
        assert_eq!(render_pagination(&Pagination::new(1, 9, 0), &q), "");
    }

    #[test]
    fn test_middle_window() {
        let q = ProductsQuery::from_query_string("page=6", 9);
        let html = render_pagination(&Pagination::new(6, 9, 194), &q);
        // Pages 4..=8 with 6 rendered as the current span.
        assert_eq!(buttons(&html), vec!["4", "5", "7", "8"]);
        assert!(html.contains(r#"<span class="current" aria-current="page">6</span>"#));
        assert!(html.contains(r#"href="/products?page=5" aria-label="Previous page""#));
        assert!(html.contains(r#"href="/products?page=7" aria-label="Next page""#));
    }

    #[test]
    fn test_first_page_clamped() {
        let q = ProductsQuery::from_query_string("", 9);
        let html = render_pagination(&Pagination::new(1, 9, 100), &q);
        assert_eq!(buttons(&html), vec!["2", "3", "4", "5"]);
        assert!(html.contains(r#"<span class="disabled" aria-disabled="true">Previous</span>"#));
        assert!(html.contains(r#"href="/products?page=2" aria-label="Page 2""#));
    }

    #[test]
    fn test_last_page_clamped() {
        let q = ProductsQuery::from_query_string("page=12", 9);
        let html = render_pagination(&Pagination::new(12, 9, 100), &q);
        assert_eq!(buttons(&html), vec!["8", "9", "10", "11"]);
        assert!(html.contains(r#"<span class="disabled" aria-disabled="true">Next</span>"#));
    }
}
