//! Products page header and filter controls.

use vibe_catalog::{Category, ProductsQuery, SortField, SortOrder};
use vibe_core::html_escape;

pub fn render_products_header() -> String {
    r#"<section class="products-header" data-section="products-header">
    <h1>Our Products</h1>
    <p>Browse our selection of high-quality products from various categories.</p>
</section>"#
        .to_string()
}

/// Category bar plus the search / sort / page-size form.
///
/// An empty `categories` slice renders just the "All" entry.
pub fn render_filters(categories: &[Category], query: &ProductsQuery, page_sizes: &[u32]) -> String {
    format!(
        r#"<section class="filters" data-section="filters">
    {}
    {}
</section>"#,
        render_category_bar(categories, query),
        render_filter_form(query, page_sizes)
    )
}

fn render_category_bar(categories: &[Category], query: &ProductsQuery) -> String {
    let active = query.category.as_deref();

    let mut links = vec![category_link(
        &query.href_for_category(None),
        "All",
        active.is_none(),
    )];
    links.extend(categories.iter().map(|c| {
        category_link(
            &query.href_for_category(Some(c.slug())),
            &c.name(),
            active == Some(c.slug()),
        )
    }));

    format!(
        r#"<nav class="category-bar" aria-label="Categories">{}</nav>"#,
        links.concat()
    )
}

fn category_link(href: &str, label: &str, active: bool) -> String {
    format!(
        r#"<a href="{}" class="btn btn-outline{}">{}</a>"#,
        html_escape(href),
        if active { " active" } else { "" },
        html_escape(label)
    )
}

fn render_filter_form(query: &ProductsQuery, page_sizes: &[u32]) -> String {
    let mut sort_options = vec![option("", "Default", query.sort_by.is_none())];
    sort_options.extend(
        SortField::ALL
            .iter()
            .map(|f| option(f.as_str(), f.display_name(), query.sort_by == Some(*f))),
    );

    let order_options: String = [SortOrder::Asc, SortOrder::Desc]
        .iter()
        .map(|o| option(o.as_str(), o.display_name(), query.order == *o))
        .collect();

    let mut sizes: Vec<u32> = page_sizes.to_vec();
    if !sizes.contains(&query.limit) {
        sizes.push(query.limit);
        sizes.sort_unstable();
    }
    let size_options: String = sizes
        .iter()
        .map(|n| option(&n.to_string(), &format!("{} per page", n), *n == query.limit))
        .collect();

    let category_input = match &query.category {
        Some(c) => format!(r#"<input type="hidden" name="category" value="{}">"#, html_escape(c)),
        None => String::new(),
    };

    format!(
        r#"<form class="filter-form" action="/products" method="GET">
        {category_input}
        <div>
            <label for="q">Search</label>
            <input type="search" id="q" name="q" value="{q}" placeholder="Search products...">
        </div>
        <div>
            <label for="sortBy">Sort by</label>
            <select id="sortBy" name="sortBy">{sort}</select>
        </div>
        <div>
            <label for="order">Order</label>
            <select id="order" name="order">{order}</select>
        </div>
        <div>
            <label for="limit">Show</label>
            <select id="limit" name="limit">{sizes}</select>
        </div>
        <button type="submit" class="btn">Apply</button>
    </form>"#,
        category_input = category_input,
        q = html_escape(query.q.as_deref().unwrap_or("")),
        sort = sort_options.concat(),
        order = order_options,
        sizes = size_options,
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}
