//! Product card and the shared rating stars.

use vibe_catalog::pricing::discount_badge;
use vibe_catalog::{format_price, SafeProduct};
use vibe_core::html_escape;

/// Five stars, the first `floor(rating)` filled.
pub fn render_stars(rating: f64) -> String {
    let filled = rating.clamp(0.0, 5.0).floor() as usize;
    let mut html = format!(r#"<span class="stars" aria-label="Rated {:.1} out of 5">"#, rating);
    for i in 0..5 {
        if i < filled {
            html.push_str(r#"<span class="star">★</span>"#);
        } else {
            html.push_str(r#"<span class="star empty">★</span>"#);
        }
    }
    html.push_str("</span>");
    html
}

/// Price with the struck-through original when discounted.
pub fn render_price(product: &SafeProduct) -> String {
    let mut html = format!(
        r#"<span class="price-current">{}</span>"#,
        format_price(product.discounted_price())
    );
    if product.has_discount() {
        html.push_str(&format!(
            r#" <span class="price-original">{}</span>"#,
            format_price(product.price)
        ));
    }
    html
}

pub fn render_product_card(product: &SafeProduct) -> String {
    let href = format!("/products/{}", product.id);
    let title = html_escape(&product.title);
    let stock = product.stock_status();

    let badge = if product.has_discount() {
        format!(
            r#"<span class="discount-badge">{}</span>"#,
            discount_badge(product.discount_percentage)
        )
    } else {
        String::new()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <a href="{href}" class="product-card-image">
        <img src="{thumb}" alt="{title}" loading="lazy">
        {badge}
    </a>
    <div class="product-card-body">
        <div class="product-card-title">
            <h2><a href="{href}">{title}</a></h2>
            <div class="price">{price}</div>
        </div>
        <p class="muted">{brand}</p>
        <p class="product-card-description">{description}</p>
        <div class="product-card-meta">
            <span class="badge">{category}</span>
            {stars}
            <span class="badge {stock_class}">{stock_label}</span>
        </div>
        <div class="product-card-meta">
            <span class="muted">{rating:.1}</span>
            <a href="{href}" class="details-link">View Details &rarr;</a>
        </div>
    </div>
</article>"#,
        id = product.id,
        href = href,
        thumb = html_escape(&product.thumbnail),
        title = title,
        badge = badge,
        price = render_price(product),
        brand = html_escape(&product.brand),
        description = html_escape(&product.description),
        category = html_escape(&product.category_name),
        stars = render_stars(product.rating),
        stock_class = stock.css_class(),
        stock_label = stock.label(),
        rating = product.rating,
    )
}

/// Grid of cards.
pub fn render_product_grid(products: &[SafeProduct]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibe_catalog::{create_safe_product, Product, PLACEHOLDER_IMAGE};

    fn product(json: serde_json::Value) -> SafeProduct {
        let product: Product = serde_json::from_value(json).unwrap();
        create_safe_product(&product)
    }

    #[test]
    fn test_stars() {
        let html = render_stars(3.7);
        assert_eq!(html.matches(r#"<span class="star">"#).count(), 3);
        assert_eq!(html.matches("star empty").count(), 2);
        assert_eq!(render_stars(9.0).matches("star empty").count(), 0);
    }

    #[test]
    fn test_discounted_card() {
        let html = render_product_card(&product(serde_json::json!({
            "id": 5, "title": "Red Lipstick", "price": 20.0, "discountPercentage": 25.0,
            "rating": 4.2, "stock": 3, "category": "beauty", "brand": "Chic Cosmetics",
            "thumbnail": "https://cdn.dummyjson.com/5.png"
        })));
        assert!(html.contains(r#"href="/products/5""#));
        assert!(html.contains("$15.00"));
        assert!(html.contains(r#"<span class="price-original">$20.00</span>"#));
        assert!(html.contains("-25%"));
        assert!(html.contains("Low Stock"));
        assert!(html.contains("Beauty"));
    }

    #[test]
    fn test_sparse_card_uses_placeholders() {
        let html = render_product_card(&product(serde_json::json!({"id": 9})));
        assert!(html.contains(PLACEHOLDER_IMAGE));
        assert!(html.contains("Untitled Product"));
        assert!(html.contains("Out of Stock"));
        assert!(!html.contains("discount-badge"));
        assert!(!html.contains("price-original"));
    }

    #[test]
    fn test_title_escaped() {
        let html = render_product_card(&product(serde_json::json!({"id": 1, "title": "<b>Bold</b>"})));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(!html.contains("<b>Bold"));
    }
}
