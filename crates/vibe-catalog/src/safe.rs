//! Display-safe product records.

use serde::Serialize;

use crate::product::Product;

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200?text=No+Image";

pub const DEFAULT_TITLE: &str = "Untitled Product";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_BRAND: &str = "Unknown Brand";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A product with every display field present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeProduct {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: i64,
    pub brand: String,
    /// Category slug, used in links.
    pub category: String,
    /// Category display name.
    pub category_name: String,
    pub thumbnail: String,
    /// Never empty.
    pub images: Vec<String>,
    pub tags: Vec<String>,
}

/// `value`, or `fallback` when it is absent.
pub fn fallback_value<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

fn fallback_text(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Normalise a product for display.
///
/// Missing or null numbers become `0`, missing or blank text becomes a
/// placeholder, and missing images fall back to the thumbnail, then to
/// [`PLACEHOLDER_IMAGE`].
pub fn create_safe_product(product: &Product) -> SafeProduct {
    let images: Vec<String> = product
        .images
        .iter()
        .flatten()
        .filter(|url| !url.trim().is_empty())
        .cloned()
        .collect();

    let thumbnail = product
        .thumbnail
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| images.first().map(String::as_str))
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();

    let images = if images.is_empty() {
        vec![thumbnail.clone()]
    } else {
        images
    };

    let (category, category_name) = match &product.category {
        Some(c) if !c.slug().trim().is_empty() => (c.slug().to_string(), c.name()),
        _ => (DEFAULT_CATEGORY.to_string(), DEFAULT_CATEGORY.to_string()),
    };

    SafeProduct {
        id: product.id,
        title: fallback_text(product.title.as_deref(), DEFAULT_TITLE),
        description: fallback_text(product.description.as_deref(), DEFAULT_DESCRIPTION),
        price: fallback_value(product.price, 0.0),
        discount_percentage: fallback_value(product.discount_percentage, 0.0),
        rating: fallback_value(product.rating, 0.0),
        stock: fallback_value(product.stock, 0),
        brand: fallback_text(product.brand.as_deref(), DEFAULT_BRAND),
        category,
        category_name,
        thumbnail,
        images,
        tags: product.tags.clone().unwrap_or_default(),
    }
}

impl From<&Product> for SafeProduct {
    fn from(product: &Product) -> Self {
        create_safe_product(product)
    }
}

impl SafeProduct {
    /// Price after discount.
    pub fn discounted_price(&self) -> f64 {
        crate::pricing::calculate_discounted_price(self.price, self.discount_percentage)
    }

    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    pub fn stock_status(&self) -> crate::stock::StockStatus {
        crate::stock::StockStatus::from_stock(Some(self.stock))
    }

    /// Image at `index`, clamped to the available range.
    pub fn image_at(&self, index: usize) -> (usize, &str) {
        let index = index.min(self.images.len().saturating_sub(1));
        let url = self
            .images
            .get(index)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE);
        (index, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;
    use serde_json::json;

    #[test]
    fn test_empty_product_gets_every_default() {
        let safe = create_safe_product(&Product::default());
        assert_eq!(safe.title, DEFAULT_TITLE);
        assert_eq!(safe.description, DEFAULT_DESCRIPTION);
        assert_eq!(safe.brand, DEFAULT_BRAND);
        assert_eq!(safe.category, DEFAULT_CATEGORY);
        assert_eq!(safe.price, 0.0);
        assert_eq!(safe.discount_percentage, 0.0);
        assert_eq!(safe.rating, 0.0);
        assert_eq!(safe.stock, 0);
        assert_eq!(safe.thumbnail, PLACEHOLDER_IMAGE);
        assert_eq!(safe.images, vec![PLACEHOLDER_IMAGE.to_string()]);
    }

    #[test]
    fn test_nulls_from_upstream() {
        let product: Product = serde_json::from_value(json!({
            "id": 12, "title": null, "price": null, "stock": null,
            "brand": "", "category": null, "thumbnail": null, "images": null
        }))
        .unwrap();
        let safe = create_safe_product(&product);
        assert_eq!(safe.id, 12);
        assert_eq!(safe.title, DEFAULT_TITLE);
        assert_eq!(safe.brand, DEFAULT_BRAND);
        assert_eq!(safe.price, 0.0);
        assert_eq!(safe.images.len(), 1);
    }

    #[test]
    fn test_present_values_kept() {
        let product = Product {
            id: 5,
            title: Some("Lamp".into()),
            price: Some(20.0),
            discount_percentage: Some(10.0),
            stock: Some(3),
            category: Some(Category::from("home-decoration")),
            images: Some(vec!["https://a/1.png".into(), "https://a/2.png".into()]),
            tags: Some(vec!["lighting".into()]),
            ..Default::default()
        };
        let safe = SafeProduct::from(&product);
        assert_eq!(safe.title, "Lamp");
        assert_eq!(safe.category, "home-decoration");
        assert_eq!(safe.category_name, "Home Decoration");
        assert_eq!(safe.thumbnail, "https://a/1.png");
        assert_eq!(safe.images.len(), 2);
        assert_eq!(safe.tags, vec!["lighting"]);
        assert!(safe.has_discount());
        assert!((safe.discounted_price() - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_thumbnail_fills_missing_images() {
        let product = Product {
            thumbnail: Some("https://a/t.png".into()),
            ..Default::default()
        };
        let safe = create_safe_product(&product);
        assert_eq!(safe.images, vec!["https://a/t.png".to_string()]);
    }

    #[test]
    fn test_image_at_clamps() {
        let product = Product {
            images: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        };
        let safe = create_safe_product(&product);
        assert_eq!(safe.image_at(1), (1, "b"));
        assert_eq!(safe.image_at(9), (1, "b"));
    }

    #[test]
    fn test_fallback_value() {
        assert_eq!(fallback_value(Some(4), 0), 4);
        assert_eq!(fallback_value(None, "x"), "x");
    }
}
