//! Product records as the upstream API returns them.
//!
//! Every field except `id` may be absent or null upstream, so they are all
//! optional here. Fields this model does not know about are kept in `extra`
//! and written back out unchanged when a product is relayed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product category.
///
/// Upstream has served both a bare slug (`"smartphones"`) and an object
/// (`{"slug","name","url"}`); both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    Slug(String),
    Object {
        slug: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl Category {
    pub fn slug(&self) -> &str {
        match self {
            Category::Slug(slug) => slug,
            Category::Object { slug, .. } => slug,
        }
    }

    /// Display name. Bare slugs are title-cased (`home-decoration` ->
    /// `Home Decoration`).
    pub fn name(&self) -> String {
        match self {
            Category::Object {
                name: Some(name), ..
            } if !name.trim().is_empty() => name.clone(),
            _ => humanize_slug(self.slug()),
        }
    }
}

impl From<&str> for Category {
    fn from(slug: &str) -> Self {
        Category::Slug(slug.to_string())
    }
}

fn humanize_slug(slug: &str) -> String {
    slug.split(|c| c == '-' || c == '_' || c == ' ')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Physical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub depth: f64,
}

impl Dimensions {
    /// `W x H x D` with two decimals, as shown on the specifications tab.
    pub fn display(&self) -> String {
        format!("{:.2} x {:.2} x {:.2}", self.width, self.height, self.depth)
    }
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,
}

impl Review {
    /// Review date as `May 23, 2024`, or the raw value if it is not RFC 3339.
    pub fn formatted_date(&self) -> Option<String> {
        let raw = self.date.as_deref()?;
        Some(match chrono::DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.format("%B %-d, %Y").to_string(),
            Err(_) => raw.to_string(),
        })
    }
}

/// Record-keeping metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
}

/// A product record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_information: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_order_quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ProductMeta>,
    /// Upstream fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Category slug, if any.
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(Category::slug)
    }

    /// Reviews, or an empty slice.
    pub fn reviews(&self) -> &[Review] {
        self.reviews.as_deref().unwrap_or_default()
    }

    /// Mean review rating, if there are rated reviews.
    pub fn average_review_rating(&self) -> Option<f64> {
        let ratings: Vec<f64> = self.reviews().iter().filter_map(|r| r.rating).collect();
        if ratings.is_empty() {
            return None;
        }
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}

/// A page of products, as returned by list, category and search endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

impl ProductsPage {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Upstream reply to a delete: the product plus deletion markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_on: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_both_shapes() {
        let plain: Category = serde_json::from_value(json!("home-decoration")).unwrap();
        assert_eq!(plain.slug(), "home-decoration");
        assert_eq!(plain.name(), "Home Decoration");

        let object: Category = serde_json::from_value(json!({
            "slug": "mens-shirts",
            "name": "Mens Shirts",
            "url": "https://dummyjson.com/products/category/mens-shirts"
        }))
        .unwrap();
        assert_eq!(object.slug(), "mens-shirts");
        assert_eq!(object.name(), "Mens Shirts");
    }

    #[test]
    fn test_category_object_without_name() {
        let object: Category = serde_json::from_value(json!({"slug": "skin-care"})).unwrap();
        assert_eq!(object.name(), "Skin Care");
    }

    #[test]
    fn test_product_full_record() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "category": "beauty",
            "images": ["https://cdn.dummyjson.com/1.png"],
            "dimensions": {"width": 23.17, "height": 14.43, "depth": 28.01},
            "reviews": [
                {"rating": 2, "comment": "Very unhappy", "date": "2024-05-23T08:56:21.618Z",
                 "reviewerName": "John Doe", "reviewerEmail": "john.doe@x.com"},
                {"rating": 4, "comment": "Great", "date": "2024-05-23T08:56:21.618Z",
                 "reviewerName": "Jane", "reviewerEmail": "jane@x.com"}
            ],
            "minimumOrderQuantity": 24,
            "meta": {"createdAt": "2024-05-23T08:56:21.618Z", "barcode": "9164035109868"}
        }))
        .unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.category_slug(), Some("beauty"));
        assert_eq!(product.stock, Some(5));
        assert_eq!(product.minimum_order_quantity, Some(24));
        assert_eq!(product.average_review_rating(), Some(3.0));
        assert_eq!(product.reviews()[0].formatted_date().as_deref(), Some("May 23, 2024"));
        assert_eq!(
            product.dimensions.map(|d| d.display()).as_deref(),
            Some("23.17 x 14.43 x 28.01")
        );
    }

    #[test]
    fn test_product_nulls_and_missing() {
        let product: Product =
            serde_json::from_value(json!({"id": 7, "title": null, "images": null})).unwrap();
        assert_eq!(product.title, None);
        assert_eq!(product.images, None);
        assert!(product.reviews().is_empty());
        assert_eq!(product.average_review_rating(), None);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let input = json!({"id": 3, "title": "Lamp", "color": "red", "variants": [1, 2]});
        let product: Product = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(product.extra.get("color"), Some(&json!("red")));
        assert_eq!(serde_json::to_value(&product).unwrap(), input);
    }

    #[test]
    fn test_review_date_unparseable_kept() {
        let review = Review {
            date: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(review.formatted_date().as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_deleted_product() {
        let deleted: DeletedProduct = serde_json::from_value(json!({
            "id": 1, "title": "Essence Mascara", "isDeleted": true,
            "deletedOn": "2024-05-23T08:56:21.618Z"
        }))
        .unwrap();
        assert!(deleted.is_deleted);
        assert_eq!(deleted.product.title.as_deref(), Some("Essence Mascara"));
        assert!(deleted.product.extra.is_empty());
    }

    #[test]
    fn test_products_page_defaults() {
        let page: ProductsPage = serde_json::from_value(json!({"products": []})).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }
}
