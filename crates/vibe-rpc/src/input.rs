//! Procedure inputs and their validation.

use serde::{Deserialize, Serialize};

use crate::RpcError;

/// Sort direction accepted by `list`. `null` and absent mean ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    #[default]
    Asc,
    Desc,
}

impl ListOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

fn default_list_limit() -> u32 {
    30
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInput {
    #[serde(default = "default_list_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<ListOrder>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Default for ListInput {
    fn default() -> Self {
        Self {
            limit: default_list_limit(),
            skip: 0,
            sort_by: None,
            order: None,
            category: None,
        }
    }
}

impl ListInput {
    pub fn order(&self) -> ListOrder {
        self.order.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetByIdInput {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetByCategoryInput {
    pub category: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub skip: Option<u64>,
}

impl GetByCategoryInput {
    pub fn validate(&self) -> Result<(), RpcError> {
        if self.category.trim().is_empty() {
            return Err(RpcError::bad_request("Category is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub q: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub skip: Option<u64>,
}

/// Editable product fields shared by add and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
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
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ProductFields {
    pub fn validate(&self) -> Result<(), RpcError> {
        check_range("price", self.price, 0.0, f64::INFINITY)?;
        check_range("discountPercentage", self.discount_percentage, 0.0, 100.0)?;
        check_range("rating", self.rating, 0.0, 5.0)?;
        if matches!(self.stock, Some(s) if s < 0) {
            return Err(RpcError::bad_request("stock must be 0 or greater"));
        }
        if let Some(thumbnail) = &self.thumbnail {
            if !is_url(thumbnail) {
                return Err(RpcError::bad_request("Invalid thumbnail URL"));
            }
        }
        if self.images.iter().flatten().any(|url| !is_url(url)) {
            return Err(RpcError::bad_request("Invalid image URL"));
        }
        Ok(())
    }
}

fn check_range(field: &str, value: Option<f64>, min: f64, max: f64) -> Result<(), RpcError> {
    match value {
        Some(v) if v.is_nan() || v < min => Err(RpcError::bad_request(format!(
            "{} must be {} or greater",
            field, min
        ))),
        Some(v) if v > max => Err(RpcError::bad_request(format!(
            "{} must be {} or less",
            field, max
        ))),
        _ => Ok(()),
    }
}

/// `scheme://rest` with a plausible scheme and no whitespace.
fn is_url(s: &str) -> bool {
    match s.split_once("://") {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && !rest.is_empty()
                && !rest.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProductInput {
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl AddProductInput {
    pub fn validate(&self) -> Result<(), RpcError> {
        match self.fields.title.as_deref() {
            Some(t) if !t.trim().is_empty() => {}
            _ => return Err(RpcError::bad_request("Title is required")),
        }
        self.fields.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductInput {
    pub id: u64,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl UpdateProductInput {
    pub fn validate(&self) -> Result<(), RpcError> {
        self.fields.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProductInput {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_defaults() {
        let input: ListInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input, ListInput::default());
        assert_eq!(input.limit, 30);
        assert_eq!(input.order(), ListOrder::Asc);

        let input: ListInput = serde_json::from_value(json!({"order": null})).unwrap();
        assert_eq!(input.order(), ListOrder::Asc);
    }

    #[test]
    fn test_list_rejects_bad_order() {
        assert!(serde_json::from_value::<ListInput>(json!({"order": "up"})).is_err());
    }

    #[test]
    fn test_add_requires_title() {
        let input: AddProductInput = serde_json::from_value(json!({"price": 10})).unwrap();
        assert_eq!(input.validate().unwrap_err().message, "Title is required");

        let input: AddProductInput = serde_json::from_value(json!({"title": "  "})).unwrap();
        assert!(input.validate().is_err());

        let input: AddProductInput = serde_json::from_value(json!({"title": "Lamp"})).unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_field_ranges() {
        let cases = [
            json!({"title": "x", "price": -1}),
            json!({"title": "x", "discountPercentage": 101}),
            json!({"title": "x", "rating": 5.5}),
            json!({"title": "x", "stock": -2}),
            json!({"title": "x", "thumbnail": "not a url"}),
            json!({"title": "x", "images": ["https://ok.test/a.png", "nope"]}),
        ];
        for case in cases {
            let input: AddProductInput = serde_json::from_value(case.clone()).unwrap();
            assert!(input.validate().is_err(), "{} should be rejected", case);
        }

        let ok: AddProductInput = serde_json::from_value(json!({
            "title": "x", "price": 0, "discountPercentage": 100, "rating": 5, "stock": 0,
            "thumbnail": "https://cdn.dummyjson.com/t.png", "images": []
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_update_without_title_is_fine() {
        let input: UpdateProductInput =
            serde_json::from_value(json!({"id": 4, "price": 12.5})).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&input.fields).unwrap(),
            json!({"price": 12.5})
        );
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://cdn.dummyjson.com/x.png"));
        assert!(is_url("ftp://files.test/a"));
        assert!(!is_url("cdn.dummyjson.com/x.png"));
        assert!(!is_url("https://"));
        assert!(!is_url("1http://x"));
        assert!(!is_url("https://a b"));
    }
}
