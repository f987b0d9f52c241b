//! Products page query string.

use vibe_core::{url_encode, QueryParams};

/// Largest page size accepted from the query string.
pub const MAX_LIMIT: u32 = 100;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` is ascending.
    pub fn parse(s: Option<&str>) -> Self {
        match s.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }
}

/// Fields the upstream can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Price,
    Rating,
    Stock,
    Discount,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Title,
        SortField::Price,
        SortField::Rating,
        SortField::Stock,
        SortField::Discount,
    ];

    /// Unknown fields are dropped rather than forwarded upstream.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s.trim())
    }

    /// Upstream `sortBy` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Stock => "stock",
            Self::Discount => "discountPercentage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Title => "Name",
            Self::Price => "Price",
            Self::Rating => "Rating",
            Self::Stock => "Stock",
            Self::Discount => "Discount",
        }
    }
}

/// Which upstream listing feeds the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSource<'a> {
    Category(&'a str),
    Search(&'a str),
    All,
}

/// Parsed `/products` query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsQuery {
    /// Current page, 1-indexed.
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
    /// Search text.
    pub q: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    default_limit: u32,
}

impl ProductsQuery {
    /// Read from parsed params. Invalid or missing numbers fall back to
    /// page 1 and `default_limit`.
    pub fn from_params(params: &QueryParams, default_limit: u32) -> Self {
        let default_limit = default_limit.clamp(1, MAX_LIMIT);
        let page = params.parse_as::<u32>("page").filter(|p| *p > 0).unwrap_or(1);
        let limit = params
            .parse_as::<u32>("limit")
            .filter(|l| *l > 0)
            .map(|l| l.min(MAX_LIMIT))
            .unwrap_or(default_limit);

        Self {
            page,
            limit,
            sort_by: params.get("sortBy").and_then(SortField::parse),
            order: SortOrder::parse(params.get("order")),
            q: params.get_non_empty("q").map(|s| s.trim().to_string()),
            category: params.get_non_empty("category").map(|s| s.trim().to_string()),
            default_limit,
        }
    }

    /// Parse a raw query string (without the leading `?`).
    pub fn from_query_string(qs: &str, default_limit: u32) -> Self {
        Self::from_params(&QueryParams::parse(qs), default_limit)
    }

    /// Items to skip upstream.
    pub fn skip(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// Category beats search, search beats the plain listing.
    pub fn source(&self) -> ProductSource<'_> {
        if let Some(category) = &self.category {
            ProductSource::Category(category)
        } else if let Some(q) = &self.q {
            ProductSource::Search(q)
        } else {
            ProductSource::All
        }
    }

    /// Query string for this state, default values omitted.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(q) = &self.q {
            parts.push(format!("q={}", url_encode(q)));
        }
        if let Some(category) = &self.category {
            parts.push(format!("category={}", url_encode(category)));
        }
        if let Some(sort_by) = self.sort_by {
            parts.push(format!("sortBy={}", sort_by.as_str()));
            parts.push(format!("order={}", self.order.as_str()));
        }
        if self.limit != self.default_limit {
            parts.push(format!("limit={}", self.limit));
        }
        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }
        parts.join("&")
    }

    /// Link to the products page in this state.
    pub fn href(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            "/products".to_string()
        } else {
            format!("/products?{}", qs)
        }
    }

    /// Link to another page, other filters unchanged.
    pub fn href_for_page(&self, page: u32) -> String {
        Self {
            page: page.max(1),
            ..self.clone()
        }
        .href()
    }

    /// Link filtering by `category` (or clearing it), back on page 1.
    pub fn href_for_category(&self, category: Option<&str>) -> String {
        Self {
            page: 1,
            category: category.map(str::to_string),
            ..self.clone()
        }
        .href()
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = ProductsQuery::from_query_string("", 9);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 9);
        assert_eq!(q.skip(), 0);
        assert_eq!(q.source(), ProductSource::All);
        assert_eq!(q.href(), "/products");
    }

    #[test]
    fn test_skip_from_page_and_limit() {
        let q = ProductsQuery::from_query_string("page=3&limit=12", 9);
        assert_eq!(q.skip(), 24);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let q = ProductsQuery::from_query_string("page=0&limit=lots", 9);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 9);

        let q = ProductsQuery::from_query_string("page=-2&limit=5000", 9);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, MAX_LIMIT);
    }

    #[test]
    fn test_source_precedence() {
        let q = ProductsQuery::from_query_string("q=phone&category=smartphones", 9);
        assert_eq!(q.source(), ProductSource::Category("smartphones"));

        let q = ProductsQuery::from_query_string("q=red+lipstick", 9);
        assert_eq!(q.source(), ProductSource::Search("red lipstick"));

        let q = ProductsQuery::from_query_string("q=++&category=", 9);
        assert_eq!(q.source(), ProductSource::All);
        assert_eq!(q.q, None);
    }

    #[test]
    fn test_sorting() {
        let q = ProductsQuery::from_query_string("sortBy=price&order=DESC", 9);
        assert_eq!(q.sort_by, Some(SortField::Price));
        assert_eq!(q.order, SortOrder::Desc);

        let q = ProductsQuery::from_query_string("sortBy=__proto__&order=sideways", 9);
        assert_eq!(q.sort_by, None);
        assert_eq!(q.order, SortOrder::Asc);
    }

    #[test]
    fn test_links_keep_filters() {
        let q = ProductsQuery::from_query_string("q=red shoes&sortBy=rating&order=desc&limit=24&page=2", 9);
        assert_eq!(
            q.href_for_page(3),
            "/products?q=red+shoes&sortBy=rating&order=desc&limit=24&page=3"
        );
        assert_eq!(
            q.href_for_category(Some("mens-shoes")),
            "/products?q=red+shoes&category=mens-shoes&sortBy=rating&order=desc&limit=24"
        );
        assert_eq!(q.href_for_page(1), "/products?q=red+shoes&sortBy=rating&order=desc&limit=24");
    }

    #[test]
    fn test_order_only_sent_with_sort_field() {
        let q = ProductsQuery::from_query_string("order=desc", 9);
        assert_eq!(q.href(), "/products");
    }
}
