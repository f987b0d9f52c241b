//! The product router: one method per procedure.

use serde::de::DeserializeOwned;
use vibe_catalog::{Category, DeletedProduct, Product, ProductsPage};
use vibe_core::{path_segment_encode, url_encode, Method};
use vibe_data::{FetchClient, Transport};

use crate::input::*;
use crate::{Procedure, RpcError};

/// Typed procedures over the upstream product API.
pub struct ProductRouter<T> {
    client: FetchClient<T>,
}

impl<T: Transport> ProductRouter<T> {
    pub fn new(client: FetchClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FetchClient<T> {
        &self.client
    }

    /// Paginated listing, optionally restricted to one category.
    pub async fn list(&self, input: &ListInput) -> Result<ProductsPage, RpcError> {
        self.query(Procedure::List, &list_path(input), "fetch products", None)
            .await
    }

    pub async fn get_by_id(&self, input: &GetByIdInput) -> Result<Product, RpcError> {
        self.query(
            Procedure::GetById,
            &format!("/products/{}", input.id),
            "fetch product",
            Some(format!("Product with ID {} not found", input.id)),
        )
        .await
    }

    pub async fn get_by_category(
        &self,
        input: &GetByCategoryInput,
    ) -> Result<ProductsPage, RpcError> {
        input.validate()?;
        self.query(
            Procedure::GetByCategory,
            &category_path(input),
            &format!("fetch products in category {}", input.category),
            None,
        )
        .await
    }

    pub async fn search(&self, input: &SearchInput) -> Result<ProductsPage, RpcError> {
        self.query(Procedure::Search, &search_path(input), "search products", None)
            .await
    }

    /// Categories with slug, name and URL.
    pub async fn categories(&self) -> Result<Vec<Category>, RpcError> {
        self.query(
            Procedure::Categories,
            "/products/categories",
            "fetch categories",
            None,
        )
        .await
    }

    /// Category slugs only.
    pub async fn category_list(&self) -> Result<Vec<String>, RpcError> {
        self.query(
            Procedure::CategoryList,
            "/products/category-list",
            "fetch category list",
            None,
        )
        .await
    }

    /// Relay a new product upstream. Nothing is stored locally.
    pub async fn add_product(&self, input: &AddProductInput) -> Result<Product, RpcError> {
        input.validate()?;
        self.mutate(
            Procedure::AddProduct,
            Method::Post,
            "/products/add",
            Some(&input.fields),
            "add product",
        )
        .await
    }

    pub async fn update_product(&self, input: &UpdateProductInput) -> Result<Product, RpcError> {
        input.validate()?;
        self.mutate(
            Procedure::UpdateProduct,
            Method::Put,
            &format!("/products/{}", input.id),
            Some(&input.fields),
            "update product",
        )
        .await
    }

    pub async fn delete_product(
        &self,
        input: &DeleteProductInput,
    ) -> Result<DeletedProduct, RpcError> {
        self.mutate(
            Procedure::DeleteProduct,
            Method::Delete,
            &format!("/products/{}", input.id),
            None,
            "delete product",
        )
        .await
    }

    async fn query<R: DeserializeOwned>(
        &self,
        procedure: Procedure,
        path: &str,
        action: &str,
        not_found: Option<String>,
    ) -> Result<R, RpcError> {
        self.client
            .get_json(procedure.dependency_tag(), &procedure.path(), path)
            .await
            .map_err(|e| RpcError::from_fetch(&e, action, not_found))
    }

    async fn mutate<R: DeserializeOwned>(
        &self,
        procedure: Procedure,
        method: Method,
        path: &str,
        body: Option<&ProductFields>,
        action: &str,
    ) -> Result<R, RpcError> {
        let tag = procedure.dependency_tag();
        let label = procedure.path();
        let result = match body {
            Some(body) => self.client.send_json(tag, &label, method, path, body).await,
            None => self.client.call_json(tag, &label, method, path).await,
        };
        result.map_err(|e| RpcError::from_fetch(&e, action, None))
    }
}

/// Upstream path for `list`.
///
/// `limit` and `skip` are only sent when non-zero; `order` only alongside
/// `sortBy`.
pub fn list_path(input: &ListInput) -> String {
    let mut path = match input.category.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => format!("/products/category/{}", path_segment_encode(c)),
        _ => "/products".to_string(),
    };

    let mut params = Vec::new();
    if input.limit != 0 {
        params.push(format!("limit={}", input.limit));
    }
    if input.skip != 0 {
        params.push(format!("skip={}", input.skip));
    }
    if let Some(sort_by) = input.sort_by.as_deref().filter(|s| !s.trim().is_empty()) {
        params.push(format!("sortBy={}", url_encode(sort_by)));
        params.push(format!("order={}", input.order().as_str()));
    }

    if !params.is_empty() {
        path.push('?');
        path.push_str(&params.join("&"));
    }
    path
}

/// Upstream path for `getByCategory`.
pub fn category_path(input: &GetByCategoryInput) -> String {
    let mut path = format!(
        "/products/category/{}",
        path_segment_encode(input.category.trim())
    );
    let params = page_params(input.limit, input.skip);
    if !params.is_empty() {
        path.push('?');
        path.push_str(&params.join("&"));
    }
    path
}

/// Upstream path for `search`.
pub fn search_path(input: &SearchInput) -> String {
    let mut params = vec![format!("q={}", url_encode(&input.q))];
    params.extend(page_params(input.limit, input.skip));
    format!("/products/search?{}", params.join("&"))
}

fn page_params(limit: Option<u32>, skip: Option<u64>) -> Vec<String> {
    let mut params = Vec::new();
    if let Some(limit) = limit.filter(|l| *l > 0) {
        params.push(format!("limit={}", limit));
    }
    if let Some(skip) = skip.filter(|s| *s > 0) {
        params.push(format!("skip={}", skip));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_skip_zero_values() {
        assert!(page_params(Some(0), Some(0)).is_empty());
        assert_eq!(page_params(Some(5), None), vec!["limit=5".to_string()]);
        assert_eq!(
            page_params(None, Some(10)),
            vec!["skip=10".to_string()]
        );
    }

    #[test]
    fn test_list_path_defaults() {
        assert_eq!(list_path(&ListInput::default()), "/products?limit=30");
    }

    #[test]
    fn test_list_path_zero_values_omitted() {
        let input = ListInput {
            limit: 0,
            ..Default::default()
        };
        assert_eq!(list_path(&input), "/products");
    }

    #[test]
    fn test_list_path_sort_and_category() {
        let input = ListInput {
            limit: 9,
            skip: 18,
            sort_by: Some("price".into()),
            order: Some(ListOrder::Desc),
            category: Some("mens shirts".into()),
        };
        assert_eq!(
            list_path(&input),
            "/products/category/mens%20shirts?limit=9&skip=18&sortBy=price&order=desc"
        );
    }

    #[test]
    fn test_list_path_order_needs_sort_by() {
        let input = ListInput {
            order: Some(ListOrder::Desc),
            ..Default::default()
        };
        assert_eq!(list_path(&input), "/products?limit=30");

        let input = ListInput {
            sort_by: Some("title".into()),
            ..Default::default()
        };
        assert_eq!(list_path(&input), "/products?limit=30&sortBy=title&order=asc");
    }

    #[test]
    fn test_category_and_search_paths() {
        let input = GetByCategoryInput {
            category: "smartphones".into(),
            limit: Some(9),
            skip: Some(9),
        };
        assert_eq!(category_path(&input), "/products/category/smartphones?limit=9&skip=9");

        let input = SearchInput {
            q: "red & blue".into(),
            limit: None,
            skip: None,
        };
        assert_eq!(search_path(&input), "/products/search?q=red+%26+blue");
    }
}
