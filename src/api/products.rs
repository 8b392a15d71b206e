//! Products service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::Product;
use crate::request::params::to_params;
use crate::request::Params;
use crate::Result;

/// Service for product operations.
///
/// # Example
///
/// ```no_run
/// use woocommerce_rs::api::ListProductsQuery;
///
/// # async fn example(client: woocommerce_rs::WooCommerceClient) -> woocommerce_rs::Result<()> {
/// let query = ListProductsQuery {
///     per_page: Some(5),
///     search: Some("shirt".to_string()),
///     ..Default::default()
/// };
/// let products = client.products().list(Some(query)).await?;
/// for product in products {
///     println!("{}: {}", product.id, product.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing products.
#[derive(Debug, Default, Serialize)]
pub struct ListProductsQuery {
    /// Page of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free-text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Filter by category ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by SKU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Filter by sale state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    /// Sort field: `date`, `id`, `title`, `slug` or `price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    /// Sort direction: `asc` or `desc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List products with optional filters.
    pub async fn list(&self, query: Option<ListProductsQuery>) -> Result<Vec<Product>> {
        let params = query.map(|q| to_params(&q)).transpose()?;
        self.inner.get_json("products", params).await
    }

    /// Retrieve a single product by ID.
    pub async fn retrieve(&self, id: u64) -> Result<Product> {
        self.inner.get_json(&format!("products/{}", id), None).await
    }

    /// Create a product from a JSON payload.
    ///
    /// ```no_run
    /// # async fn example(client: woocommerce_rs::WooCommerceClient) -> woocommerce_rs::Result<()> {
    /// let product = client.products().create(&serde_json::json!({
    ///     "name": "Premium Quality",
    ///     "type": "simple",
    ///     "regular_price": "21.99",
    /// })).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, data: &Value) -> Result<Product> {
        self.inner.post_json("products", data).await
    }

    /// Update a product with a partial JSON payload.
    pub async fn update(&self, id: u64, data: &Value) -> Result<Product> {
        self.inner.put_json(&format!("products/{}", id), data).await
    }

    /// Delete a product. With `force` the product is deleted permanently
    /// instead of being moved to trash.
    pub async fn delete(&self, id: u64, force: bool) -> Result<Product> {
        let mut params = Params::new();
        params.insert("force".to_string(), Value::Bool(force));
        self.inner
            .delete_json(&format!("products/{}", id), Some(params))
            .await
    }
}
