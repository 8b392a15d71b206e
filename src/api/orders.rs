//! Orders service.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::Order;
use crate::request::params::to_params;
use crate::request::Params;
use crate::Result;

/// Service for order operations.
///
/// # Example
///
/// ```no_run
/// use woocommerce_rs::api::ListOrdersQuery;
///
/// # async fn example(client: woocommerce_rs::WooCommerceClient) -> woocommerce_rs::Result<()> {
/// let query = ListOrdersQuery {
///     status: Some("processing".to_string()),
///     per_page: Some(20),
///     ..Default::default()
/// };
/// let orders = client.orders().list(Some(query)).await?;
/// for order in orders {
///     println!("#{}: {} {}", order.number, order.total, order.currency);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing orders.
#[derive(Debug, Default, Serialize)]
pub struct ListOrdersQuery {
    /// Page of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free-text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by customer ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,
    /// Filter by product ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,
    /// Only orders created after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,
    /// Only orders created before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDateTime>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List orders with optional filters.
    pub async fn list(&self, query: Option<ListOrdersQuery>) -> Result<Vec<Order>> {
        let params = query.map(|q| to_params(&q)).transpose()?;
        self.inner.get_json("orders", params).await
    }

    /// Retrieve a single order by ID.
    pub async fn retrieve(&self, id: u64) -> Result<Order> {
        self.inner.get_json(&format!("orders/{}", id), None).await
    }

    /// Create an order from a JSON payload.
    pub async fn create(&self, data: &Value) -> Result<Order> {
        self.inner.post_json("orders", data).await
    }

    /// Update an order with a partial JSON payload.
    pub async fn update(&self, id: u64, data: &Value) -> Result<Order> {
        self.inner.put_json(&format!("orders/{}", id), data).await
    }

    /// Delete an order. With `force` the order is deleted permanently
    /// instead of being moved to trash.
    pub async fn delete(&self, id: u64, force: bool) -> Result<Order> {
        let mut params = Params::new();
        params.insert("force".to_string(), Value::Bool(force));
        self.inner
            .delete_json(&format!("orders/{}", id), Some(params))
            .await
    }
}
