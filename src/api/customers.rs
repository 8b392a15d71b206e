//! Customers service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::Customer;
use crate::request::params::to_params;
use crate::request::Params;
use crate::Result;

/// Service for customer operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: woocommerce_rs::WooCommerceClient) -> woocommerce_rs::Result<()> {
/// let customer = client.customers().retrieve(25).await?;
/// println!("{} <{}>", customer.username, customer.email);
/// # Ok(())
/// # }
/// ```
pub struct CustomersService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing customers.
#[derive(Debug, Default, Serialize)]
pub struct ListCustomersQuery {
    /// Page of the collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page (max 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Free-text search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Filter by email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Filter by role, `customer` by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl CustomersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List customers with optional filters.
    pub async fn list(&self, query: Option<ListCustomersQuery>) -> Result<Vec<Customer>> {
        let params = query.map(|q| to_params(&q)).transpose()?;
        self.inner.get_json("customers", params).await
    }

    /// Retrieve a single customer by ID.
    pub async fn retrieve(&self, id: u64) -> Result<Customer> {
        self.inner.get_json(&format!("customers/{}", id), None).await
    }

    /// Create a customer from a JSON payload.
    pub async fn create(&self, data: &Value) -> Result<Customer> {
        self.inner.post_json("customers", data).await
    }

    /// Update a customer with a partial JSON payload.
    pub async fn update(&self, id: u64, data: &Value) -> Result<Customer> {
        self.inner.put_json(&format!("customers/{}", id), data).await
    }

    /// Delete a customer. Customers have no trash; `force` must be set for
    /// the API to accept the deletion.
    pub async fn delete(&self, id: u64, force: bool) -> Result<Customer> {
        let mut params = Params::new();
        params.insert("force".to_string(), Value::Bool(force));
        self.inner
            .delete_json(&format!("customers/{}", id), Some(params))
            .await
    }
}
