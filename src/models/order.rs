//! Order models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Address;

/// A WooCommerce order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: u64,
    /// Order number shown to the customer
    #[serde(default)]
    pub number: String,
    /// Status: `pending`, `processing`, `on-hold`, `completed`,
    /// `cancelled`, `refunded`, `failed` or `trash`
    #[serde(default)]
    pub status: String,
    /// Currency code (ISO 4217)
    #[serde(default)]
    pub currency: String,
    /// Creation time (site-local, no timezone on the wire)
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,
    /// Grand total
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    /// Total tax
    #[serde(with = "rust_decimal::serde::str", default)]
    pub total_tax: Decimal,
    /// Customer who placed the order, 0 for guests
    #[serde(default)]
    pub customer_id: u64,
    /// Payment gateway identifier
    #[serde(default)]
    pub payment_method: String,
    /// Payment gateway title
    #[serde(default)]
    pub payment_method_title: String,
    /// Billing address
    #[serde(default)]
    pub billing: Option<Address>,
    /// Shipping address
    #[serde(default)]
    pub shipping: Option<Address>,
    /// Line items
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
}

/// A single line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Line item identifier
    pub id: u64,
    /// Product name at purchase time
    #[serde(default)]
    pub name: String,
    /// Product identifier
    #[serde(default)]
    pub product_id: u64,
    /// Quantity ordered
    #[serde(default)]
    pub quantity: i64,
    /// Line total after discounts
    #[serde(with = "rust_decimal::serde::str", default)]
    pub total: Decimal,
}
