//! Product models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A WooCommerce product.
///
/// Price fields stay in their wire form (strings, possibly empty for
/// products without a price) rather than being parsed eagerly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: u64,
    /// Product name
    #[serde(default)]
    pub name: String,
    /// URL-friendly slug
    #[serde(default)]
    pub slug: String,
    /// Product page permalink
    #[serde(default)]
    pub permalink: String,
    /// Creation time (site-local, no timezone on the wire)
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,
    /// Product type: `simple`, `grouped`, `external` or `variable`
    #[serde(rename = "type", default)]
    pub product_type: String,
    /// Status: `draft`, `pending`, `private` or `publish`
    #[serde(default)]
    pub status: String,
    /// Full description (HTML)
    #[serde(default)]
    pub description: String,
    /// Short description (HTML)
    #[serde(default)]
    pub short_description: String,
    /// Stock keeping unit
    #[serde(default)]
    pub sku: String,
    /// Current effective price
    #[serde(default)]
    pub price: String,
    /// Regular price
    #[serde(default)]
    pub regular_price: String,
    /// Sale price, empty when not on sale
    #[serde(default)]
    pub sale_price: String,
    /// Whether the product is currently on sale
    #[serde(default)]
    pub on_sale: bool,
    /// Stock quantity, when stock management is enabled
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    /// Stock status: `instock`, `outofstock` or `onbackorder`
    #[serde(default)]
    pub stock_status: String,
    /// Categories the product is assigned to
    #[serde(default)]
    pub categories: Vec<ProductCategoryRef>,
}

/// A category reference attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategoryRef {
    /// Category identifier
    pub id: u64,
    /// Category name
    #[serde(default)]
    pub name: String,
    /// Category slug
    #[serde(default)]
    pub slug: String,
}
