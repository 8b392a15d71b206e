//! Customer models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A WooCommerce customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: u64,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Registration time (site-local, no timezone on the wire)
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,
    /// Billing address
    #[serde(default)]
    pub billing: Option<Address>,
    /// Shipping address
    #[serde(default)]
    pub shipping: Option<Address>,
    /// Whether the customer has placed a paid order
    #[serde(default)]
    pub is_paying_customer: bool,
}

/// A billing or shipping address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Company name
    #[serde(default)]
    pub company: String,
    /// Address line 1
    #[serde(default)]
    pub address_1: String,
    /// Address line 2
    #[serde(default)]
    pub address_2: String,
    /// City
    #[serde(default)]
    pub city: String,
    /// State or province code
    #[serde(default)]
    pub state: String,
    /// Postal code
    #[serde(default)]
    pub postcode: String,
    /// Country code (ISO 3166-1 alpha-2)
    #[serde(default)]
    pub country: String,
    /// Contact email (billing only)
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone (billing only)
    #[serde(default)]
    pub phone: Option<String>,
}
