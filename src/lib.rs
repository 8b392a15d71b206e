//! # woocommerce-rs
//!
//! A Rust client for the WooCommerce REST API.
//!
//! This crate builds correctly-authenticated requests against a
//! WooCommerce store under both of the API's authentication regimes:
//!
//! - **Plain HTTP**: requests are signed with two-legged OAuth 1.0a using
//!   HMAC-SHA256; the signed parameters travel in the query string.
//! - **HTTPS**: credentials are sent as HTTP Basic auth, or as plain
//!   `consumer_key`/`consumer_secret` query parameters for servers that
//!   strip the `Authorization` header.
//!
//! Query parameters are normalized into a canonical, deterministic form
//! (one-level flattening of nested objects into `parent[child]` keys,
//! lexicographic key ordering, OAuth-compatible percent-encoding) so that
//! signatures match what the server recomputes.
//!
//! ## Features
//!
//! - **Generic verbs**: `get`, `post`, `put`, `delete`, `options` against
//!   any endpoint, with timing metadata on every outcome
//! - **Typed services**: products, orders and customers with query
//!   builders and wire-accurate models
//! - **Async-first**: built on reqwest/Tokio; a client is cheap to clone
//!   and safe to share across tasks
//! - **No magic**: no retries, no caching — failures surface once,
//!   unmodified
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use woocommerce_rs::WooCommerceClient;
//!
//! #[tokio::main]
//! async fn main() -> woocommerce_rs::Result<()> {
//!     let client = WooCommerceClient::new(
//!         "https://shop.example.com",
//!         "ck_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
//!         "cs_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
//!     )?;
//!
//!     // Typed access
//!     let products = client.products().list(None).await?;
//!     println!("{} products", products.len());
//!
//!     // Or raw verbs against any endpoint
//!     let response = client.get("reports/sales", None).await?;
//!     println!("{} in {:?}", response.status, response.duration);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom configuration
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use woocommerce_rs::{ClientConfig, WooCommerceClient};
//!
//! # fn example() -> woocommerce_rs::Result<()> {
//! let config = ClientConfig::default()
//!     .with_version("wc/v2")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_query_string_auth(true);
//!
//! let client = WooCommerceClient::with_config(
//!     "https://shop.example.com",
//!     "ck_key",
//!     "cs_secret",
//!     config,
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

mod request;

// Re-export primary types at crate root for convenience
pub use client::{ApiResponse, ClientConfig, WooCommerceClient};
pub use error::{Error, Result};
pub use request::Params;

/// Prelude module for convenient imports.
///
/// ```rust
/// use woocommerce_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CustomersService, ListCustomersQuery, ListOrdersQuery, ListProductsQuery, OrdersService,
        ProductsService,
    };
    pub use crate::client::{ApiResponse, ClientConfig, WooCommerceClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Address, Customer, Order, OrderLineItem, Product, ProductCategoryRef};
    pub use crate::Params;
}
