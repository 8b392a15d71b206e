//! HTTP client and configuration for the WooCommerce REST API.
//!
//! This module provides the main entry point [`WooCommerceClient`].
//!
//! # Example
//!
//! ```no_run
//! use woocommerce_rs::WooCommerceClient;
//!
//! # async fn example() -> woocommerce_rs::Result<()> {
//! let client = WooCommerceClient::new(
//!     "https://shop.example.com",
//!     "ck_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
//!     "cs_XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
//! )?;
//!
//! let products = client.products().list(None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::{ApiResponse, WooCommerceClient};
pub(crate) use http::ClientInner;
