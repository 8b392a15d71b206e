//! Typed models for WooCommerce REST API resources.
//!
//! These mirror the wire format of the `wc/v3` endpoints. Fields the API
//! may omit default to empty values rather than failing deserialization.

mod customer;
mod order;
mod product;

pub use customer::{Address, Customer};
pub use order::{Order, OrderLineItem};
pub use product::{Product, ProductCategoryRef};
