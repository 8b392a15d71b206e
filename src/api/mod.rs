//! API service modules for WooCommerce store resources.
//!
//! Each service provides typed methods for one resource family, layered
//! over the generic verb operations on the client.

mod customers;
mod orders;
mod products;

pub use customers::{CustomersService, ListCustomersQuery};
pub use orders::{ListOrdersQuery, OrdersService};
pub use products::{ListProductsQuery, ProductsService};
