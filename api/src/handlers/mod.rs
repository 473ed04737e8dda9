//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod orders;

pub use orders::{create_order, delete_order, list_orders, update_order};
