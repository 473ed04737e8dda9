//! Application layer
//!
//! Service orchestration between domain entities and ports.

pub mod order_service;

pub use order_service::{OrderService, PricedBatch};
