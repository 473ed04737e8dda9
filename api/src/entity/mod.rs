//! SeaORM entity models
//!
//! Database-facing models for the catalog and order tables. Domain
//! conversions live next to the adapters that use them.

pub mod order_items;
pub mod orders;
pub mod products;
