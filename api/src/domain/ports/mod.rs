//! Port traits
//!
//! Interfaces the application layer depends on; adapters provide the
//! implementations.

pub mod repositories;

pub use repositories::{OrderRepository, ProductCatalog};
