//! Product domain entity
//!
//! A catalog entry: the reference record for a sellable product. Catalog data
//! is read-only from the engine's point of view; it is owned by whatever
//! store backs the `ProductCatalog` port.

use serde::{Deserialize, Serialize};

use super::promotion::Promotion;

/// A sellable product as resolved from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub unit_price: f64,
    /// Pricing rule applied when this product is ordered
    pub promotion: Promotion,
}
