//! Repository port traits
//!
//! These traits define the interface for data access.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewOrder, Order, OrderId, Product};
use crate::error::DomainError;

/// Read-only lookup of catalog entries by product code
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Resolve a product code to its catalog entry, `None` if unknown
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, DomainError>;
}

/// Durable CRUD for assembled orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order and assign its id
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Full replacement of an existing order by id: customer, lines and
    /// total are all overwritten
    async fn save(&self, id: OrderId, order: &NewOrder) -> Result<Order, DomainError>;

    /// Delete an order; returns whether a row was actually removed
    async fn delete_by_id(&self, id: OrderId) -> Result<bool, DomainError>;

    /// All persisted orders with their lines
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;
}
