//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They store
//! data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewOrder, Order, OrderId, Product};
use crate::domain::ports::{OrderRepository, ProductCatalog};
use crate::error::DomainError;

// ============================================================================
// In-Memory Product Catalog
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductCatalog {
    products: Arc<RwLock<HashMap<String, Product>>>,
    fail: bool,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        self.products
            .write()
            .unwrap()
            .insert(product.code.clone(), product);
        self
    }

    /// A catalog whose every lookup fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("catalog unavailable".to_string()));
        }
        Ok(self.products.read().unwrap().get(code).cloned())
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepository {
    // BTreeMap keeps find_all ordered by id, matching the SQL adapter
    orders: Arc<RwLock<BTreeMap<i32, Order>>>,
    next_id: Arc<RwLock<i32>>,
    fail: bool,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError> {
        if self.fail {
            return Err(DomainError::Database("store unavailable".to_string()));
        }

        let mut next_id = self.next_id.write().unwrap();
        *next_id += 1;

        let created = Order {
            id: OrderId(*next_id),
            customer_name: order.customer_name.clone(),
            total_amount: order.total_amount,
            lines: order.lines.clone(),
            created_at: Utc::now(),
        };
        self.orders
            .write()
            .unwrap()
            .insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn save(&self, id: OrderId, order: &NewOrder) -> Result<Order, DomainError> {
        if self.fail {
            return Err(DomainError::Database("store unavailable".to_string()));
        }

        let mut orders = self.orders.write().unwrap();
        let existing = orders
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound(format!("order {}", id)))?;

        existing.customer_name = order.customer_name.clone();
        existing.total_amount = order.total_amount;
        existing.lines = order.lines.clone();

        Ok(existing.clone())
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<bool, DomainError> {
        if self.fail {
            return Err(DomainError::Database("store unavailable".to_string()));
        }

        Ok(self.orders.write().unwrap().remove(&id.0).is_some())
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        if self.fail {
            return Err(DomainError::Database("store unavailable".to_string()));
        }

        Ok(self.orders.read().unwrap().values().cloned().collect())
    }
}
