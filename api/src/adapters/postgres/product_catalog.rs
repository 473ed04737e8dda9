//! PostgreSQL adapter for ProductCatalog

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{Product, Promotion};
use crate::domain::ports::ProductCatalog;
use crate::entity::products;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductCatalog
pub struct PostgresProductCatalog {
    db: DatabaseConnection,
}

impl PostgresProductCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<products::Model> for Product {
    fn from(m: products::Model) -> Self {
        Product {
            code: m.code,
            name: m.name,
            unit_price: m.unit_price,
            promotion: Promotion::from_tag(&m.promotion),
        }
    }
}

#[async_trait]
impl ProductCatalog for PostgresProductCatalog {
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, DomainError> {
        let result = products::Entity::find()
            .filter(products::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}
