//! PostgreSQL adapter for OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{NewOrder, Order, OrderId, OrderLine};
use crate::domain::ports::OrderRepository;
use crate::entity::{order_items, orders};
use crate::error::DomainError;

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert_lines(
        &self,
        order_id: i32,
        lines: &[OrderLine],
    ) -> Result<Vec<order_items::Model>, DomainError> {
        let mut models = Vec::with_capacity(lines.len());
        for line in lines {
            let model = order_items::ActiveModel {
                order_id: Set(order_id),
                product_code: Set(line.product_code.clone()),
                product_name: Set(line.product_name.clone()),
                quantity: Set(line.quantity),
                line_total: Set(line.line_total),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
            models.push(model);
        }
        Ok(models)
    }
}

impl From<order_items::Model> for OrderLine {
    fn from(m: order_items::Model) -> Self {
        OrderLine {
            product_code: m.product_code,
            product_name: m.product_name,
            quantity: m.quantity,
            line_total: m.line_total,
        }
    }
}

fn to_order(order: orders::Model, items: Vec<order_items::Model>) -> Order {
    Order {
        id: OrderId(order.id),
        customer_name: order.customer_name,
        total_amount: order.total_amount,
        lines: items.into_iter().map(OrderLine::from).collect(),
        created_at: order.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = orders::ActiveModel {
            customer_name: Set(order.customer_name.clone()),
            total_amount: Set(order.total_amount),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        let items = self.insert_lines(model.id, &order.lines).await?;

        Ok(to_order(model, items))
    }

    async fn save(&self, id: OrderId, order: &NewOrder) -> Result<Order, DomainError> {
        let model = orders::ActiveModel {
            id: Set(id.0),
            customer_name: Set(order.customer_name.clone()),
            total_amount: Set(order.total_amount),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(format!("order {}", id)),
            e => DomainError::Database(e.to_string()),
        })?;

        // Full replacement: drop the stored lines and insert the new batch.
        order_items::Entity::delete_many()
            .filter(order_items::Column::OrderId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let items = self.insert_lines(id.0, &order.lines).await?;

        Ok(to_order(model, items))
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<bool, DomainError> {
        order_items::Entity::delete_many()
            .filter(order_items::Column::OrderId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let result = orders::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let results = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .find_with_related(order_items::Entity)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|(order, items)| to_order(order, items))
            .collect())
    }
}
