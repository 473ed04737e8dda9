//! Order service
//!
//! Assembles orders: resolves each requested line against the product
//! catalog, applies the resolved product's promotion, aggregates the priced
//! lines into a total, and hands the finished order to the repository.
//! Pricing itself never touches the store, so it is testable without one.

use std::sync::Arc;

use crate::domain::entities::{
    total_amount, NewOrder, Order, OrderId, OrderLine, RequestedLine,
};
use crate::domain::ports::{OrderRepository, ProductCatalog};
use crate::error::{AppError, DomainError};

/// Result of pricing a batch of requested lines.
///
/// Lines that failed catalog resolution are carried in `skipped` rather than
/// silently vanishing, so callers and tests can observe them.
#[derive(Debug, Clone, Default)]
pub struct PricedBatch {
    /// Priced lines, insertion order preserved
    pub lines: Vec<OrderLine>,
    /// Requested lines skipped because their product code did not resolve
    pub skipped: Vec<RequestedLine>,
}

/// Service for creating, updating and querying priced orders
pub struct OrderService<C, R>
where
    C: ProductCatalog,
    R: OrderRepository,
{
    catalog: Arc<C>,
    orders: Arc<R>,
}

impl<C, R> OrderService<C, R>
where
    C: ProductCatalog,
    R: OrderRepository,
{
    pub fn new(catalog: Arc<C>, orders: Arc<R>) -> Self {
        Self { catalog, orders }
    }

    /// Price requested lines against the catalog.
    ///
    /// A line whose code is unknown or whose lookup errors is skipped and
    /// the rest of the batch continues; one bad code must not fail the whole
    /// request. A promotion may emit several lines for one request, or none
    /// when its precondition fails.
    pub async fn price_lines(&self, requested: &[RequestedLine]) -> PricedBatch {
        let mut batch = PricedBatch::default();

        for line in requested {
            let product = match self.catalog.find_by_code(&line.product_code).await {
                Ok(Some(product)) => product,
                Ok(None) => {
                    tracing::warn!("skipping line, unknown product code {}", line.product_code);
                    batch.skipped.push(line.clone());
                    continue;
                }
                Err(e) => {
                    tracing::warn!(
                        "skipping line, catalog lookup failed for {}: {}",
                        line.product_code,
                        e
                    );
                    batch.skipped.push(line.clone());
                    continue;
                }
            };

            batch
                .lines
                .extend(product.promotion.apply(&product, line.quantity));
        }

        batch
    }

    /// Create a priced order. Rejects the whole request when no requested
    /// line survives pricing.
    pub async fn create_order(
        &self,
        customer_name: &str,
        requested: &[RequestedLine],
    ) -> Result<Order, AppError> {
        let batch = self.price_lines(requested).await;
        if batch.lines.is_empty() {
            return Err(DomainError::EmptyOrder.into());
        }

        let order = self
            .orders
            .create(&NewOrder {
                customer_name: customer_name.to_string(),
                total_amount: total_amount(&batch.lines),
                lines: batch.lines,
            })
            .await?;

        Ok(order)
    }

    /// Re-price and fully replace an existing order; the id is preserved
    pub async fn update_order(
        &self,
        id: OrderId,
        customer_name: &str,
        requested: &[RequestedLine],
    ) -> Result<Order, AppError> {
        let batch = self.price_lines(requested).await;
        if batch.lines.is_empty() {
            return Err(DomainError::EmptyOrder.into());
        }

        let order = self
            .orders
            .save(
                id,
                &NewOrder {
                    customer_name: customer_name.to_string(),
                    total_amount: total_amount(&batch.lines),
                    lines: batch.lines,
                },
            )
            .await?;

        Ok(order)
    }

    /// Delete an order; returns whether anything was removed
    pub async fn delete_order(&self, id: OrderId) -> Result<bool, AppError> {
        Ok(self.orders.delete_by_id(id).await?)
    }

    /// All persisted orders
    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.find_all().await?)
    }
}
