//! Order handlers
//!
//! Endpoints for creating, replacing, deleting and listing priced orders.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Order, OrderId, RequestedLine};
use crate::error::AppError;
use crate::AppState;

/// One requested line of an order
#[derive(Debug, Deserialize)]
pub struct RequestedLineInput {
    pub product_code: String,
    pub quantity: i32,
}

/// Request body for creating or replacing an order
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub items: Vec<RequestedLineInput>,
}

#[derive(Debug, Serialize)]
pub struct OrderLineResponse {
    pub product_code: String,
    pub product_name: String,
    pub quantity: i32,
    pub line_total: f64,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i32,
    pub customer_name: String,
    pub total_amount: f64,
    pub items: Vec<OrderLineResponse>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteOrderResponse {
    pub deleted: bool,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.0,
            customer_name: order.customer_name,
            total_amount: order.total_amount,
            items: order
                .lines
                .into_iter()
                .map(|line| OrderLineResponse {
                    product_code: line.product_code,
                    product_name: line.product_name,
                    quantity: line.quantity,
                    line_total: line.line_total,
                })
                .collect(),
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

fn requested_lines(items: Vec<RequestedLineInput>) -> Vec<RequestedLine> {
    items
        .into_iter()
        .map(|item| RequestedLine {
            product_code: item.product_code,
            quantity: item.quantity,
        })
        .collect()
}

/// POST /orders
///
/// Price the requested lines and create an order.
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let lines = requested_lines(request.items);
    let order = state
        .order_service
        .create_order(&request.customer_name, &lines)
        .await?;

    Ok(Json(order.into()))
}

/// PUT /orders/:id
///
/// Re-price the requested lines and fully replace an existing order.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let lines = requested_lines(request.items);
    let order = state
        .order_service
        .update_order(OrderId(id), &request.customer_name, &lines)
        .await?;

    Ok(Json(order.into()))
}

/// DELETE /orders/:id
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteOrderResponse>, AppError> {
    let deleted = state.order_service.delete_order(OrderId(id)).await?;

    Ok(Json(DeleteOrderResponse { deleted }))
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let orders = state.order_service.list_orders().await?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}
