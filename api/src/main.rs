//! Checkout API Server
//!
//! An order-management API whose pricing engine resolves requested lines
//! against a product catalog and applies per-product promotions.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresOrderRepository, PostgresProductCatalog};
use app::OrderService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService<PostgresProductCatalog, PostgresOrderRepository>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,checkout_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Checkout API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let catalog = Arc::new(PostgresProductCatalog::new(db.clone()));
    let order_repo = Arc::new(PostgresOrderRepository::new(db.clone()));

    // Create application services
    let order_service = Arc::new(OrderService::new(catalog, order_repo));

    // Create app state
    let state = AppState { order_service };

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route(
            "/orders/:id",
            put(handlers::update_order).delete(handlers::delete_order),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
