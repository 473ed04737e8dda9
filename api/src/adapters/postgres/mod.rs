//! PostgreSQL adapters
//!
//! Implementations of the port traits using SeaORM and PostgreSQL.

pub mod order_repo;
pub mod product_catalog;

pub use order_repo::PostgresOrderRepository;
pub use product_catalog::PostgresProductCatalog;
