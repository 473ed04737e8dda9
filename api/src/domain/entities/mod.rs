//! Domain entities

pub mod order;
pub mod product;
pub mod promotion;

pub use order::{total_amount, NewOrder, Order, OrderId, OrderLine, RequestedLine};
pub use product::Product;
pub use promotion::Promotion;
