//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Product, Promotion, RequestedLine};

/// Create a test product with the given pricing rule
pub fn test_product(code: &str, unit_price: f64, promotion: Promotion) -> Product {
    Product {
        code: code.to_string(),
        name: format!("Product {}", code),
        unit_price,
        promotion,
    }
}

/// Create a requested line
pub fn test_requested_line(code: &str, quantity: i32) -> RequestedLine {
    RequestedLine {
        product_code: code.to_string(),
        quantity,
    }
}
