//! Order domain entities
//!
//! An order is built from requested lines that survived catalog resolution
//! and promotion pricing. Its total is always the sum of its line totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an order, assigned by the store on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i32);

impl From<i32> for OrderId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A line as requested by the caller, before catalog resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedLine {
    pub product_code: String,
    pub quantity: i32,
}

/// One resolved, promotion-adjusted line of an order.
///
/// `line_total` is not `unit_price * quantity` in general: a bundled free
/// item has a total of zero regardless of unit price, and discount rules
/// change the effective multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_code: String,
    pub product_name: String,
    pub quantity: i32,
    pub line_total: f64,
}

/// A priced order
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub total_amount: f64,
    /// Priced lines in the order they were produced
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub total_amount: f64,
    pub lines: Vec<OrderLine>,
}

/// Sum of the line totals. Plain `f64` accumulation, no rounding.
pub fn total_amount(lines: &[OrderLine]) -> f64 {
    lines.iter().map(|l| l.line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(code: &str, quantity: i32, line_total: f64) -> OrderLine {
        OrderLine {
            product_code: code.to_string(),
            product_name: format!("Product {}", code),
            quantity,
            line_total,
        }
    }

    #[test]
    fn total_amount_sums_line_totals() {
        let lines = vec![
            make_line("A", 2, 200.0),
            make_line("B", 2, 0.0),
            make_line("C", 3, 60.0),
        ];

        assert_eq!(total_amount(&lines), 260.0);
    }

    #[test]
    fn total_amount_of_no_lines_is_zero() {
        assert_eq!(total_amount(&[]), 0.0);
    }

    #[test]
    fn total_amount_recomputation_is_stable() {
        let lines = vec![make_line("A", 1, 12.5), make_line("B", 4, 135.0)];

        let first = total_amount(&lines);
        let second = total_amount(&lines);

        assert_eq!(first, second);
    }

    #[test]
    fn order_id_display() {
        assert_eq!(OrderId(42).to_string(), "42");
    }
}
