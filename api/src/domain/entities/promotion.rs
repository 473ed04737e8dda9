//! Promotion rules
//!
//! Each catalog entry carries a promotion tag selecting one pricing rule.
//! `Promotion::apply` is a pure function from (product, requested quantity)
//! to zero or more priced order lines, so new rules can be added without
//! touching the order assembly loop.
//!
//! Two rules drop the whole line when their precondition fails instead of
//! falling back to full price. That is intended behavior, not an oversight;
//! the tests below pin it down.

use serde::{Deserialize, Serialize};

use super::order::OrderLine;
use super::product::Product;

/// Product code of the companion item added by the bundle promotion
pub const BUNDLE_ITEM_CODE: &str = "234234";
/// Product name of the companion item added by the bundle promotion
pub const BUNDLE_ITEM_NAME: &str = "Raspberry Pi B";

/// Pricing rule attached to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    /// Every purchased unit comes with a free companion item: the purchased
    /// line is charged in full and a second, zero-priced line is added for
    /// the companion product at the same quantity.
    BundleFreeItem,
    /// Pay for all but one unit, sold in groups of three. Quantities not
    /// divisible by three produce no line at all.
    BuyThreePayTwo,
    /// Flat 10% unit discount from three units up. Fewer than three units
    /// produce no line at all.
    BulkDiscount,
    /// No promotion: the line is charged at full price.
    None,
}

impl Promotion {
    /// Parse a catalog promotion tag. Unrecognized or empty tags mean no
    /// promotion.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BundleFreeForEveryItemBought" => Promotion::BundleFreeItem,
            "BuyThreePayTwoOnly" => Promotion::BuyThreePayTwo,
            "DiscountMoreThanThree" => Promotion::BulkDiscount,
            _ => Promotion::None,
        }
    }

    /// The tag string stored in the catalog, empty for no promotion
    pub fn tag(&self) -> &'static str {
        match self {
            Promotion::BundleFreeItem => "BundleFreeForEveryItemBought",
            Promotion::BuyThreePayTwo => "BuyThreePayTwoOnly",
            Promotion::BulkDiscount => "DiscountMoreThanThree",
            Promotion::None => "",
        }
    }

    /// Price one requested line against its resolved product.
    ///
    /// Returns the priced lines this rule emits: possibly several (bundle),
    /// possibly none (failed precondition). All arithmetic is plain `f64`
    /// with no rounding step.
    pub fn apply(&self, product: &Product, quantity: i32) -> Vec<OrderLine> {
        match self {
            Promotion::BundleFreeItem => vec![
                OrderLine {
                    product_code: product.code.clone(),
                    product_name: product.name.clone(),
                    quantity,
                    line_total: quantity as f64 * product.unit_price,
                },
                OrderLine {
                    product_code: BUNDLE_ITEM_CODE.to_string(),
                    product_name: BUNDLE_ITEM_NAME.to_string(),
                    quantity,
                    line_total: 0.0,
                },
            ],
            Promotion::BuyThreePayTwo => {
                if quantity % 3 == 0 {
                    vec![OrderLine {
                        product_code: product.code.clone(),
                        product_name: product.name.clone(),
                        quantity,
                        line_total: (quantity - 1) as f64 * product.unit_price,
                    }]
                } else {
                    Vec::new()
                }
            }
            Promotion::BulkDiscount => {
                if quantity >= 3 {
                    vec![OrderLine {
                        product_code: product.code.clone(),
                        product_name: product.name.clone(),
                        quantity,
                        line_total: quantity as f64 * (product.unit_price * 0.9),
                    }]
                } else {
                    Vec::new()
                }
            }
            Promotion::None => vec![OrderLine {
                product_code: product.code.clone(),
                product_name: product.name.clone(),
                quantity,
                line_total: quantity as f64 * product.unit_price,
            }],
        }
    }
}

impl std::fmt::Display for Promotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(code: &str, unit_price: f64, promotion: Promotion) -> Product {
        Product {
            code: code.to_string(),
            name: format!("Product {}", code),
            unit_price,
            promotion,
        }
    }

    #[test]
    fn no_promotion_charges_full_price() {
        let product = make_product("P9", 12.5, Promotion::None);

        let lines = Promotion::None.apply(&product, 4);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_code, "P9");
        assert_eq!(lines[0].quantity, 4);
        assert_eq!(lines[0].line_total, 4.0 * 12.5);
    }

    #[test]
    fn bundle_emits_purchased_line_and_free_companion() {
        let product = make_product("P1", 100.0, Promotion::BundleFreeItem);

        let lines = Promotion::BundleFreeItem.apply(&product, 2);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product_code, "P1");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].line_total, 200.0);
        assert_eq!(lines[1].product_code, BUNDLE_ITEM_CODE);
        assert_eq!(lines[1].product_name, BUNDLE_ITEM_NAME);
        assert_eq!(lines[1].quantity, 2);
        assert_eq!(lines[1].line_total, 0.0);
    }

    #[test]
    fn buy_three_pay_two_charges_all_but_one_unit() {
        let product = make_product("P2", 30.0, Promotion::BuyThreePayTwo);

        let lines = Promotion::BuyThreePayTwo.apply(&product, 3);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[0].line_total, 60.0);
    }

    // Quantities not divisible by three are dropped outright rather than
    // charged at full price. Documented behavior of the rule.
    #[test]
    fn buy_three_pay_two_drops_other_quantities() {
        let product = make_product("P2", 30.0, Promotion::BuyThreePayTwo);

        for quantity in [1, 2, 4, 5, 7] {
            let lines = Promotion::BuyThreePayTwo.apply(&product, quantity);
            assert!(lines.is_empty(), "quantity {} should emit no line", quantity);
        }
    }

    #[test]
    fn buy_three_pay_two_scales_with_larger_multiples() {
        let product = make_product("P2", 30.0, Promotion::BuyThreePayTwo);

        let lines = Promotion::BuyThreePayTwo.apply(&product, 6);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_total, 5.0 * 30.0);
    }

    #[test]
    fn bulk_discount_applies_from_three_units() {
        let product = make_product("P3", 50.0, Promotion::BulkDiscount);

        let lines = Promotion::BulkDiscount.apply(&product, 3);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[0].line_total, 135.0);
    }

    // Same dropping behavior as buy-three-pay-two: below the threshold the
    // line disappears instead of reverting to full price.
    #[test]
    fn bulk_discount_drops_below_three_units() {
        let product = make_product("P3", 50.0, Promotion::BulkDiscount);

        assert!(Promotion::BulkDiscount.apply(&product, 1).is_empty());
        assert!(Promotion::BulkDiscount.apply(&product, 2).is_empty());
    }

    #[test]
    fn from_tag_parses_known_tags() {
        assert_eq!(
            Promotion::from_tag("BundleFreeForEveryItemBought"),
            Promotion::BundleFreeItem
        );
        assert_eq!(
            Promotion::from_tag("BuyThreePayTwoOnly"),
            Promotion::BuyThreePayTwo
        );
        assert_eq!(
            Promotion::from_tag("DiscountMoreThanThree"),
            Promotion::BulkDiscount
        );
    }

    #[test]
    fn from_tag_falls_back_to_no_promotion() {
        assert_eq!(Promotion::from_tag(""), Promotion::None);
        assert_eq!(Promotion::from_tag("SomeFutureRule"), Promotion::None);
        assert_eq!(
            Promotion::from_tag("bundlefreeforeveryitembought"),
            Promotion::None
        );
    }

    #[test]
    fn tag_round_trips_for_real_promotions() {
        for promotion in [
            Promotion::BundleFreeItem,
            Promotion::BuyThreePayTwo,
            Promotion::BulkDiscount,
        ] {
            assert_eq!(Promotion::from_tag(promotion.tag()), promotion);
        }
    }
}
