use rust_decimal::Decimal;

use super::product::Product;

/// One product in an order together with how many of it were ordered.
///
/// Lines are only created and mutated through
/// [`OrderDraft`](crate::order::OrderDraft), which keeps `quantity >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product: Product,
    pub quantity: u32,
}

impl OrderLine {
    pub fn calories(&self) -> u64 {
        u64::from(self.product.calories) * u64::from(self.quantity)
    }

    pub fn price(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Aggregate calories and price over a set of order lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub total_calories: u64,
    pub total_price: Decimal,
}
