//! Cart Model

use super::dish::Dish;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cart line: one dish plus a quantity
///
/// The embedded dish is a snapshot taken when the line was created; totals are
/// recomputed against the live dish collection, the snapshot price is only a
/// fallback for dishes deleted while still in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub dish: Dish,
    /// Always >= 1; setting a quantity <= 0 removes the line instead
    pub quantity: u32,
}

impl CartItem {
    /// The dish id this line is keyed by
    pub fn dish_id(&self) -> i64 {
        self.dish.id
    }

    /// Line subtotal at the snapshot price
    pub fn snapshot_subtotal(&self) -> Decimal {
        self.dish.price * Decimal::from(self.quantity)
    }
}
