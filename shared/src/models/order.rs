//! Order Model

use crate::types::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where the customer eats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Eat in
    #[default]
    SurPlace,
    /// Take away
    AEmporter,
}

/// Order status
///
/// Nominal flow is pending → confirmed → ready → delivered; `delivered` and
/// `cancelled` are terminal. The admin panel may set any status directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in nominal flow order (for admin dropdowns)
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Whether this status ends the order lifecycle
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// One line of a submitted order
///
/// A snapshot copied from the cart at submission time; later edits or
/// deletions of the referenced dish never change past orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Dish reference at submission time (the dish may no longer exist)
    pub dish_id: i64,
    pub name: String,
    /// Unit price at submission time
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    /// Line subtotal
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub lines: Vec<OrderLine>,
    pub customer_name: String,
    pub phone: String,
    pub order_type: OrderType,
    /// Total snapshotted at submission, independent of later price changes
    pub total: Decimal,
    pub status: OrderStatus,
    /// Unix millis
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_serde() {
        assert_eq!(
            serde_json::to_string(&OrderType::SurPlace).unwrap(),
            "\"sur_place\""
        );
        assert_eq!(
            serde_json::to_string(&OrderType::AEmporter).unwrap(),
            "\"a_emporter\""
        );
        let t: OrderType = serde_json::from_str("\"a_emporter\"").unwrap();
        assert_eq!(t, OrderType::AEmporter);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_line_subtotal() {
        let line = OrderLine {
            dish_id: 1,
            name: "Pizza".into(),
            price: Decimal::from(10),
            quantity: 2,
        };
        assert_eq!(line.subtotal(), Decimal::from(20));
    }
}
