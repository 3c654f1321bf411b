//! Dashboard statistics
//!
//! Recomputed from the collections on every call; nothing is cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{OrderStatus, ReservationStatus};

use crate::store::RestaurantStore;

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum of totals over all orders, whatever their status
    pub total_revenue: Decimal,
    pub confirmed_orders: usize,
    pub pending_reservations: usize,
}

/// Compute the dashboard statistics from the current store contents
pub fn dashboard_stats(store: &RestaurantStore) -> DashboardStats {
    let orders = store.orders.list();

    DashboardStats {
        total_revenue: orders.iter().map(|o| o.total).sum(),
        confirmed_orders: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Confirmed)
            .count(),
        pending_reservations: store
            .reservations
            .list()
            .iter()
            .filter(|r| r.status == ReservationStatus::Pending)
            .count(),
    }
}
