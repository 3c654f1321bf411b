//! Domain services over the store
//!
//! Validation, cross-entity rules and workflows live here; the page
//! controllers only orchestrate.

mod catalog;
mod orders;
mod reservations;
mod stats;

pub use catalog::CatalogService;
pub use orders::OrderService;
pub use reservations::ReservationService;
pub use stats::{dashboard_stats, DashboardStats};
