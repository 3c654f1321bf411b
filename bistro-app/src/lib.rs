//! Bistro App - reactive in-memory store for a restaurant front end
//!
//! # Module structure
//!
//! ```text
//! bistro-app/src/
//! ├── core/          # Configuration
//! ├── store/         # Watch-backed collections, cart, id allocation
//! ├── services/      # Catalog, orders, reservations, dashboard stats
//! ├── pages/         # Per-screen controllers (menu, order, reservation, admin)
//! ├── utils/         # Logging setup, input validation
//! └── seed.rs        # Demo menu
//! ```
//!
//! The store publishes every collection through `tokio::sync::watch`
//! channels, so any number of screens can observe the same data and react to
//! every mutation without polling.

pub mod core;
pub mod pages;
pub mod seed;
pub mod services;
pub mod store;
pub mod utils;

// Re-export the common surface
pub use crate::core::Config;
pub use pages::{AdminPage, HomePage, MenuPage, OrderPage, ReservationPage};
pub use seed::load_demo_menu;
pub use services::{dashboard_stats, CatalogService, DashboardStats, OrderService, ReservationService};
pub use store::RestaurantStore;

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
