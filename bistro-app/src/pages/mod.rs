//! Page controllers
//!
//! One controller per screen. Controllers hold their own view state (forms,
//! filters, modal flags) plus watch receivers on the collections they
//! display; all mutations go through the services.

mod admin;
mod home;
mod menu;
mod order;
mod reservation;

pub use admin::{AdminPage, AdminTab, CategoryForm, ConfirmFn, DishForm};
pub use home::{Feature, HomePage, FEATURES};
pub use menu::{MenuPage, ALL_CATEGORIES};
pub use order::{OrderForm, OrderPage};
pub use reservation::{ReservationForm, ReservationPage};
