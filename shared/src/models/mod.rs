//! Domain models for the Bistro application
//!
//! Each entity follows the same shape: the stored record plus the
//! Create/Update payloads used by callers that do not control the id.

mod cart;
mod category;
mod dish;
mod order;
mod reservation;

pub use cart::CartItem;
pub use category::{Category, CategoryCreate, CategoryIcon, CategoryUpdate};
pub use dish::{Dish, DishCreate, DishUpdate};
pub use order::{Order, OrderLine, OrderStatus, OrderType};
pub use reservation::{
    Reservation, ReservationDraft, ReservationStatus, TimeSlot, FIRST_SLOT_HOUR, LAST_SLOT_HOUR,
};
