//! In-memory reactive store
//!
//! Holds every collection of the application behind watch channels. All
//! higher-level behavior (validation, cascades, workflows) lives in the
//! service layer; the store only guarantees id allocation, atomic
//! publication, and not-found mapping.

mod cart;
mod collection;
mod id;

pub use cart::CartStore;
pub use collection::{Collection, Record};
pub use id::IdAllocator;

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    CartItem, Category, Dish, Order, OrderStatus, Reservation, ReservationStatus,
};
use shared::AppResult;
use tokio::sync::watch;
use tracing::debug;

/// All application state
///
/// Cheap to construct, fully independent instances; tests build as many as
/// they like.
#[derive(Debug)]
pub struct RestaurantStore {
    ids: IdAllocator,
    pub dishes: Collection<Dish>,
    pub categories: Collection<Category>,
    pub orders: Collection<Order>,
    pub reservations: Collection<Reservation>,
    pub cart: CartStore,
    max_cart_quantity: u32,
}

impl RestaurantStore {
    pub fn new(max_cart_quantity: u32) -> Self {
        Self {
            ids: IdAllocator::new(),
            dishes: Collection::new(),
            categories: Collection::new(),
            orders: Collection::new(),
            reservations: Collection::new(),
            cart: CartStore::new(),
            max_cart_quantity,
        }
    }

    /// Allocate a fresh id
    ///
    /// Ids are unique across all collections of this store.
    pub fn next_id(&self) -> i64 {
        self.ids.next_id()
    }

    // ========== Dishes ==========

    pub fn insert_dish(&self, mut dish: Dish) -> Dish {
        dish.id = self.next_id();
        debug!(dish_id = dish.id, name = %dish.name, "Dish inserted");
        self.dishes.insert(dish)
    }

    pub fn update_dish(&self, dish: Dish) -> AppResult<Dish> {
        let id = dish.id;
        self.dishes.replace(dish).ok_or_else(|| {
            AppError::with_message(ErrorCode::DishNotFound, format!("Dish {} not found", id))
        })
    }

    pub fn remove_dish(&self, id: i64) -> AppResult<Dish> {
        let removed = self.dishes.remove(id).ok_or_else(|| {
            AppError::with_message(ErrorCode::DishNotFound, format!("Dish {} not found", id))
        })?;
        debug!(dish_id = id, "Dish removed");
        Ok(removed)
    }

    pub fn get_dish(&self, id: i64) -> AppResult<Dish> {
        self.dishes.get(id).ok_or_else(|| {
            AppError::with_message(ErrorCode::DishNotFound, format!("Dish {} not found", id))
        })
    }

    // ========== Categories ==========

    pub fn insert_category(&self, mut category: Category) -> Category {
        category.id = self.next_id();
        debug!(category_id = category.id, name = %category.name, "Category inserted");
        self.categories.insert(category)
    }

    pub fn update_category(&self, category: Category) -> AppResult<Category> {
        let id = category.id;
        self.categories.replace(category).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category {} not found", id),
            )
        })
    }

    pub fn remove_category(&self, id: i64) -> AppResult<Category> {
        let removed = self.categories.remove(id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category {} not found", id),
            )
        })?;
        debug!(category_id = id, "Category removed");
        Ok(removed)
    }

    pub fn get_category(&self, id: i64) -> AppResult<Category> {
        self.categories.get(id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category {} not found", id),
            )
        })
    }

    /// Look up a category by its unique name
    pub fn find_category_by_name(&self, name: &str) -> Option<Category> {
        self.categories.list().into_iter().find(|c| c.name == name)
    }

    // ========== Orders ==========

    pub fn insert_order(&self, mut order: Order) -> Order {
        order.id = self.next_id();
        debug!(order_id = order.id, total = %order.total, "Order inserted");
        self.orders.insert(order)
    }

    pub fn update_order_status(&self, id: i64, status: OrderStatus) -> AppResult<Order> {
        self.orders
            .update_with(id, |o| o.status = status)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::OrderNotFound,
                    format!("Order {} not found", id),
                )
            })
    }

    pub fn remove_order(&self, id: i64) -> AppResult<Order> {
        self.orders.remove(id).ok_or_else(|| {
            AppError::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
        })
    }

    // ========== Reservations ==========

    pub fn insert_reservation(&self, mut reservation: Reservation) -> Reservation {
        reservation.id = self.next_id();
        debug!(
            reservation_id = reservation.id,
            date = %reservation.date,
            "Reservation inserted"
        );
        self.reservations.insert(reservation)
    }

    pub fn update_reservation_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        self.reservations
            .update_with(id, |r| r.status = status)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::ReservationNotFound,
                    format!("Reservation {} not found", id),
                )
            })
    }

    pub fn remove_reservation(&self, id: i64) -> AppResult<Reservation> {
        self.reservations.remove(id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ReservationNotFound,
                format!("Reservation {} not found", id),
            )
        })
    }

    // ========== Cart ==========

    /// Add one unit of a dish to the cart
    ///
    /// The dish must currently exist in the catalog; the cart line keeps its
    /// own snapshot of it.
    pub fn add_to_cart(&self, dish_id: i64) -> AppResult<()> {
        let dish = self.get_dish(dish_id)?;
        self.cart.add(&dish);
        Ok(())
    }

    pub fn set_cart_quantity(&self, dish_id: i64, quantity: i64) -> AppResult<()> {
        self.cart
            .set_quantity(dish_id, quantity, self.max_cart_quantity)
    }

    pub fn remove_from_cart(&self, dish_id: i64) -> AppResult<CartItem> {
        self.cart.remove(dish_id)
    }

    pub fn clear_cart(&self) {
        self.cart.clear();
    }

    /// Current cart total
    ///
    /// Each line is priced at the catalog's live price when the dish still
    /// exists, falling back to the price snapshot taken when the line was
    /// added (the dish may have been deleted since).
    pub fn cart_total(&self) -> Decimal {
        self.cart
            .items()
            .iter()
            .map(|item| {
                let unit = self
                    .dishes
                    .get(item.dish_id())
                    .map(|d| d.price)
                    .unwrap_or(item.dish.price);
                unit * Decimal::from(item.quantity)
            })
            .sum()
    }

    /// Cart lines priced at live catalog prices where available
    pub fn cart_items(&self) -> Vec<CartItem> {
        self.cart.items()
    }

    pub fn subscribe_cart(&self) -> watch::Receiver<Vec<CartItem>> {
        self.cart.subscribe()
    }
}

impl Default for RestaurantStore {
    fn default() -> Self {
        Self::new(99)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CategoryIcon;

    fn dish(name: &str, price: i64) -> Dish {
        Dish {
            id: 0,
            name: name.into(),
            category: "Plats".into(),
            description: String::new(),
            price: Decimal::from(price),
            image: String::new(),
        }
    }

    #[test]
    fn test_ids_unique_across_collections() {
        let store = RestaurantStore::default();
        let d = store.insert_dish(dish("Ratatouille", 12));
        let c = store.insert_category(Category {
            id: 0,
            name: "Plats".into(),
            icon: CategoryIcon::EggFried,
        });
        assert_ne!(d.id, c.id);
    }

    #[test]
    fn test_unknown_ids_map_to_domain_errors() {
        let store = RestaurantStore::default();
        assert_eq!(store.get_dish(1).unwrap_err().code, ErrorCode::DishNotFound);
        assert_eq!(
            store.remove_category(1).unwrap_err().code,
            ErrorCode::CategoryNotFound
        );
        assert_eq!(
            store
                .update_order_status(1, OrderStatus::Confirmed)
                .unwrap_err()
                .code,
            ErrorCode::OrderNotFound
        );
        assert_eq!(
            store
                .update_reservation_status(1, ReservationStatus::Confirmed)
                .unwrap_err()
                .code,
            ErrorCode::ReservationNotFound
        );
    }

    #[test]
    fn test_cart_total_tracks_live_price() {
        let store = RestaurantStore::default();
        let d = store.insert_dish(dish("Pizza", 10));
        store.add_to_cart(d.id).unwrap();
        store.add_to_cart(d.id).unwrap();
        assert_eq!(store.cart_total(), Decimal::from(20));

        // Live price change is reflected while the dish exists
        let mut updated = d.clone();
        updated.price = Decimal::from(15);
        store.update_dish(updated).unwrap();
        assert_eq!(store.cart_total(), Decimal::from(30));

        // Deleted dish falls back to the snapshot taken at add time
        store.remove_dish(d.id).unwrap();
        assert_eq!(store.cart_total(), Decimal::from(20));
    }

    #[test]
    fn test_add_to_cart_requires_known_dish() {
        let store = RestaurantStore::default();
        assert_eq!(
            store.add_to_cart(42).unwrap_err().code,
            ErrorCode::DishNotFound
        );
    }
}
