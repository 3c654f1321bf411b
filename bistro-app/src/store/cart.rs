//! Cart collection
//!
//! A derived collection keyed by dish id with quantity aggregation. Same
//! full-sequence watch semantics as the entity collections, but lines are
//! keyed by the dish they reference rather than by their own id.

use shared::error::{AppError, ErrorCode};
use shared::models::{CartItem, Dish};
use shared::AppResult;
use tokio::sync::watch;

/// Observable cart contents
#[derive(Debug)]
pub struct CartStore {
    tx: watch::Sender<Vec<CartItem>>,
}

impl CartStore {
    /// Create an empty cart
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self { tx }
    }

    /// Add one unit of a dish
    ///
    /// An existing line for the same dish id has its quantity incremented;
    /// otherwise a new line with quantity 1 is appended. The cart never holds
    /// two lines for the same dish.
    pub fn add(&self, dish: &Dish) {
        self.tx.send_modify(|items| {
            match items.iter_mut().find(|i| i.dish_id() == dish.id) {
                Some(item) => item.quantity += 1,
                None => items.push(CartItem {
                    dish: dish.clone(),
                    quantity: 1,
                }),
            }
        });
    }

    /// Set the quantity of an existing line
    ///
    /// A quantity of zero or below removes the line. Quantities above
    /// `max_quantity` are rejected.
    pub fn set_quantity(&self, dish_id: i64, quantity: i64, max_quantity: u32) -> AppResult<()> {
        if quantity <= 0 {
            self.remove(dish_id)?;
            return Ok(());
        }
        if quantity > i64::from(max_quantity) {
            return Err(AppError::with_message(
                ErrorCode::CartInvalidQuantity,
                format!("Quantity {} exceeds the limit of {}", quantity, max_quantity),
            ));
        }

        let mut found = false;
        self.tx.send_if_modified(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.dish_id() == dish_id) {
                item.quantity = quantity as u32;
                found = true;
            }
            found
        });
        if found {
            Ok(())
        } else {
            Err(AppError::with_message(
                ErrorCode::CartItemNotFound,
                format!("Dish {} is not in the cart", dish_id),
            ))
        }
    }

    /// Remove the line for a dish
    ///
    /// A miss publishes nothing to subscribers.
    pub fn remove(&self, dish_id: i64) -> AppResult<CartItem> {
        let mut removed = None;
        self.tx.send_if_modified(|items| {
            if let Some(pos) = items.iter().position(|i| i.dish_id() == dish_id) {
                removed = Some(items.remove(pos));
                true
            } else {
                false
            }
        });
        removed.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::CartItemNotFound,
                format!("Dish {} is not in the cart", dish_id),
            )
        })
    }

    /// Empty the cart
    ///
    /// Clearing an already-empty cart publishes nothing.
    pub fn clear(&self) {
        self.tx.send_if_modified(|items| {
            if items.is_empty() {
                false
            } else {
                items.clear();
                true
            }
        });
    }

    /// Snapshot of the cart lines, in insertion order
    pub fn items(&self) -> Vec<CartItem> {
        self.tx.borrow().clone()
    }

    /// Whether the cart is empty
    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Subscribe to the full cart contents
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartItem>> {
        self.tx.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
