//! Order workflow
//!
//! Turns the current cart into an order. Order lines snapshot the dish name
//! and price at submission time, so later catalog edits never change a
//! placed order.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{Order, OrderLine, OrderStatus, OrderType};
use shared::util::now_millis;
use shared::AppResult;
use tracing::info;

use crate::store::RestaurantStore;
use crate::utils::validation::{validate_customer_name, validate_phone};

/// Order submission and lifecycle
#[derive(Debug, Clone)]
pub struct OrderService {
    store: Arc<RestaurantStore>,
}

impl OrderService {
    pub fn new(store: Arc<RestaurantStore>) -> Self {
        Self { store }
    }

    /// Submit the current cart as a new order
    ///
    /// The cart must be non-empty. Each line is priced at the catalog's
    /// current price (or the cart snapshot when the dish was deleted), the
    /// order starts as pending, and the cart is cleared on success.
    pub fn submit(
        &self,
        customer_name: &str,
        phone: &str,
        order_type: OrderType,
    ) -> AppResult<Order> {
        validate_customer_name(customer_name)?;
        validate_phone(phone)?;

        let items = self.store.cart_items();
        if items.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::OrderEmpty,
                "Cannot submit an order with an empty cart",
            ));
        }

        let lines: Vec<OrderLine> = items
            .iter()
            .map(|item| {
                let price = self
                    .store
                    .dishes
                    .get(item.dish_id())
                    .map(|d| d.price)
                    .unwrap_or(item.dish.price);
                OrderLine {
                    dish_id: item.dish_id(),
                    name: item.dish.name.clone(),
                    price,
                    quantity: item.quantity,
                }
            })
            .collect();
        let total: Decimal = lines.iter().map(OrderLine::subtotal).sum();

        let order = self.store.insert_order(Order {
            id: 0,
            lines,
            customer_name: customer_name.trim().to_string(),
            phone: phone.trim().to_string(),
            order_type,
            total,
            status: OrderStatus::Pending,
            created_at: now_millis(),
        });
        self.store.clear_cart();
        info!(order_id = order.id, total = %order.total, "Order submitted");
        Ok(order)
    }

    /// Move an order to a new status
    pub fn update_status(&self, id: i64, status: OrderStatus) -> AppResult<Order> {
        let order = self.store.update_order_status(id, status)?;
        info!(order_id = id, status = ?status, "Order status updated");
        Ok(order)
    }

    /// Delete an order
    pub fn delete(&self, id: i64) -> AppResult<Order> {
        let order = self.store.remove_order(id)?;
        info!(order_id = id, "Order deleted");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Dish;

    fn store_with_pizza() -> Arc<RestaurantStore> {
        let store = Arc::new(RestaurantStore::default());
        store.insert_dish(Dish {
            id: 0,
            name: "Pizza".into(),
            category: "Plats".into(),
            description: String::new(),
            price: Decimal::from(10),
            image: String::new(),
        });
        store
    }

    #[test]
    fn test_submit_snapshots_and_clears_cart() {
        let store = store_with_pizza();
        let svc = OrderService::new(store.clone());
        let pizza_id = store.dishes.list()[0].id;
        store.add_to_cart(pizza_id).unwrap();
        store.add_to_cart(pizza_id).unwrap();

        let order = svc.submit("Marie", "0612345678", OrderType::SurPlace).unwrap();
        assert_eq!(order.total, Decimal::from(20));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 2);
        assert!(store.cart_items().is_empty());

        // Catalog edits after submission do not touch the order
        let mut pizza = store.dishes.get(pizza_id).unwrap();
        pizza.price = Decimal::from(15);
        store.update_dish(pizza).unwrap();
        assert_eq!(store.orders.get(order.id).unwrap().total, Decimal::from(20));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let svc = OrderService::new(store_with_pizza());
        let err = svc
            .submit("Marie", "0612345678", OrderType::AEmporter)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }

    #[test]
    fn test_invalid_contact_rejected() {
        let store = store_with_pizza();
        let svc = OrderService::new(store.clone());
        let pizza_id = store.dishes.list()[0].id;
        store.add_to_cart(pizza_id).unwrap();

        assert!(svc.submit("M", "0612345678", OrderType::SurPlace).is_err());
        assert!(svc.submit("Marie", "06ab", OrderType::SurPlace).is_err());
        // Cart untouched by failed submissions
        assert_eq!(store.cart_items().len(), 1);
    }

    #[test]
    fn test_status_lifecycle() {
        let store = store_with_pizza();
        let svc = OrderService::new(store.clone());
        let pizza_id = store.dishes.list()[0].id;
        store.add_to_cart(pizza_id).unwrap();
        let order = svc.submit("Marie", "0612345678", OrderType::SurPlace).unwrap();

        let order = svc.update_status(order.id, OrderStatus::Confirmed).unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);

        svc.delete(order.id).unwrap();
        assert_eq!(
            svc.delete(order.id).unwrap_err().code,
            ErrorCode::OrderNotFound
        );
    }
}
