//! Order page
//!
//! Cart review plus the checkout form. Submission goes through the order
//! service; on success the form resets and a confirmation banner carries the
//! new order id until dismissed.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{CartItem, Order, OrderType};
use shared::AppResult;
use tokio::sync::watch;

use crate::services::OrderService;
use crate::store::RestaurantStore;
use crate::utils::validation::{validate_customer_name, validate_phone};

/// Checkout form state
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub customer_name: String,
    pub phone: String,
    pub order_type: OrderType,
}

impl OrderForm {
    /// Check the form fields without submitting
    pub fn validate(&self) -> AppResult<()> {
        validate_customer_name(&self.customer_name)?;
        validate_phone(&self.phone)?;
        Ok(())
    }

    /// Back to an empty eat-in form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Cart and checkout state
pub struct OrderPage {
    store: Arc<RestaurantStore>,
    orders: OrderService,
    cart_rx: watch::Receiver<Vec<CartItem>>,
    pub form: OrderForm,
    pub order_confirmed: bool,
    pub confirmed_order_id: Option<i64>,
}

impl OrderPage {
    pub fn new(store: Arc<RestaurantStore>) -> Self {
        let cart_rx = store.subscribe_cart();
        let orders = OrderService::new(store.clone());
        Self {
            store,
            orders,
            cart_rx,
            form: OrderForm::default(),
            order_confirmed: false,
            confirmed_order_id: None,
        }
    }

    /// Current cart lines
    pub fn items(&self) -> Vec<CartItem> {
        self.cart_rx.borrow().clone()
    }

    /// Cart total at live catalog prices
    pub fn total(&self) -> Decimal {
        self.store.cart_total()
    }

    /// Set a line's quantity; zero or below removes the line
    pub fn update_quantity(&self, dish_id: i64, quantity: i64) -> AppResult<()> {
        self.store.set_cart_quantity(dish_id, quantity)
    }

    pub fn remove_item(&self, dish_id: i64) -> AppResult<()> {
        self.store.remove_from_cart(dish_id)?;
        Ok(())
    }

    pub fn clear_cart(&self) {
        self.store.clear_cart();
    }

    /// Submit the cart with the current form
    ///
    /// On success the cart is emptied, the form resets, and the confirmation
    /// banner shows until [`close_confirmation`](Self::close_confirmation).
    pub fn submit_order(&mut self) -> AppResult<Order> {
        self.form.validate()?;
        let order = self.orders.submit(
            &self.form.customer_name,
            &self.form.phone,
            self.form.order_type,
        )?;
        self.form.reset();
        self.order_confirmed = true;
        self.confirmed_order_id = Some(order.id);
        Ok(order)
    }

    /// Dismiss the confirmation banner
    pub fn close_confirmation(&mut self) {
        self.order_confirmed = false;
        self.confirmed_order_id = None;
    }
}
