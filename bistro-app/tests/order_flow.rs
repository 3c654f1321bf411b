//! End-to-end flows through the page controllers
//!
//! Exercises the same paths a visitor would take: browse the menu, fill the
//! cart, check out, book a table, then manage everything from the admin
//! panel.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{OrderStatus, OrderType, ReservationStatus, TimeSlot};

use bistro_app::pages::{AdminPage, MenuPage, OrderPage, ReservationPage};
use bistro_app::{load_demo_menu, CatalogService, Config, RestaurantStore};

fn setup() -> (Arc<RestaurantStore>, Config) {
    let config = Config::with_overrides(20, 99);
    let store = Arc::new(RestaurantStore::new(config.max_cart_quantity));
    let catalog = CatalogService::new(store.clone(), &config);
    load_demo_menu(&catalog).unwrap();
    (store, config)
}

#[tokio::test]
async fn menu_to_order_flow() {
    let (store, _config) = setup();
    let mut menu = MenuPage::new(store.clone()).with_flash_duration(Duration::from_millis(10));

    // Browse the mains and pick one
    menu.select_category("Plats");
    let dishes = menu.filtered_dishes();
    assert!(!dishes.is_empty());
    let ratatouille = dishes.iter().find(|d| d.name == "Ratatouille").unwrap();

    // Two clicks on the same dish make one line of quantity 2
    menu.add_to_cart(ratatouille.id).unwrap();
    menu.add_to_cart(ratatouille.id).unwrap();
    assert!(menu.is_added_to_cart(ratatouille.id));

    let mut order_page = OrderPage::new(store.clone());
    let items = order_page.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(order_page.total(), ratatouille.price * Decimal::from(2));

    // Check out
    order_page.form.customer_name = "Marie Dupont".into();
    order_page.form.phone = "0612345678".into();
    order_page.form.order_type = OrderType::AEmporter;
    let order = order_page.submit_order().unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, ratatouille.price * Decimal::from(2));
    assert!(order_page.items().is_empty());
    assert!(order_page.order_confirmed);

    // A later price change never touches the placed order
    let mut dish = store.dishes.get(ratatouille.id).unwrap();
    dish.price = Decimal::from(99);
    store.update_dish(dish).unwrap();
    assert_eq!(store.orders.get(order.id).unwrap().total, order.total);
}

#[tokio::test]
async fn cart_total_follows_live_prices_until_checkout() {
    let (store, _config) = setup();
    let menu = MenuPage::new(store.clone()).with_flash_duration(Duration::from_millis(10));

    let dish = store.dishes.list()[0].clone();
    menu.add_to_cart(dish.id).unwrap();

    // Cart totals use the catalog's current price
    let mut updated = dish.clone();
    updated.price = dish.price + Decimal::from(2);
    store.update_dish(updated.clone()).unwrap();
    assert_eq!(store.cart_total(), updated.price);

    // A deleted dish keeps the line priced at its snapshot
    store.remove_dish(dish.id).unwrap();
    assert_eq!(store.cart_total(), dish.price);
}

#[test]
fn reservation_flow() {
    let (store, config) = setup();
    let mut page = ReservationPage::new(store.clone(), &config);
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    page.form.name = "Jean Martin".into();
    page.form.email = "jean@example.com".into();
    page.form.phone = "+33 6 12 34 56".into();
    page.form.date = Some(today.succ_opt().unwrap());
    page.form.time = Some(TimeSlot::parse("20:00").unwrap());
    page.form.number_of_people = 6;

    let reservation = page.submit_at(today).unwrap();
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert!(page.reservation_confirmed);
    assert_eq!(store.reservations.len(), 1);

    // Off-grid times are impossible to express
    assert!(TimeSlot::parse("20:15").is_err());
    assert!(TimeSlot::parse("23:00").is_err());
}

#[test]
fn admin_dashboard_tracks_status_changes() {
    let (store, config) = setup();

    // Place two orders
    let dish = store.dishes.list()[0].clone();
    for name in ["Marie", "Jean"] {
        store.add_to_cart(dish.id).unwrap();
        let mut page = OrderPage::new(store.clone());
        page.form.customer_name = name.into();
        page.form.phone = "0612345678".into();
        page.submit_order().unwrap();
    }

    // Book a table
    let mut reservation_page = ReservationPage::new(store.clone(), &config);
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    reservation_page.form.name = "Marie".into();
    reservation_page.form.email = "marie@example.com".into();
    reservation_page.form.phone = "0612345678".into();
    reservation_page.form.date = Some(today);
    reservation_page.form.time = Some(TimeSlot::parse("19:30").unwrap());
    reservation_page.submit_at(today).unwrap();

    let admin = AdminPage::new(store.clone(), &config);

    // Revenue counts every order; nothing confirmed yet
    let orders = admin.orders();
    let expected_revenue: Decimal = orders.iter().map(|o| o.total).sum();
    let stats = admin.stats();
    assert_eq!(stats.confirmed_orders, 0);
    assert_eq!(stats.total_revenue, expected_revenue);
    assert_eq!(stats.pending_reservations, 1);

    // Confirm one order and the reservation
    admin
        .update_order_status(orders[0].id, OrderStatus::Confirmed)
        .unwrap();
    admin
        .update_reservation_status(admin.reservations()[0].id, ReservationStatus::Confirmed)
        .unwrap();

    let stats = admin.stats();
    assert_eq!(stats.confirmed_orders, 1);
    assert_eq!(stats.total_revenue, expected_revenue);
    assert_eq!(stats.pending_reservations, 0);
}
