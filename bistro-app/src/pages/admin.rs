//! Admin panel
//!
//! Tabbed back office: dashboard stats, dish and category editors behind
//! modals, and order/reservation status management. Destructive deletes go
//! through a confirmation hook so a front end can plug in its own dialog.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{
    Category, CategoryCreate, CategoryIcon, CategoryUpdate, Dish, DishCreate, DishUpdate, Order,
    OrderStatus, Reservation, ReservationStatus,
};
use shared::AppResult;
use tracing::debug;

use crate::core::Config;
use crate::services::{dashboard_stats, CatalogService, DashboardStats, OrderService, ReservationService};
use crate::store::RestaurantStore;

/// Confirmation hook for destructive actions; returns false to abort
pub type ConfirmFn = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Admin panel tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Dishes,
    Categories,
    Orders,
    Reservations,
}

/// Dish editor form
#[derive(Debug, Clone, Default)]
pub struct DishForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    /// Empty means "use the default image"
    pub image: String,
}

impl DishForm {
    fn from_dish(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            category: dish.category.clone(),
            description: dish.description.clone(),
            price: dish.price,
            image: dish.image.clone(),
        }
    }

    fn image_opt(&self) -> Option<String> {
        let trimmed = self.image.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Category editor form
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: String,
    pub icon: CategoryIcon,
}

impl CategoryForm {
    fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            icon: category.icon,
        }
    }
}

/// Back-office state
pub struct AdminPage {
    store: Arc<RestaurantStore>,
    catalog: CatalogService,
    orders: OrderService,
    reservations: ReservationService,
    confirm: ConfirmFn,

    pub active_tab: AdminTab,

    pub dish_modal_open: bool,
    /// `Some(id)` while editing an existing dish, `None` while adding
    pub editing_dish: Option<i64>,
    pub dish_form: DishForm,

    pub category_modal_open: bool,
    pub editing_category: Option<i64>,
    pub category_form: CategoryForm,
}

impl AdminPage {
    /// Build an admin page whose deletes never ask for confirmation
    pub fn new(store: Arc<RestaurantStore>, config: &Config) -> Self {
        Self::with_confirm(store, config, Box::new(|_| true))
    }

    /// Build an admin page with a custom delete-confirmation hook
    pub fn with_confirm(store: Arc<RestaurantStore>, config: &Config, confirm: ConfirmFn) -> Self {
        let catalog = CatalogService::new(store.clone(), config);
        let orders = OrderService::new(store.clone());
        let reservations = ReservationService::new(store.clone(), config);
        Self {
            store,
            catalog,
            orders,
            reservations,
            confirm,
            active_tab: AdminTab::default(),
            dish_modal_open: false,
            editing_dish: None,
            dish_form: DishForm::default(),
            category_modal_open: false,
            editing_category: None,
            category_form: CategoryForm::default(),
        }
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    // ========== Dashboard ==========

    /// Headline stats, recomputed from the live collections
    pub fn stats(&self) -> DashboardStats {
        dashboard_stats(&self.store)
    }

    // ========== Listings ==========

    pub fn dishes(&self) -> Vec<Dish> {
        self.store.dishes.list()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.store.categories.list()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.store.orders.list()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.store.reservations.list()
    }

    /// Icon choices for the category editor
    pub fn icon_options(&self) -> &'static [CategoryIcon] {
        &CategoryIcon::ALL
    }

    // ========== Dish editor ==========

    /// Open the dish modal with an empty form (add mode)
    pub fn open_dish_modal(&mut self) {
        self.editing_dish = None;
        self.dish_form = DishForm::default();
        self.dish_modal_open = true;
    }

    /// Open the dish modal preloaded with an existing dish (edit mode)
    pub fn edit_dish(&mut self, id: i64) -> AppResult<()> {
        let dish = self.store.get_dish(id)?;
        self.editing_dish = Some(id);
        self.dish_form = DishForm::from_dish(&dish);
        self.dish_modal_open = true;
        Ok(())
    }

    /// Save the dish form: creates in add mode, updates in edit mode
    ///
    /// The modal closes only on success so the visitor can correct a
    /// rejected form.
    pub fn save_dish(&mut self) -> AppResult<Dish> {
        let dish = match self.editing_dish {
            None => self.catalog.create_dish(DishCreate {
                name: self.dish_form.name.clone(),
                category: self.dish_form.category.clone(),
                description: self.dish_form.description.clone(),
                price: self.dish_form.price,
                image: self.dish_form.image_opt(),
            })?,
            Some(id) => self.catalog.update_dish(
                id,
                DishUpdate {
                    name: Some(self.dish_form.name.clone()),
                    category: Some(self.dish_form.category.clone()),
                    description: Some(self.dish_form.description.clone()),
                    price: Some(self.dish_form.price),
                    image: self.dish_form.image_opt(),
                },
            )?,
        };
        self.close_dish_modal();
        Ok(dish)
    }

    pub fn close_dish_modal(&mut self) {
        self.dish_modal_open = false;
        self.editing_dish = None;
        self.dish_form = DishForm::default();
    }

    /// Delete a dish after confirmation; `Ok(false)` means declined
    pub fn delete_dish(&mut self, id: i64) -> AppResult<bool> {
        if !(self.confirm)("Supprimer ce plat ?") {
            debug!(dish_id = id, "Dish delete declined");
            return Ok(false);
        }
        self.catalog.delete_dish(id)?;
        Ok(true)
    }

    // ========== Category editor ==========

    pub fn open_category_modal(&mut self) {
        self.editing_category = None;
        self.category_form = CategoryForm::default();
        self.category_modal_open = true;
    }

    pub fn edit_category(&mut self, id: i64) -> AppResult<()> {
        let category = self.store.get_category(id)?;
        self.editing_category = Some(id);
        self.category_form = CategoryForm::from_category(&category);
        self.category_modal_open = true;
        Ok(())
    }

    /// Save the category form: creates in add mode, updates in edit mode
    pub fn save_category(&mut self) -> AppResult<Category> {
        let category = match self.editing_category {
            None => self.catalog.create_category(CategoryCreate {
                name: self.category_form.name.clone(),
                icon: Some(self.category_form.icon),
            })?,
            Some(id) => self.catalog.update_category(
                id,
                CategoryUpdate {
                    name: Some(self.category_form.name.clone()),
                    icon: Some(self.category_form.icon),
                },
            )?,
        };
        self.close_category_modal();
        Ok(category)
    }

    pub fn close_category_modal(&mut self) {
        self.category_modal_open = false;
        self.editing_category = None;
        self.category_form = CategoryForm::default();
    }

    /// Delete a category after confirmation; `Ok(false)` means declined
    pub fn delete_category(&mut self, id: i64) -> AppResult<bool> {
        if !(self.confirm)("Supprimer cette catégorie ?") {
            debug!(category_id = id, "Category delete declined");
            return Ok(false);
        }
        self.catalog.delete_category(id)?;
        Ok(true)
    }

    // ========== Orders & reservations ==========

    pub fn update_order_status(&self, id: i64, status: OrderStatus) -> AppResult<Order> {
        self.orders.update_status(id, status)
    }

    /// Delete an order after confirmation; `Ok(false)` means declined
    pub fn delete_order(&mut self, id: i64) -> AppResult<bool> {
        if !(self.confirm)("Supprimer cette commande ?") {
            return Ok(false);
        }
        self.orders.delete(id)?;
        Ok(true)
    }

    pub fn update_reservation_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        self.reservations.update_status(id, status)
    }

    /// Delete a reservation after confirmation; `Ok(false)` means declined
    pub fn delete_reservation(&mut self, id: i64) -> AppResult<bool> {
        if !(self.confirm)("Supprimer cette réservation ?") {
            return Ok(false);
        }
        self.reservations.delete(id)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn page() -> AdminPage {
        let store = Arc::new(RestaurantStore::default());
        AdminPage::new(store, &Config::with_overrides(20, 99))
    }

    fn page_declining() -> AdminPage {
        let store = Arc::new(RestaurantStore::default());
        AdminPage::with_confirm(
            store,
            &Config::with_overrides(20, 99),
            Box::new(|_| false),
        )
    }

    fn add_category(page: &mut AdminPage, name: &str) -> Category {
        page.open_category_modal();
        page.category_form.name = name.into();
        page.category_form.icon = CategoryIcon::EggFried;
        page.save_category().unwrap()
    }

    fn add_dish(page: &mut AdminPage, name: &str, category: &str) -> Dish {
        page.open_dish_modal();
        page.dish_form.name = name.into();
        page.dish_form.category = category.into();
        page.dish_form.description = "Fait maison".into();
        page.dish_form.price = Decimal::from(14);
        page.save_dish().unwrap()
    }

    #[test]
    fn test_add_flow_closes_modal_and_resets() {
        let mut page = page();
        add_category(&mut page, "Plats");
        let dish = add_dish(&mut page, "Cassoulet", "Plats");

        assert!(!page.dish_modal_open);
        assert!(page.dish_form.name.is_empty());
        assert!(dish.id > 0);
        // Empty image field picked up the default
        assert!(!dish.image.is_empty());
    }

    #[test]
    fn test_edit_flow_preloads_and_updates() {
        let mut page = page();
        add_category(&mut page, "Plats");
        let dish = add_dish(&mut page, "Cassoulet", "Plats");

        page.edit_dish(dish.id).unwrap();
        assert_eq!(page.editing_dish, Some(dish.id));
        assert_eq!(page.dish_form.name, "Cassoulet");

        page.dish_form.price = Decimal::from(16);
        let updated = page.save_dish().unwrap();
        assert_eq!(updated.id, dish.id);
        assert_eq!(updated.price, Decimal::from(16));
        assert_eq!(page.dishes().len(), 1);
    }

    #[test]
    fn test_failed_save_keeps_modal_open() {
        let mut page = page();
        add_category(&mut page, "Plats");

        page.open_dish_modal();
        page.dish_form.name = "Cassoulet".into();
        page.dish_form.category = "Inconnue".into();
        page.dish_form.description = "x".into();

        assert!(page.save_dish().is_err());
        assert!(page.dish_modal_open);
        assert_eq!(page.dish_form.name, "Cassoulet");
    }

    #[test]
    fn test_declined_confirmation_blocks_delete() {
        let mut page = page_declining();
        add_category(&mut page, "Plats");
        let dish = add_dish(&mut page, "Cassoulet", "Plats");

        assert_eq!(page.delete_dish(dish.id).unwrap(), false);
        assert_eq!(page.dishes().len(), 1);
    }

    #[test]
    fn test_confirmed_delete_removes() {
        let mut page = page();
        add_category(&mut page, "Plats");
        let dish = add_dish(&mut page, "Cassoulet", "Plats");

        assert!(page.delete_dish(dish.id).unwrap());
        assert!(page.dishes().is_empty());
        assert_eq!(
            page.delete_dish(dish.id).unwrap_err().code,
            ErrorCode::DishNotFound
        );
    }

    #[test]
    fn test_category_edit_and_guarded_delete() {
        let mut page = page();
        let cat = add_category(&mut page, "Plats");
        add_dish(&mut page, "Cassoulet", "Plats");

        page.edit_category(cat.id).unwrap();
        page.category_form.name = "Plats mijotés".into();
        page.save_category().unwrap();
        assert_eq!(page.dishes()[0].category, "Plats mijotés");

        assert_eq!(
            page.delete_category(cat.id).unwrap_err().code,
            ErrorCode::CategoryHasDishes
        );
    }

    #[test]
    fn test_icon_options() {
        let page = page();
        assert_eq!(page.icon_options().len(), 8);
    }
}
