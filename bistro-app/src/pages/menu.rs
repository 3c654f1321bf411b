//! Menu page
//!
//! Category filter, free-text search, and add-to-cart with a short
//! per-dish "added" flash.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use shared::models::{Category, Dish};
use shared::AppResult;
use tokio::sync::watch;
use tracing::debug;

use crate::store::RestaurantStore;

/// Category filter value for "show everything"
pub const ALL_CATEGORIES: &str = "all";

const DEFAULT_FLASH: Duration = Duration::from_millis(1500);

/// Menu browsing state
pub struct MenuPage {
    store: Arc<RestaurantStore>,
    dishes_rx: watch::Receiver<Vec<Dish>>,
    categories_rx: watch::Receiver<Vec<Category>>,
    /// Either [`ALL_CATEGORIES`] or a category name
    pub selected_category: String,
    pub search_query: String,
    added_flags: Arc<DashMap<i64, ()>>,
    flash_duration: Duration,
}

impl MenuPage {
    pub fn new(store: Arc<RestaurantStore>) -> Self {
        let dishes_rx = store.dishes.subscribe();
        let categories_rx = store.categories.subscribe();
        Self {
            store,
            dishes_rx,
            categories_rx,
            selected_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
            added_flags: Arc::new(DashMap::new()),
            flash_duration: DEFAULT_FLASH,
        }
    }

    /// Shorten (or lengthen) the added-flash duration; used in tests
    pub fn with_flash_duration(mut self, duration: Duration) -> Self {
        self.flash_duration = duration;
        self
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// All categories for the filter bar
    pub fn categories(&self) -> Vec<Category> {
        self.categories_rx.borrow().clone()
    }

    /// Dishes matching the selected category and the search text
    ///
    /// Search is case-insensitive over name and description; both filters
    /// combine.
    pub fn filtered_dishes(&self) -> Vec<Dish> {
        let query = self.search_query.trim().to_lowercase();
        self.dishes_rx
            .borrow()
            .iter()
            .filter(|d| {
                self.selected_category == ALL_CATEGORIES || d.category == self.selected_category
            })
            .filter(|d| {
                query.is_empty()
                    || d.name.to_lowercase().contains(&query)
                    || d.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Add one unit of a dish to the cart and flash the dish as added
    ///
    /// The flash flag clears itself after the flash duration. Must be called
    /// from within a Tokio runtime.
    pub fn add_to_cart(&self, dish_id: i64) -> AppResult<()> {
        self.store.add_to_cart(dish_id)?;
        debug!(dish_id, "Added to cart from menu");

        self.added_flags.insert(dish_id, ());
        let flags = Arc::clone(&self.added_flags);
        let duration = self.flash_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            flags.remove(&dish_id);
        });
        Ok(())
    }

    /// Whether the dish was added to the cart within the last flash window
    pub fn is_added_to_cart(&self, dish_id: i64) -> bool {
        self.added_flags.contains_key(&dish_id)
    }
}
