//! Catalog management
//!
//! Dish and category CRUD with the cross-entity rules: category names are
//! unique, renaming a category follows through to its dishes, and a category
//! cannot be deleted while dishes still reference it.

use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{Category, CategoryCreate, CategoryUpdate, Dish, DishCreate, DishUpdate};
use shared::AppResult;
use tracing::info;

use crate::core::Config;
use crate::store::RestaurantStore;
use crate::utils::validation::{
    validate_optional_text, validate_price, validate_required_text, MAX_DESCRIPTION_LEN,
    MAX_NAME_LEN, MAX_URL_LEN,
};

/// Dish and category operations
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<RestaurantStore>,
    default_dish_image: String,
}

impl CatalogService {
    pub fn new(store: Arc<RestaurantStore>, config: &Config) -> Self {
        Self {
            store,
            default_dish_image: config.default_dish_image.clone(),
        }
    }

    // ========== Dishes ==========

    /// Create a dish
    ///
    /// The category must already exist; a missing image falls back to the
    /// configured default.
    pub fn create_dish(&self, payload: DishCreate) -> AppResult<Dish> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
        validate_price(payload.price)?;
        self.require_category(&payload.category)?;

        let dish = self.store.insert_dish(Dish {
            id: 0,
            name: payload.name,
            category: payload.category,
            description: payload.description,
            price: payload.price,
            image: payload
                .image
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| self.default_dish_image.clone()),
        });
        info!(dish_id = dish.id, name = %dish.name, "Dish created");
        Ok(dish)
    }

    /// Apply a partial update to a dish
    pub fn update_dish(&self, id: i64, payload: DishUpdate) -> AppResult<Dish> {
        if let Some(name) = &payload.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        if let Some(description) = &payload.description {
            validate_required_text(description, "description", MAX_DESCRIPTION_LEN)?;
        }
        validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
        if let Some(price) = payload.price {
            validate_price(price)?;
        }
        if let Some(category) = &payload.category {
            self.require_category(category)?;
        }

        let mut dish = self.store.get_dish(id)?;
        dish.apply(payload);
        self.store.update_dish(dish)
    }

    pub fn delete_dish(&self, id: i64) -> AppResult<Dish> {
        let dish = self.store.remove_dish(id)?;
        info!(dish_id = id, name = %dish.name, "Dish deleted");
        Ok(dish)
    }

    // ========== Categories ==========

    /// Create a category with a unique name
    pub fn create_category(&self, payload: CategoryCreate) -> AppResult<Category> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        if self.store.find_category_by_name(&payload.name).is_some() {
            return Err(AppError::with_message(
                ErrorCode::CategoryNameExists,
                format!("Category '{}' already exists", payload.name),
            ));
        }

        let category = self.store.insert_category(Category {
            id: 0,
            name: payload.name,
            icon: payload.icon.unwrap_or_default(),
        });
        info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Apply a partial update to a category
    ///
    /// Renaming updates the category reference on every dish that belongs to
    /// it.
    pub fn update_category(&self, id: i64, payload: CategoryUpdate) -> AppResult<Category> {
        let current = self.store.get_category(id)?;

        if let Some(name) = &payload.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
            let taken = self
                .store
                .find_category_by_name(name)
                .is_some_and(|c| c.id != id);
            if taken {
                return Err(AppError::with_message(
                    ErrorCode::CategoryNameExists,
                    format!("Category '{name}' already exists"),
                ));
            }
        }

        let mut category = current.clone();
        if let Some(name) = payload.name {
            category.name = name;
        }
        if let Some(icon) = payload.icon {
            category.icon = icon;
        }
        let category = self.store.update_category(category)?;

        if category.name != current.name {
            for dish in self.store.dishes.list() {
                if dish.category == current.name {
                    let mut dish = dish;
                    dish.category = category.name.clone();
                    self.store.update_dish(dish)?;
                }
            }
            info!(
                category_id = id,
                from = %current.name,
                to = %category.name,
                "Category renamed, dishes followed"
            );
        }
        Ok(category)
    }

    /// Delete a category
    ///
    /// Refused while any dish still references it.
    pub fn delete_category(&self, id: i64) -> AppResult<Category> {
        let category = self.store.get_category(id)?;
        let in_use = self
            .store
            .dishes
            .list()
            .iter()
            .any(|d| d.category == category.name);
        if in_use {
            return Err(AppError::with_message(
                ErrorCode::CategoryHasDishes,
                format!("Cannot delete category '{}' with active dishes", category.name),
            ));
        }
        let category = self.store.remove_category(id)?;
        info!(category_id = id, name = %category.name, "Category deleted");
        Ok(category)
    }

    fn require_category(&self, name: &str) -> AppResult<()> {
        if self.store.find_category_by_name(name).is_none() {
            return Err(AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category '{name}' does not exist"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::CategoryIcon;

    fn service() -> CatalogService {
        let store = Arc::new(RestaurantStore::default());
        CatalogService::new(store, &Config::with_overrides(20, 99))
    }

    fn dish_payload(name: &str, category: &str) -> DishCreate {
        DishCreate {
            name: name.into(),
            category: category.into(),
            description: "Fait maison".into(),
            price: Decimal::from(12),
            image: None,
        }
    }

    #[test]
    fn test_create_dish_fills_default_image() {
        let svc = service();
        svc.create_category(CategoryCreate {
            name: "Plats".into(),
            icon: None,
        })
        .unwrap();

        let dish = svc.create_dish(dish_payload("Ratatouille", "Plats")).unwrap();
        assert!(!dish.image.is_empty());
        assert!(dish.id > 0);
    }

    #[test]
    fn test_create_dish_requires_existing_category() {
        let svc = service();
        let err = svc
            .create_dish(dish_payload("Ratatouille", "Inconnue"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[test]
    fn test_negative_price_rejected() {
        let svc = service();
        svc.create_category(CategoryCreate {
            name: "Plats".into(),
            icon: None,
        })
        .unwrap();
        let mut payload = dish_payload("Soupe", "Plats");
        payload.price = Decimal::from(-3);
        assert_eq!(
            svc.create_dish(payload).unwrap_err().code,
            ErrorCode::DishInvalidPrice
        );
    }

    #[test]
    fn test_duplicate_category_name_rejected() {
        let svc = service();
        svc.create_category(CategoryCreate {
            name: "Desserts".into(),
            icon: Some(CategoryIcon::Cake),
        })
        .unwrap();
        let err = svc
            .create_category(CategoryCreate {
                name: "Desserts".into(),
                icon: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryNameExists);
    }

    #[test]
    fn test_rename_category_cascades_to_dishes() {
        let svc = service();
        let cat = svc
            .create_category(CategoryCreate {
                name: "Plats".into(),
                icon: None,
            })
            .unwrap();
        let dish = svc.create_dish(dish_payload("Ratatouille", "Plats")).unwrap();

        svc.update_category(
            cat.id,
            CategoryUpdate {
                name: Some("Plats du jour".into()),
                icon: None,
            },
        )
        .unwrap();

        let dish = svc.store.get_dish(dish.id).unwrap();
        assert_eq!(dish.category, "Plats du jour");
    }

    #[test]
    fn test_delete_category_with_dishes_refused() {
        let svc = service();
        let cat = svc
            .create_category(CategoryCreate {
                name: "Plats".into(),
                icon: None,
            })
            .unwrap();
        let dish = svc.create_dish(dish_payload("Ratatouille", "Plats")).unwrap();

        assert_eq!(
            svc.delete_category(cat.id).unwrap_err().code,
            ErrorCode::CategoryHasDishes
        );

        svc.delete_dish(dish.id).unwrap();
        assert!(svc.delete_category(cat.id).is_ok());
    }
}
