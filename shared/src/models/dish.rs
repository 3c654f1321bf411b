//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dish entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Category reference (`Category.name`, required)
    pub category: String,
    pub description: String,
    /// Unit price, non-negative
    pub price: Decimal,
    /// Image URL
    pub image: String,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    /// Falls back to the configured default image when empty
    pub image: Option<String>,
}

/// Update dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
}

impl Dish {
    /// Apply a partial update in place
    pub fn apply(&mut self, update: DishUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
    }
}
