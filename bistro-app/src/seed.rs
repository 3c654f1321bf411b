//! Demo menu
//!
//! Starter catalog loaded at startup so the app is browsable out of the box.

use rust_decimal::Decimal;
use shared::models::{CategoryCreate, CategoryIcon, DishCreate};
use shared::AppResult;
use tracing::info;

use crate::services::CatalogService;

/// Load the demo categories and dishes
pub fn load_demo_menu(catalog: &CatalogService) -> AppResult<()> {
    for (name, icon) in [
        ("Entrées", CategoryIcon::EggFried),
        ("Plats", CategoryIcon::Basket),
        ("Desserts", CategoryIcon::Cake),
        ("Boissons", CategoryIcon::CupStraw),
    ] {
        catalog.create_category(CategoryCreate {
            name: name.into(),
            icon: Some(icon),
        })?;
    }

    let dishes: [(&str, &str, &str, &str); 8] = [
        (
            "Salade Niçoise",
            "Entrées",
            "Salade fraîche avec thon, olives et œufs",
            "9.50",
        ),
        (
            "Soupe à l'Oignon",
            "Entrées",
            "Soupe gratinée au fromage",
            "7.00",
        ),
        (
            "Bœuf Bourguignon",
            "Plats",
            "Bœuf mijoté au vin rouge avec légumes",
            "18.50",
        ),
        (
            "Ratatouille",
            "Plats",
            "Légumes du soleil mijotés à la provençale",
            "14.00",
        ),
        (
            "Magret de Canard",
            "Plats",
            "Magret rôti, sauce au miel",
            "21.00",
        ),
        (
            "Crème Brûlée",
            "Desserts",
            "Crème vanillée caramélisée",
            "6.50",
        ),
        (
            "Tarte Tatin",
            "Desserts",
            "Tarte aux pommes caramélisées",
            "7.00",
        ),
        (
            "Citronnade Maison",
            "Boissons",
            "Citron pressé, menthe fraîche",
            "4.50",
        ),
    ];

    for (name, category, description, price) in dishes {
        catalog.create_dish(DishCreate {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            price: price.parse::<Decimal>().unwrap_or_default(),
            image: None,
        })?;
    }

    info!("Demo menu loaded");
    Ok(())
}
