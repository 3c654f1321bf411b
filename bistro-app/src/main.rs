use std::sync::Arc;

use bistro_app::{
    dashboard_stats, init_logger, load_demo_menu, CatalogService, Config, RestaurantStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    tracing::info!("Bistro App starting...");

    let config = Config::from_env();
    let store = Arc::new(RestaurantStore::new(config.max_cart_quantity));

    let catalog = CatalogService::new(store.clone(), &config);
    load_demo_menu(&catalog)?;

    let stats = dashboard_stats(&store);
    tracing::info!(
        dishes = store.dishes.len(),
        categories = store.categories.len(),
        revenue = %stats.total_revenue,
        "Store ready"
    );

    Ok(())
}
