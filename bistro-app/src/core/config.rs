/// Application configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / staging / production |
/// | DEFAULT_DISH_IMAGE | (stock photo URL) | image for dishes created without one |
/// | MAX_PARTY_SIZE | 20 | reservation party-size cap |
/// | MAX_CART_QUANTITY | 99 | per-line cart quantity cap |
#[derive(Debug, Clone)]
pub struct Config {
    /// Running environment: development | staging | production
    pub environment: String,
    /// Image URL assigned to dishes created without one
    pub default_dish_image: String,
    /// Largest bookable party size
    pub max_party_size: u32,
    /// Largest quantity a single cart line may hold
    pub max_cart_quantity: u32,
}

const DEFAULT_DISH_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400";

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            default_dish_image: std::env::var("DEFAULT_DISH_IMAGE")
                .unwrap_or_else(|_| DEFAULT_DISH_IMAGE.into()),
            max_party_size: std::env::var("MAX_PARTY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            max_cart_quantity: std::env::var("MAX_CART_QUANTITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(99),
        }
    }

    /// Override selected settings
    ///
    /// Mostly used in tests.
    pub fn with_overrides(max_party_size: u32, max_cart_quantity: u32) -> Self {
        let mut config = Self::from_env();
        config.max_party_size = max_party_size;
        config.max_cart_quantity = max_cart_quantity;
        config
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
