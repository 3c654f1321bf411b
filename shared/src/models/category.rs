//! Category Model

use serde::{Deserialize, Serialize};

/// Display icon token for a category
///
/// The fixed set of Bootstrap-icon tokens the admin panel offers; serialized
/// as the raw icon token (e.g. `"bi-egg-fried"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryIcon {
    #[serde(rename = "bi-egg-fried")]
    EggFried,
    #[serde(rename = "bi-cup-hot")]
    CupHot,
    #[serde(rename = "bi-cake2")]
    Cake,
    #[serde(rename = "bi-cup-straw")]
    CupStraw,
    #[serde(rename = "bi-fish")]
    Fish,
    #[serde(rename = "bi-basket")]
    Basket,
    #[serde(rename = "bi-emoji-smile")]
    EmojiSmile,
    #[default]
    #[serde(rename = "bi-tag")]
    Tag,
}

impl CategoryIcon {
    /// All selectable icons, in the order the admin panel offers them
    pub const ALL: [CategoryIcon; 8] = [
        CategoryIcon::EggFried,
        CategoryIcon::CupHot,
        CategoryIcon::Cake,
        CategoryIcon::CupStraw,
        CategoryIcon::Fish,
        CategoryIcon::Basket,
        CategoryIcon::EmojiSmile,
        CategoryIcon::Tag,
    ];

    /// The raw icon token
    pub const fn token(&self) -> &'static str {
        match self {
            CategoryIcon::EggFried => "bi-egg-fried",
            CategoryIcon::CupHot => "bi-cup-hot",
            CategoryIcon::Cake => "bi-cake2",
            CategoryIcon::CupStraw => "bi-cup-straw",
            CategoryIcon::Fish => "bi-fish",
            CategoryIcon::Basket => "bi-basket",
            CategoryIcon::EmojiSmile => "bi-emoji-smile",
            CategoryIcon::Tag => "bi-tag",
        }
    }

    /// Parse an icon token back into the enum
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.token() == token)
    }
}

impl std::fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Category entity
///
/// `name` is unique and used as the foreign key by [`crate::models::Dish`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: CategoryIcon,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub icon: Option<CategoryIcon>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub icon: Option<CategoryIcon>,
}
