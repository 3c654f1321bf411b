//! Home page
//!
//! Static landing content; the three feature tiles under the hero banner.

/// One landing-page feature tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub button_text: &'static str,
}

/// The landing-page tiles, in display order
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "bi-book-half",
        title: "Notre Menu",
        description: "Découvrez nos plats délicieux",
        link: "/menu",
        button_text: "Voir le Menu",
    },
    Feature {
        icon: "bi-cart-check",
        title: "Commander",
        description: "Passez votre commande en ligne",
        link: "/order",
        button_text: "Commander",
    },
    Feature {
        icon: "bi-calendar-event",
        title: "Réserver",
        description: "Réservez votre table",
        link: "/reservation",
        button_text: "Réserver",
    },
];

/// Landing page state (static content only)
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl HomePage {
    pub fn features(&self) -> &'static [Feature] {
        &FEATURES
    }
}
