//! Menu catalog types.

use crate::error::CommerceError;
use crate::ids::DishId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Availability of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DishStatus {
    /// Orderable today.
    #[default]
    Available,
    /// Shown on the menu but not orderable.
    SoldOut,
    /// Hidden from the menu.
    Retired,
}

/// A dish on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    /// Unique dish identifier.
    pub id: DishId,
    /// Display name (the cart's line key).
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Short description for the card.
    pub description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Image URL, loaded lazily by the page.
    pub image_url: Option<String>,
    /// Home-kitchen category (e.g., "mains", "snacks").
    pub category: Option<String>,
    /// Availability status.
    pub status: DishStatus,
}

impl Dish {
    /// Create an available dish with the minimum fields.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, price: Money) -> Self {
        Self {
            id: DishId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            price,
            image_url: None,
            category: None,
            status: DishStatus::Available,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether the dish can be added to a cart.
    pub fn is_orderable(&self) -> bool {
        self.status == DishStatus::Available
    }
}

/// The storefront menu.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Menu {
    /// All dishes, in display order.
    pub dishes: Vec<Dish>,
}

impl Menu {
    /// Create a menu from a list of dishes.
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// Look up a dish by display name.
    pub fn by_name(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.name == name)
    }

    /// Look up a dish by slug.
    pub fn by_slug(&self, slug: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.slug == slug)
    }

    /// Look up a dish by name, as an error-carrying operation.
    pub fn require(&self, name: &str) -> Result<&Dish, CommerceError> {
        self.by_name(name)
            .ok_or_else(|| CommerceError::DishNotFound(name.to_string()))
    }

    /// Dishes shown in the popular carousel (orderable entries only).
    pub fn popular(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter().filter(|d| d.is_orderable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_menu() -> Menu {
        Menu::new(vec![
            Dish::new("Biryani", "biryani", Money::new(250, Currency::INR)),
            Dish::new("Masala Dosa", "masala-dosa", Money::new(80, Currency::INR)),
        ])
    }

    #[test]
    fn test_lookup_by_name() {
        let menu = sample_menu();
        assert_eq!(menu.by_name("Biryani").unwrap().slug, "biryani");
        assert!(menu.by_name("Pizza").is_none());
    }

    #[test]
    fn test_require_unknown_dish() {
        let menu = sample_menu();
        assert!(matches!(
            menu.require("Pizza"),
            Err(CommerceError::DishNotFound(_))
        ));
    }

    #[test]
    fn test_popular_excludes_sold_out() {
        let mut menu = sample_menu();
        menu.dishes[1].status = DishStatus::SoldOut;
        let popular: Vec<_> = menu.popular().map(|d| d.name.as_str()).collect();
        assert_eq!(popular, vec!["Biryani"]);
    }
}
