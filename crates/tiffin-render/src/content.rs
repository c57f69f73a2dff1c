//! Page content models with editorial defaults.

use serde::{Deserialize, Serialize};
use tiffin_commerce::menu::{Dish, Menu};
use tiffin_commerce::money::{Currency, Money};

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub search_placeholder: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Ghar ka khana, delivered".to_string(),
            subheadline: "Authentic home-cooked meals from kitchens in your neighbourhood"
                .to_string(),
            search_placeholder: "Search for biryani, dosa, thali...".to_string(),
        }
    }
}

/// Contact section content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub heading: String,
    pub blurb: String,
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            heading: "Get in touch".to_string(),
            blurb: "Questions, feedback, or a kitchen to recommend? We reply within 48 hours."
                .to_string(),
        }
    }
}

/// Kitchen-tour video content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoContent {
    pub src: String,
    pub poster: Option<String>,
}

impl Default for VideoContent {
    fn default() -> Self {
        Self {
            src: "/media/kitchen-tour.mp4".to_string(),
            poster: Some("/media/kitchen-tour-poster.jpg".to_string()),
        }
    }
}

/// Full landing page content.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PageContent {
    #[serde(default)]
    pub hero: HeroContent,
    #[serde(default = "default_menu")]
    pub menu: Menu,
    #[serde(default)]
    pub contact: ContactContent,
    #[serde(default)]
    pub video: VideoContent,
}

impl PageContent {
    /// Content with the house menu.
    pub fn with_default_menu() -> Self {
        Self {
            menu: default_menu(),
            ..Default::default()
        }
    }
}

fn inr(amount: i64) -> Money {
    Money::new(amount, Currency::INR)
}

/// The house menu shown in the popular carousel.
pub fn default_menu() -> Menu {
    Menu::new(vec![
        Dish::new("Biryani", "biryani", inr(250))
            .with_description("Slow-cooked basmati with saffron and whole spices")
            .with_image("/img/dishes/biryani.jpg")
            .with_category("mains"),
        Dish::new("Masala Dosa", "masala-dosa", inr(80))
            .with_description("Crisp fermented crepe with spiced potato filling")
            .with_image("/img/dishes/masala-dosa.jpg")
            .with_category("south-indian"),
        Dish::new("Chole Bhature", "chole-bhature", inr(120))
            .with_description("Chickpea curry with fluffy fried bread")
            .with_image("/img/dishes/chole-bhature.jpg")
            .with_category("mains"),
        Dish::new("Rajma Chawal", "rajma-chawal", inr(150))
            .with_description("Kidney bean curry over steamed rice, just like home")
            .with_image("/img/dishes/rajma-chawal.jpg")
            .with_category("mains"),
        Dish::new("Paneer Thali", "paneer-thali", inr(180))
            .with_description("Paneer curry, dal, roti, rice, and salad on one plate")
            .with_image("/img/dishes/paneer-thali.jpg")
            .with_category("thalis"),
        Dish::new("Gulab Jamun", "gulab-jamun", inr(60))
            .with_description("Warm milk dumplings in cardamom syrup")
            .with_image("/img/dishes/gulab-jamun.jpg")
            .with_category("desserts"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_is_orderable() {
        let menu = default_menu();
        assert_eq!(menu.popular().count(), 6);
        assert_eq!(menu.by_name("Biryani").unwrap().price, inr(250));
    }
}
