//! Commerce domain types and logic for the TiffinTales storefront.
//!
//! This crate provides the headless core of the home-food storefront:
//!
//! - **Money**: integer amounts in the smallest currency unit
//! - **Menu**: the dish catalog shown on the landing page
//! - **Cart**: line items keyed by dish name, with an observer contract
//!   so rendering layers can project state without the store knowing
//!   anything about them
//! - **Requests**: dish-request and contact-message records
//!
//! # Example
//!
//! ```
//! use tiffin_commerce::prelude::*;
//!
//! let mut store = CartStore::new(Currency::INR);
//! store.add("Biryani", Money::new(250, Currency::INR), 1).unwrap();
//! store.add("Biryani", Money::new(250, Currency::INR), 2).unwrap();
//!
//! assert_eq!(store.cart().total_items(), 3);
//! assert_eq!(store.cart().total().unwrap(), Money::new(750, Currency::INR));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod menu;
pub mod request;

pub use cart::{Cart, CartLine, CartObserver, CartStore, MAX_QUANTITY_PER_LINE};
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartLine, CartObserver, CartStore, MAX_QUANTITY_PER_LINE};
    pub use crate::error::CommerceError;
    pub use crate::ids::{DishId, TicketId};
    pub use crate::menu::{Dish, DishStatus, Menu};
    pub use crate::money::{Currency, Money};
    pub use crate::request::{ContactMessage, DishRequest, SubmitReceipt, GENERAL_REQUEST};
}
