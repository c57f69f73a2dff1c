//! Display sync: projection of cart state into view data.

use serde::Serialize;
use std::sync::Mutex;
use tiffin_commerce::cart::{Cart, CartObserver};
use tiffin_commerce::money::Money;

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineView {
    /// Dish name.
    pub name: String,
    /// Quantity on the line.
    pub quantity: i64,
    /// Formatted unit price (e.g., "₹250").
    pub unit_price: String,
}

impl LineView {
    /// The "2 × ₹250" column shown next to the name.
    pub fn quantity_label(&self) -> String {
        format!("{} \u{00d7} {}", self.quantity, self.unit_price)
    }
}

/// The three UI surfaces the cart projects into: badge count, itemized
/// lines, and the formatted total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    /// Item-count badge text.
    pub badge: String,
    /// One view per cart line, in cart order.
    pub lines: Vec<LineView>,
    /// Formatted total line (e.g., "Total: ₹750").
    pub total: String,
}

impl CartView {
    /// Project a cart into view data.
    ///
    /// Pure and idempotent: the same cart state always yields the same
    /// view. A total that cannot be computed degrades to zero rather
    /// than failing the projection.
    pub fn project(cart: &Cart) -> Self {
        let total = cart.total().unwrap_or_else(|e| {
            tracing::error!(error = %e, "cart total unavailable, rendering zero");
            Money::zero(cart.currency)
        });

        Self {
            badge: cart.total_items().to_string(),
            lines: cart
                .lines()
                .iter()
                .map(|line| LineView {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price.display(),
                })
                .collect(),
            total: format!("Total: {}", total.display()),
        }
    }

    /// View of an empty cart.
    pub fn empty(cart: &Cart) -> Self {
        Self {
            badge: "0".to_string(),
            lines: Vec::new(),
            total: format!("Total: {}", Money::zero(cart.currency).display()),
        }
    }
}

/// Cart observer that keeps the latest projected view.
///
/// Registered on the [`tiffin_commerce::cart::CartStore`]; every store
/// mutation replaces the cached view, which rendering layers read on
/// their own schedule.
pub struct DisplaySync {
    view: Mutex<CartView>,
}

impl DisplaySync {
    /// Create a sync seeded with an empty-cart view.
    pub fn new(cart: &Cart) -> Self {
        Self {
            view: Mutex::new(CartView::empty(cart)),
        }
    }

    /// The most recently projected view.
    pub fn view(&self) -> CartView {
        self.view.lock().expect("cart view lock").clone()
    }
}

impl CartObserver for DisplaySync {
    fn on_change(&self, cart: &Cart) {
        let projected = CartView::project(cart);
        *self.view.lock().expect("cart view lock") = projected;
    }
}
