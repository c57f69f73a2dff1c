//! Cart and line item types.
//!
//! The cart keys line items by dish name: adding a name that is already
//! present increments its quantity instead of creating a duplicate line.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Maximum quantity allowed per line item.
///
/// Matches the quantity stepper's upper clamp so the invariant holds at
/// both layers.
pub const MAX_QUANTITY_PER_LINE: i64 = 99;

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Dish name (unique key within the cart).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,
    /// Line total (unit_price * quantity).
    pub line_total: Money,
}

impl CartLine {
    fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Result<Self, CommerceError> {
        let line_total = unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            name: name.into(),
            unit_price,
            quantity,
            line_total,
        })
    }

    /// Recompute the line total from the current quantity.
    fn update_total(&mut self) -> Result<(), CommerceError> {
        self.line_total = self
            .unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }
}

/// An in-memory shopping cart.
///
/// Page-lifetime state: there is no persistence, the cart resets with the
/// process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add a dish to the cart, inserting a line or incrementing an
    /// existing one.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - Unit price is negative or in the wrong currency
    /// - The line would exceed MAX_QUANTITY_PER_LINE
    /// - Arithmetic overflow would occur
    pub fn add(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if unit_price.is_negative() {
            return Err(CommerceError::InvalidPrice(unit_price.amount));
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        let name = name.into();

        if let Some(existing) = self.items.iter_mut().find(|l| l.name == name) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }

            existing.quantity = new_quantity;
            existing.update_total()?;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        self.items.push(CartLine::new(name, unit_price, quantity)?);
        Ok(())
    }

    /// Remove a line by dish name.
    ///
    /// Returns true if a line was removed; absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|l| l.name != name);
        self.items.len() < len_before
    }

    /// Update a line's quantity.
    ///
    /// Delegates to `remove` if quantity is <= 0. Absent names are a
    /// no-op and never create a line. Returns true if the cart changed.
    pub fn update_quantity(&mut self, name: &str, quantity: i64) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(name));
        }

        if quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        if let Some(line) = self.items.iter_mut().find(|l| l.name == name) {
            line.quantity = quantity;
            line.update_total()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit_price * quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.items.iter().map(|l| &l.line_total), self.currency)
            .ok_or(CommerceError::Overflow)
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by dish name.
    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.items.iter().find(|l| l.name == name)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::INR)
    }
}

/// Observer notified after every successful cart mutation.
pub trait CartObserver: Send + Sync {
    /// Called with the cart's new state.
    fn on_change(&self, cart: &Cart);
}

/// The cart plus its change subscribers.
///
/// Mutation is separated from rendering: the store mutates the inner
/// [`Cart`] and then synchronously notifies every observer. There is no
/// batching or debouncing, and no-op mutations do not notify.
pub struct CartStore {
    cart: Cart,
    observers: Vec<Arc<dyn CartObserver>>,
}

impl CartStore {
    /// Create a new store with an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            observers: Vec::new(),
        }
    }

    /// Register an observer. It is not called until the next mutation;
    /// use [`CartStore::sync`] for an initial projection.
    pub fn subscribe(&mut self, observer: Arc<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a dish; notifies observers on success.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        self.cart.add(name, unit_price, quantity)?;
        self.notify();
        Ok(())
    }

    /// Remove a line; notifies observers only if a line was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.cart.remove(name);
        if removed {
            self.notify();
        }
        removed
    }

    /// Update a line's quantity; notifies observers only if the cart
    /// changed.
    pub fn update_quantity(&mut self, name: &str, quantity: i64) -> Result<bool, CommerceError> {
        let changed = self.cart.update_quantity(name, quantity)?;
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    /// Clear the cart; notifies observers only if it held items.
    pub fn clear(&mut self) {
        if !self.cart.is_empty() {
            self.cart.clear();
            self.notify();
        }
    }

    /// Push the current state to all observers without mutating.
    pub fn sync(&self) {
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_change(&self.cart);
        }
    }
}
