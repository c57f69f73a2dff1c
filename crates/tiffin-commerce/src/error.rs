//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Dish not found in the menu.
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Negative unit price.
    #[error("Invalid unit price: {0}")]
    InvalidPrice(i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Required form field is missing or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
