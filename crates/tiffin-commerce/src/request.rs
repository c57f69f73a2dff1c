//! Dish request and contact message records.

use crate::error::CommerceError;
use crate::ids::TicketId;
use serde::{Deserialize, Serialize};

/// Fallback dish label when a request is opened without a specific dish.
pub const GENERAL_REQUEST: &str = "General Request";

/// A "request a dish" form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DishRequest {
    /// Requested dish, defaults to [`GENERAL_REQUEST`].
    pub dish: String,
    /// Requester's name.
    pub name: String,
    /// Requester's email.
    pub email: String,
}

impl DishRequest {
    /// Create a request, substituting the general label for an empty dish.
    pub fn new(dish: Option<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let dish = dish
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| GENERAL_REQUEST.to_string());
        Self {
            dish,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Validate required fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(CommerceError::MissingField("email"));
        }
        Ok(())
    }
}

/// A contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    /// Sender's name.
    pub name: String,
    /// Sender's email.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Create a contact message.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate required fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(CommerceError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(CommerceError::MissingField("message"));
        }
        Ok(())
    }
}

/// Acknowledgement returned by a submission backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitReceipt {
    /// Ticket assigned to the submission.
    pub ticket: TicketId,
    /// User-facing confirmation message.
    pub message: String,
    /// Unix timestamp of acceptance.
    pub accepted_at: i64,
}

impl SubmitReceipt {
    /// Create a receipt with a fresh ticket.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ticket: TicketId::generate(),
            message: message.into(),
            accepted_at: current_timestamp(),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
