//! Request-a-dish modal state machine.

use serde::{Deserialize, Serialize};

/// Where focus should land after the modal opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusTarget {
    /// First editable input in the dialog.
    FirstInput,
}

/// Modal dialog state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalState {
    /// Dialog hidden, form reset.
    Closed,
    /// Dialog visible, optionally prefilled with a dish name.
    Open {
        /// Prefilled dish, when opened from a dish card.
        dish: Option<String>,
    },
}

/// The "request a dish" modal.
///
/// Closing always resets the form; the title and dish input mirror the
/// prefill while open.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestModal {
    state: ModalState,
}

impl RequestModal {
    /// Create a closed modal.
    pub fn new() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }

    /// Whether the dialog is visible.
    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Open the dialog, optionally prefilled with a dish name.
    ///
    /// Returns the focus intent for the page host.
    pub fn open(&mut self, dish: Option<String>) -> FocusTarget {
        let dish = dish.filter(|d| !d.trim().is_empty());
        self.state = ModalState::Open { dish };
        FocusTarget::FirstInput
    }

    /// Close the dialog and reset the form.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Handle the Escape key; closes only while open.
    ///
    /// Returns true if the dialog was closed by this key press.
    pub fn on_escape(&mut self) -> bool {
        if self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Dialog title: "Request: {dish}" when prefilled.
    pub fn title(&self) -> String {
        match &self.state {
            ModalState::Open { dish: Some(dish) } => format!("Request: {}", dish),
            _ => "Request a Dish".to_string(),
        }
    }

    /// Value of the dish input, empty unless prefilled.
    pub fn dish_value(&self) -> &str {
        match &self.state {
            ModalState::Open { dish: Some(dish) } => dish,
            _ => "",
        }
    }

    /// Mirror of the dialog's aria-hidden attribute.
    pub fn aria_hidden(&self) -> bool {
        !self.is_open()
    }

    /// Whether the page body should be scroll-locked.
    pub fn body_locked(&self) -> bool {
        self.is_open()
    }
}

impl Default for RequestModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_with_prefill() {
        let mut modal = RequestModal::new();
        let focus = modal.open(Some("Biryani".to_string()));

        assert!(modal.is_open());
        assert_eq!(focus, FocusTarget::FirstInput);
        assert_eq!(modal.title(), "Request: Biryani");
        assert_eq!(modal.dish_value(), "Biryani");
        assert!(!modal.aria_hidden());
        assert!(modal.body_locked());
    }

    #[test]
    fn test_open_without_prefill() {
        let mut modal = RequestModal::new();
        modal.open(None);

        assert_eq!(modal.title(), "Request a Dish");
        assert_eq!(modal.dish_value(), "");
    }

    #[test]
    fn test_blank_prefill_is_ignored() {
        let mut modal = RequestModal::new();
        modal.open(Some("   ".to_string()));
        assert_eq!(modal.title(), "Request a Dish");
    }

    #[test]
    fn test_close_resets_form() {
        let mut modal = RequestModal::new();
        modal.open(Some("Biryani".to_string()));
        modal.close();

        assert!(!modal.is_open());
        assert_eq!(modal.dish_value(), "");
        assert!(modal.aria_hidden());
        assert!(!modal.body_locked());
    }

    #[test]
    fn test_escape_closes_only_while_open() {
        let mut modal = RequestModal::new();
        assert!(!modal.on_escape());

        modal.open(None);
        assert!(modal.on_escape());
        assert!(!modal.is_open());
    }
}
