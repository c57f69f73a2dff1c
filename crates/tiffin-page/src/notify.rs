//! Transient user-facing notifications.
//!
//! The page creates notification elements itself and removes them after
//! a fixed lifetime. Expiry is deadline-based and driven by `tick`, so
//! behavior is deterministic under test.

use std::time::{Duration, Instant};

/// Visual level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    /// CSS class suffix for the rendered element.
    pub fn as_class(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// A visible notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Identifier for targeted dismissal.
    pub id: u64,
    /// Message text.
    pub message: String,
    /// Visual level.
    pub level: NotificationLevel,
    expires_at: Instant,
}

impl Notification {
    /// Whether this notification has passed its dismissal deadline.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Queue of active notifications with auto-dismissal.
#[derive(Debug)]
pub struct NotificationCenter {
    next_id: u64,
    dismiss_after: Duration,
    active: Vec<Notification>,
}

impl NotificationCenter {
    /// Create a center whose notifications live for `dismiss_after`.
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            next_id: 0,
            dismiss_after,
            active: Vec::new(),
        }
    }

    /// Show a notification; returns its id.
    pub fn push(&mut self, message: impl Into<String>, level: NotificationLevel) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Notification {
            id,
            message: message.into(),
            level,
            expires_at: Instant::now() + self.dismiss_after,
        });
        id
    }

    /// Show a success notification.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationLevel::Success)
    }

    /// Show an error notification.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(message, NotificationLevel::Error)
    }

    /// Dismiss by id. Dismissing an already-removed notification is a
    /// silent no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let len_before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() < len_before
    }

    /// Remove and return notifications past their deadline.
    pub fn tick(&mut self, now: Instant) -> Vec<Notification> {
        let (expired, active): (Vec<_>, Vec<_>) =
            self.active.drain(..).partition(|n| n.is_expired(now));
        self.active = active;
        expired
    }

    /// Currently visible notifications, oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read_back() {
        let mut center = NotificationCenter::new(Duration::from_secs(3));
        center.success("Biryani added to cart!");
        center.error("Your cart is empty!");

        assert_eq!(center.active().len(), 2);
        assert_eq!(center.active()[0].level, NotificationLevel::Success);
        assert_eq!(center.active()[1].message, "Your cart is empty!");
    }

    #[test]
    fn test_tick_expires_past_deadline() {
        let mut center = NotificationCenter::new(Duration::from_millis(10));
        center.success("hello");

        // Not yet expired.
        let expired = center.tick(Instant::now());
        assert!(expired.is_empty());

        let expired = center.tick(Instant::now() + Duration::from_millis(50));
        assert_eq!(expired.len(), 1);
        assert!(center.active().is_empty());
    }

    #[test]
    fn test_dismiss_absent_is_noop() {
        let mut center = NotificationCenter::new(Duration::from_secs(3));
        let id = center.success("hello");

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
    }
}
