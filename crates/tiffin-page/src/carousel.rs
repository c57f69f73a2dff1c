//! Popular-dishes carousel paging.
//!
//! Paging advances the visible window by one card-width increment,
//! clamped to content bounds. The model mirrors the measured geometry of
//! the scroll container and applies each command immediately, so tests
//! can drive it without a layout engine.

use serde::{Deserialize, Serialize};

/// Measured geometry of the carousel's scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewMetrics {
    /// Current horizontal scroll offset.
    pub scroll_left: f64,
    /// Total content width.
    pub scroll_width: f64,
    /// Visible width.
    pub client_width: f64,
    /// Rendered width of the first card, if any card is rendered yet.
    pub card_width: Option<f64>,
}

/// Requested scroll behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    /// Animated scroll.
    Smooth,
    /// Immediate jump.
    Auto,
}

/// A scroll request for the page host to apply to the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollCommand {
    /// Target scroll offset, already clamped to content bounds.
    pub target: f64,
    /// Requested behavior.
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    start_x: f64,
    scroll_start: f64,
}

/// Carousel paging state.
#[derive(Debug, Clone)]
pub struct Carousel {
    metrics: ViewMetrics,
    gap: f64,
    fallback_distance: f64,
    drag: Option<DragState>,
}

impl Carousel {
    /// Create a carousel with the given card gap and fallback distance.
    pub fn new(gap: f64, fallback_distance: f64) -> Self {
        Self {
            metrics: ViewMetrics::default(),
            gap,
            fallback_distance,
            drag: None,
        }
    }

    /// Update the measured geometry.
    pub fn measure(&mut self, metrics: ViewMetrics) {
        self.metrics = metrics;
    }

    /// Current geometry.
    pub fn metrics(&self) -> ViewMetrics {
        self.metrics
    }

    /// One page of scroll distance: card width plus gap, rounded.
    /// Falls back to a fixed distance when no card is rendered yet.
    pub fn page_distance(&self) -> f64 {
        self.metrics
            .card_width
            .map(|w| (w + self.gap).round())
            .unwrap_or(self.fallback_distance)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.metrics.scroll_width - self.metrics.client_width).max(0.0)
    }

    /// Page forward one card.
    pub fn next(&mut self) -> ScrollCommand {
        let target = (self.metrics.scroll_left + self.page_distance()).min(self.max_scroll());
        self.metrics.scroll_left = target;
        ScrollCommand {
            target,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Page back one card.
    pub fn prev(&mut self) -> ScrollCommand {
        let target = (self.metrics.scroll_left - self.page_distance()).max(0.0);
        self.metrics.scroll_left = target;
        ScrollCommand {
            target,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Begin a touch drag at the given x coordinate.
    pub fn touch_start(&mut self, x: f64) {
        self.drag = Some(DragState {
            start_x: x,
            scroll_start: self.metrics.scroll_left,
        });
    }

    /// Continue a touch drag; no-op when no drag is active.
    ///
    /// Returns the new scroll offset to apply, clamped to bounds.
    pub fn touch_move(&mut self, x: f64) -> Option<f64> {
        let drag = self.drag?;
        let target = (drag.scroll_start + (drag.start_x - x))
            .clamp(0.0, self.max_scroll());
        self.metrics.scroll_left = target;
        Some(target)
    }

    /// End the active touch drag, if any.
    pub fn touch_end(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel_with(metrics: ViewMetrics) -> Carousel {
        let mut carousel = Carousel::new(20.0, 320.0);
        carousel.measure(metrics);
        carousel
    }

    #[test]
    fn test_page_distance_is_card_plus_gap() {
        let carousel = carousel_with(ViewMetrics {
            card_width: Some(300.0),
            ..Default::default()
        });
        assert_eq!(carousel.page_distance(), 320.0);
    }

    #[test]
    fn test_page_distance_falls_back_without_cards() {
        let carousel = carousel_with(ViewMetrics::default());
        assert_eq!(carousel.page_distance(), 320.0);
    }

    #[test]
    fn test_next_never_exceeds_max_scroll() {
        let mut carousel = carousel_with(ViewMetrics {
            scroll_left: 900.0,
            scroll_width: 2000.0,
            client_width: 1000.0,
            card_width: Some(300.0),
        });

        let command = carousel.next();
        assert_eq!(command.target, 1000.0);

        // Already at the end: further paging stays clamped.
        let command = carousel.next();
        assert_eq!(command.target, 1000.0);
    }

    #[test]
    fn test_prev_never_drops_below_zero() {
        let mut carousel = carousel_with(ViewMetrics {
            scroll_left: 100.0,
            scroll_width: 2000.0,
            client_width: 1000.0,
            card_width: Some(300.0),
        });

        let command = carousel.prev();
        assert_eq!(command.target, 0.0);

        let command = carousel.prev();
        assert_eq!(command.target, 0.0);
    }

    #[test]
    fn test_paging_is_smooth() {
        let mut carousel = carousel_with(ViewMetrics {
            scroll_width: 2000.0,
            client_width: 1000.0,
            card_width: Some(300.0),
            ..Default::default()
        });
        assert_eq!(carousel.next().behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_touch_drag_updates_scroll() {
        let mut carousel = carousel_with(ViewMetrics {
            scroll_left: 200.0,
            scroll_width: 2000.0,
            client_width: 1000.0,
            card_width: Some(300.0),
        });

        carousel.touch_start(500.0);
        // Finger moves left 120px: content scrolls right.
        assert_eq!(carousel.touch_move(380.0), Some(320.0));
        carousel.touch_end();

        // No active drag: moves are ignored.
        assert_eq!(carousel.touch_move(100.0), None);
    }

    #[test]
    fn test_touch_drag_is_clamped() {
        let mut carousel = carousel_with(ViewMetrics {
            scroll_left: 50.0,
            scroll_width: 1200.0,
            client_width: 1000.0,
            card_width: Some(300.0),
        });

        carousel.touch_start(0.0);
        // Dragging far right would scroll to a negative offset.
        assert_eq!(carousel.touch_move(800.0), Some(0.0));
        // Dragging far left overshoots the end.
        assert_eq!(carousel.touch_move(-900.0), Some(200.0));
    }
}
