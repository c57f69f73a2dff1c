//! Landing page composition.
//!
//! Binds the cart store, display sync, and widget state together and
//! exposes one handler per page event, mirroring how the host page
//! dispatches input. Widgets are optional: a page section that was not
//! found simply leaves its handler as a silent no-op.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tiffin_commerce::cart::CartStore;
use tiffin_commerce::money::Money;
use tiffin_commerce::request::{ContactMessage, DishRequest, SubmitReceipt};

use crate::carousel::{Carousel, ScrollCommand, ViewMetrics};
use crate::config::SiteConfig;
use crate::forms::{RequestBackend, SubmitError, SubmitState, Submitter};
use crate::media::LazyLoader;
use crate::modal::{FocusTarget, RequestModal};
use crate::notify::{Notification, NotificationCenter};
use crate::stepper::QuantityStepper;
use crate::sync::{CartView, DisplaySync};
use crate::video::{PlaybackCommand, VideoPlayer};

/// Attributes carried by an add-to-cart control.
#[derive(Debug, Clone, Default)]
pub struct AddToCartAttrs {
    /// `data-name` attribute value.
    pub name: Option<String>,
    /// `data-price` attribute value.
    pub price: Option<String>,
}

/// Coerce a price attribute to the smallest currency unit.
///
/// Unparsable or negative values become 0; callers wanting stricter
/// behavior must validate upstream.
pub fn parse_price_attr(attr: &str) -> i64 {
    attr.trim().parse::<i64>().ok().filter(|p| *p >= 0).unwrap_or(0)
}

/// The assembled landing page.
pub struct LandingPage {
    config: SiteConfig,
    store: CartStore,
    display: Arc<DisplaySync>,
    notifications: NotificationCenter,
    submitter: Submitter,
    steppers: HashMap<String, QuantityStepper>,
    images: LazyLoader,
    modal: Option<RequestModal>,
    carousel: Option<Carousel>,
    video: Option<VideoPlayer>,
    cart_panel_open: bool,
    request_submit: SubmitState,
    contact_submit: SubmitState,
}

impl LandingPage {
    /// Assemble the page with every section present.
    pub fn new(config: SiteConfig, backend: Arc<dyn RequestBackend>) -> Self {
        let mut page = Self::bare(config, backend);
        page.modal = Some(RequestModal::new());
        page.carousel = Some(Carousel::new(
            page.config.carousel.gap,
            page.config.carousel.fallback_distance,
        ));
        page.video = Some(VideoPlayer::new());
        page
    }

    /// Assemble the page with no optional sections, as when none of
    /// their elements exist in the host page.
    pub fn bare(config: SiteConfig, backend: Arc<dyn RequestBackend>) -> Self {
        let mut store = CartStore::new(config.currency());
        let display = Arc::new(DisplaySync::new(store.cart()));
        store.subscribe(display.clone());

        let mut notifications =
            NotificationCenter::new(Duration::from_millis(config.notifications.dismiss_after_ms));
        notifications.success(format!("Welcome to {}! {}.", config.brand, config.tagline));

        let submitter = Submitter::new(
            backend,
            Duration::from_millis(config.submission.timeout_ms),
        );

        let page = Self {
            config,
            store,
            display,
            notifications,
            submitter,
            steppers: HashMap::new(),
            images: LazyLoader::new(),
            modal: None,
            carousel: None,
            video: None,
            cart_panel_open: false,
            request_submit: SubmitState::Idle,
            contact_submit: SubmitState::Idle,
        };
        page.store.sync();
        page
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Read access to the cart store.
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// The latest projected cart view.
    pub fn cart_view(&self) -> CartView {
        self.display.view()
    }

    /// Currently visible notifications.
    pub fn notifications(&self) -> &[Notification] {
        self.notifications.active()
    }

    // ------------------------------------------------------------------
    // Cart events
    // ------------------------------------------------------------------

    /// Add-to-cart button clicked.
    ///
    /// A control without a `data-name` is a silent no-op; an unparsable
    /// price coerces to zero. Returns true when the cart changed.
    pub fn on_add_to_cart(&mut self, attrs: &AddToCartAttrs) -> bool {
        let Some(name) = attrs.name.as_deref().filter(|n| !n.trim().is_empty()) else {
            return false;
        };
        let price = attrs.price.as_deref().map(parse_price_attr).unwrap_or(0);
        let unit_price = Money::new(price, self.config.currency());

        match self.store.add(name, unit_price, 1) {
            Ok(()) => {
                tracing::info!(dish = name, price, "added to cart");
                self.notifications.success(format!("{} added to cart!", name));
                true
            }
            Err(e) => {
                tracing::warn!(dish = name, error = %e, "add to cart rejected");
                self.notifications.error(e.to_string());
                false
            }
        }
    }

    /// Remove-line control clicked.
    pub fn on_remove_line(&mut self, name: &str) -> bool {
        self.store.remove(name)
    }

    /// Cart line quantity changed.
    pub fn on_update_quantity(&mut self, name: &str, quantity: i64) -> bool {
        match self.store.update_quantity(name, quantity) {
            Ok(changed) => changed,
            Err(e) => {
                tracing::warn!(dish = name, quantity, error = %e, "quantity update rejected");
                self.notifications.error(e.to_string());
                false
            }
        }
    }

    /// Cart icon clicked: toggles the cart panel, nudging when empty.
    pub fn on_cart_icon(&mut self) {
        if self.store.cart().total_items() == 0 {
            self.notifications.error("Your cart is empty!");
        }
        self.cart_panel_open = !self.cart_panel_open;
    }

    /// Click landed outside the cart panel.
    pub fn on_outside_click(&mut self) {
        self.cart_panel_open = false;
    }

    /// Whether the cart panel is showing.
    pub fn cart_panel_open(&self) -> bool {
        self.cart_panel_open
    }

    // ------------------------------------------------------------------
    // Quantity steppers
    // ------------------------------------------------------------------

    /// Stepper plus clicked on a dish card.
    pub fn on_stepper_increment(&mut self, dish: &str) -> i64 {
        self.steppers
            .entry(dish.to_string())
            .or_default()
            .increment()
    }

    /// Stepper minus clicked on a dish card.
    pub fn on_stepper_decrement(&mut self, dish: &str) -> i64 {
        self.steppers
            .entry(dish.to_string())
            .or_default()
            .decrement()
    }

    /// Current stepper value for a dish card.
    pub fn stepper_value(&self, dish: &str) -> i64 {
        self.steppers
            .get(dish)
            .map(QuantityStepper::value)
            .unwrap_or(crate::stepper::MIN_QUANTITY)
    }

    // ------------------------------------------------------------------
    // Modal events
    // ------------------------------------------------------------------

    /// Request-dish button clicked, optionally from a dish card.
    pub fn on_request_dish(&mut self, dish: Option<String>) -> Option<FocusTarget> {
        self.modal.as_mut().map(|m| m.open(dish))
    }

    /// Modal close control (close button, overlay, cancel) clicked.
    pub fn on_modal_close(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }
    }

    /// Escape pressed anywhere on the document.
    pub fn on_escape(&mut self) -> bool {
        self.modal.as_mut().map(|m| m.on_escape()).unwrap_or(false)
    }

    /// The modal, when its section exists.
    pub fn modal(&self) -> Option<&RequestModal> {
        self.modal.as_ref()
    }

    // ------------------------------------------------------------------
    // Carousel events
    // ------------------------------------------------------------------

    /// Update the carousel's measured geometry.
    pub fn measure_carousel(&mut self, metrics: ViewMetrics) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.measure(metrics);
        }
    }

    /// Next-page control clicked.
    pub fn on_carousel_next(&mut self) -> Option<ScrollCommand> {
        self.carousel.as_mut().map(Carousel::next)
    }

    /// Previous-page control clicked.
    pub fn on_carousel_prev(&mut self) -> Option<ScrollCommand> {
        self.carousel.as_mut().map(Carousel::prev)
    }

    /// Touch drag events over the carousel.
    pub fn on_carousel_touch_start(&mut self, x: f64) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.touch_start(x);
        }
    }

    /// Touch moved; returns the new scroll offset while dragging.
    pub fn on_carousel_touch_move(&mut self, x: f64) -> Option<f64> {
        self.carousel.as_mut().and_then(|c| c.touch_move(x))
    }

    /// Touch lifted.
    pub fn on_carousel_touch_end(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.touch_end();
        }
    }

    /// The carousel, when its section exists.
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Hero search submitted; returns the query when non-empty.
    pub fn on_search(&mut self, input: &str) -> Option<String> {
        let query = input.trim();
        if query.is_empty() {
            self.notifications.error("Please enter a search term!");
            return None;
        }
        tracing::info!(query, "search requested");
        self.notifications
            .success(format!("Searching for: \"{}\"", query));
        Some(query.to_string())
    }

    // ------------------------------------------------------------------
    // Video
    // ------------------------------------------------------------------

    /// Play/pause control clicked.
    pub fn on_video_toggle(&mut self, now: Instant) -> Option<PlaybackCommand> {
        let video = self.video.as_mut()?;
        match video.toggle(now) {
            Ok(command) => Some(command),
            Err(e) => {
                self.notifications.error(e.to_string());
                None
            }
        }
    }

    /// Media element events.
    pub fn on_video_loaded(&mut self) {
        if let Some(video) = self.video.as_mut() {
            video.on_loaded();
        }
    }

    /// Media element load failure.
    pub fn on_video_error(&mut self, detail: &str) {
        if let Some(video) = self.video.as_mut() {
            video.on_error(detail);
        }
    }

    /// Media element reached the end.
    pub fn on_video_ended(&mut self) {
        if let Some(video) = self.video.as_mut() {
            video.on_ended();
        }
    }

    /// Tab visibility changed; pauses a playing video.
    pub fn on_visibility_change(&mut self, hidden: bool) -> Option<PlaybackCommand> {
        self.video
            .as_mut()
            .and_then(|v| v.on_visibility_change(hidden))
    }

    /// The video player, when its section exists.
    pub fn video(&self) -> Option<&VideoPlayer> {
        self.video.as_ref()
    }

    // ------------------------------------------------------------------
    // Lazy images
    // ------------------------------------------------------------------

    /// Image tracking for deferred loading.
    pub fn images_mut(&mut self) -> &mut LazyLoader {
        &mut self.images
    }

    // ------------------------------------------------------------------
    // Form submissions
    // ------------------------------------------------------------------

    /// Submit the request-dish form.
    ///
    /// Validation failures surface as an error notification and abort
    /// locally; a successful submission closes the modal.
    pub async fn submit_dish_request(
        &mut self,
        name: &str,
        email: &str,
    ) -> Result<SubmitReceipt, SubmitError> {
        let dish = self
            .modal
            .as_ref()
            .map(|m| m.dish_value().to_string())
            .filter(|d| !d.is_empty());
        let request = DishRequest::new(dish, name, email);

        if let Err(e) = request.validate() {
            self.notifications
                .error("Please fill in all required fields!");
            self.request_submit = SubmitState::Failed;
            return Err(SubmitError::Validation(e));
        }

        self.request_submit = SubmitState::InFlight;
        match self.submitter.dish_request(request).await {
            Ok(receipt) => {
                self.notifications.success(receipt.message.clone());
                self.on_modal_close();
                self.request_submit = SubmitState::Succeeded;
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "dish request failed");
                self.notifications.error(e.to_string());
                self.request_submit = SubmitState::Failed;
                Err(e)
            }
        }
    }

    /// Submit the contact form.
    pub async fn submit_contact(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<SubmitReceipt, SubmitError> {
        let message = ContactMessage::new(name, email, message);

        if let Err(e) = message.validate() {
            self.notifications.error("Please fill in all fields!");
            self.contact_submit = SubmitState::Failed;
            return Err(SubmitError::Validation(e));
        }

        self.contact_submit = SubmitState::InFlight;
        match self.submitter.contact(message).await {
            Ok(receipt) => {
                self.notifications.success(receipt.message.clone());
                self.contact_submit = SubmitState::Succeeded;
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact message failed");
                self.notifications.error(e.to_string());
                self.contact_submit = SubmitState::Failed;
                Err(e)
            }
        }
    }

    /// Request-form submit button state.
    pub fn request_submit_state(&self) -> SubmitState {
        self.request_submit
    }

    /// Contact-form submit button state.
    pub fn contact_submit_state(&self) -> SubmitState {
        self.contact_submit
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Apply deadline-based effects: expire notifications and hide the
    /// video control. Returns the notifications that were dismissed.
    pub fn tick(&mut self, now: Instant) -> Vec<Notification> {
        if let Some(video) = self.video.as_mut() {
            video.tick(now);
        }
        self.notifications.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::SimulatedBackend;
    use crate::notify::NotificationLevel;

    fn page() -> LandingPage {
        LandingPage::new(
            SiteConfig::default(),
            Arc::new(SimulatedBackend::new(Duration::from_millis(0))),
        )
    }

    fn attrs(name: &str, price: &str) -> AddToCartAttrs {
        AddToCartAttrs {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
        }
    }

    #[test]
    fn test_add_to_cart_updates_view() {
        let mut page = page();
        assert!(page.on_add_to_cart(&attrs("Biryani", "250")));

        let view = page.cart_view();
        assert_eq!(view.badge, "1");
        assert_eq!(view.total, "Total: \u{20b9}250");
        assert!(page
            .notifications()
            .iter()
            .any(|n| n.message == "Biryani added to cart!"));
    }

    #[test]
    fn test_add_without_name_is_silent_noop() {
        let mut page = page();
        let before = page.notifications().len();

        assert!(!page.on_add_to_cart(&AddToCartAttrs {
            name: None,
            price: Some("250".to_string()),
        }));
        assert_eq!(page.cart_view().badge, "0");
        assert_eq!(page.notifications().len(), before);
    }

    #[test]
    fn test_unparsable_price_coerces_to_zero() {
        let mut page = page();
        assert!(page.on_add_to_cart(&attrs("Mystery Dish", "not-a-price")));

        let view = page.cart_view();
        assert_eq!(view.lines[0].unit_price, "\u{20b9}0");
        assert_eq!(view.total, "Total: \u{20b9}0");
    }

    #[test]
    fn test_empty_cart_icon_nudges() {
        let mut page = page();
        page.on_cart_icon();

        assert!(page.cart_panel_open());
        assert!(page
            .notifications()
            .iter()
            .any(|n| n.message == "Your cart is empty!" && n.level == NotificationLevel::Error));

        page.on_outside_click();
        assert!(!page.cart_panel_open());
    }

    #[test]
    fn test_search_requires_a_term() {
        let mut page = page();
        assert_eq!(page.on_search("   "), None);
        assert_eq!(page.on_search(" biryani "), Some("biryani".to_string()));
    }

    #[test]
    fn test_bare_page_handlers_are_noops() {
        let mut page = LandingPage::bare(
            SiteConfig::default(),
            Arc::new(SimulatedBackend::new(Duration::from_millis(0))),
        );

        assert!(page.on_request_dish(Some("Biryani".to_string())).is_none());
        assert!(!page.on_escape());
        assert!(page.on_carousel_next().is_none());
        assert!(page.on_video_toggle(Instant::now()).is_none());
        assert!(page.on_visibility_change(true).is_none());
    }

    #[tokio::test]
    async fn test_request_submission_closes_modal() {
        let mut page = page();
        page.on_request_dish(Some("Biryani".to_string()));

        let receipt = page
            .submit_dish_request("Asha", "asha@example.com")
            .await
            .unwrap();

        assert!(receipt.message.contains("\"Biryani\""));
        assert!(!page.modal().unwrap().is_open());
        assert_eq!(page.request_submit_state(), SubmitState::Succeeded);
    }

    #[tokio::test]
    async fn test_invalid_request_aborts_locally() {
        let mut page = page();
        page.on_request_dish(None);

        let result = page.submit_dish_request("", "asha@example.com").await;

        assert!(matches!(result, Err(SubmitError::Validation(_))));
        assert!(page.modal().unwrap().is_open());
        assert!(page
            .notifications()
            .iter()
            .any(|n| n.message == "Please fill in all required fields!"));
    }

    #[tokio::test]
    async fn test_contact_submission_succeeds() {
        let mut page = page();
        let receipt = page
            .submit_contact("Asha", "asha@example.com", "Loved the thali!")
            .await
            .unwrap();

        assert!(receipt.message.contains("within 48 hours"));
        assert_eq!(page.contact_submit_state(), SubmitState::Succeeded);
    }

    #[test]
    fn test_tick_expires_notifications() {
        let mut page = page();
        page.on_add_to_cart(&attrs("Biryani", "250"));
        assert!(!page.notifications().is_empty());

        let expired = page.tick(Instant::now() + Duration::from_secs(10));
        assert!(!expired.is_empty());
        assert!(page.notifications().is_empty());
    }
}
