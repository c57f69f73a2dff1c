//! Headless page state for the TiffinTales landing page.
//!
//! Every behavior the page wires to a DOM event handler lives here as a
//! plain state type: the cart display sync, the popular-dishes carousel,
//! the request-a-dish modal, quantity steppers, transient notifications,
//! form validation and async submission, the hero video control, and
//! lazy image tracking. The host page is the external collaborator: it
//! feeds events in and applies the returned commands (scroll targets,
//! playback commands, focus intents) to its own elements.
//!
//! Nothing in this crate touches a rendering surface, so all of it is
//! testable without one.

pub mod carousel;
pub mod config;
pub mod forms;
pub mod media;
pub mod modal;
pub mod notify;
pub mod page;
pub mod stepper;
pub mod sync;
pub mod video;

pub use config::SiteConfig;
pub use page::{AddToCartAttrs, LandingPage};
pub use sync::{CartView, DisplaySync, LineView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::carousel::{Carousel, ScrollBehavior, ScrollCommand, ViewMetrics};
    pub use crate::config::{ConfigError, SiteConfig};
    pub use crate::forms::{
        RequestBackend, SimulatedBackend, SubmissionHandle, SubmitError, SubmitState, Submitter,
    };
    pub use crate::media::LazyLoader;
    pub use crate::modal::{FocusTarget, ModalState, RequestModal};
    pub use crate::notify::{Notification, NotificationCenter, NotificationLevel};
    pub use crate::page::{parse_price_attr, AddToCartAttrs, LandingPage};
    pub use crate::stepper::{parse_quantity, QuantityStepper, MAX_QUANTITY, MIN_QUANTITY};
    pub use crate::sync::{CartView, DisplaySync, LineView};
    pub use crate::video::{ControlGlyph, Playback, PlaybackCommand, VideoPlayer};
}
