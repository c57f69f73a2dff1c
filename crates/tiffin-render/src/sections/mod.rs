//! Section render functions for the landing page.

mod cart;
mod contact;
mod hero;
mod notifications;
mod popular;
mod request_modal;
mod video;

pub use cart::render_cart_widget;
pub use contact::render_contact;
pub use hero::render_hero;
pub use notifications::render_notifications;
pub use popular::{render_popular, render_popular_skeleton};
pub use request_modal::render_request_modal;
pub use video::render_video;

/// Escape text for safe interpolation into HTML.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"chole" & bhature</b>"#),
            "&lt;b&gt;&quot;chole&quot; &amp; bhature&lt;/b&gt;"
        );
    }
}
