//! Request-a-dish modal dialog.

use super::html_escape;
use tiffin_page::modal::RequestModal;

/// Render the modal dialog.
///
/// A page without the modal section renders nothing, matching the
/// missing-element no-op rule.
pub fn render_request_modal(modal: Option<&RequestModal>) -> String {
    let Some(modal) = modal else {
        return String::new();
    };

    let open_class = if modal.is_open() { " open" } else { "" };

    format!(
        r#"<div class="modal{open_class}" role="dialog" aria-hidden="{aria_hidden}" data-section="request-modal">
    <div class="modal-overlay"></div>
    <div class="modal-content">
        <button class="modal-close" aria-label="Close">&times;</button>
        <h2 class="modal-title">{title}</h2>
        <form class="request-form" data-role="request-form">
            <input type="text" name="dish" value="{dish}" readonly aria-label="Dish">
            <input type="text" name="name" placeholder="Your name" required>
            <input type="email" name="email" placeholder="Your email" required>
            <div class="modal-actions">
                <button type="button" class="cancel-btn">Cancel</button>
                <button type="submit" class="submit-request-btn">Send Request</button>
            </div>
        </form>
    </div>
</div>"#,
        open_class = open_class,
        aria_hidden = modal.aria_hidden(),
        title = html_escape(&modal.title()),
        dish = html_escape(modal.dish_value()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_modal_is_hidden() {
        let modal = RequestModal::new();
        let html = render_request_modal(Some(&modal));

        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(!html.contains("modal open"));
        assert!(html.contains("Request a Dish"));
    }

    #[test]
    fn test_open_modal_mirrors_prefill() {
        let mut modal = RequestModal::new();
        modal.open(Some("Biryani".to_string()));
        let html = render_request_modal(Some(&modal));

        assert!(html.contains(r#"aria-hidden="false""#));
        assert!(html.contains("Request: Biryani"));
        assert!(html.contains(r#"value="Biryani""#));
    }

    #[test]
    fn test_missing_section_renders_nothing() {
        assert_eq!(render_request_modal(None), "");
    }
}
