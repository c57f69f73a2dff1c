//! Transient notification elements.

use super::html_escape;
use tiffin_page::notify::Notification;

/// Render the active notifications into their container.
pub fn render_notifications(notifications: &[Notification]) -> String {
    let items: String = notifications
        .iter()
        .map(|n| {
            format!(
                r#"    <div class="notification {} show" data-notification="{}">{}</div>"#,
                n.level.as_class(),
                n.id,
                html_escape(&n.message),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<div class=\"notifications\" data-section=\"notifications\" aria-live=\"polite\">\n{}\n</div>",
        items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tiffin_page::notify::NotificationCenter;

    #[test]
    fn test_levels_map_to_classes() {
        let mut center = NotificationCenter::new(Duration::from_secs(3));
        center.success("Biryani added to cart!");
        center.error("Your cart is empty!");

        let html = render_notifications(center.active());
        assert!(html.contains("notification success show"));
        assert!(html.contains("notification error show"));
        assert!(html.contains("Biryani added to cart!"));
    }
}
