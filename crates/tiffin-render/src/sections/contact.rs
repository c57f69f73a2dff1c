//! Contact section.

use super::html_escape;
use crate::content::ContactContent;

/// Render the contact form section.
pub fn render_contact(content: &ContactContent) -> String {
    format!(
        r#"<section class="contact" data-section="contact">
    <div class="section-header">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <form class="contact-form" data-role="contact-form">
        <input type="text" name="name" placeholder="Your name" required>
        <input type="email" name="email" placeholder="Your email" required>
        <textarea name="message" placeholder="Your message" required></textarea>
        <button type="submit" class="submit-btn">Send Message</button>
    </form>
</section>"#,
        html_escape(&content.heading),
        html_escape(&content.blurb),
    )
}
