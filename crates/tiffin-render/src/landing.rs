//! Landing page assembly: shell plus section ordering.

use std::io::Write;

use tiffin_page::config::SiteConfig;
use tiffin_page::page::LandingPage;

use crate::content::PageContent;
use crate::sections::{
    render_cart_widget, render_contact, render_hero, render_notifications, render_popular,
    render_request_modal, render_video,
};
use crate::shell::{HeadContent, Shell};
use crate::sink::{RenderError, SectionSink, TimingMark};

/// Build the branded shell for the landing page.
pub fn landing_shell(config: &SiteConfig) -> Shell {
    let head = HeadContent::new(format!("{} — {}", config.brand, config.tagline))
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", &config.tagline)
        .with_style(SITE_STYLES);

    let brand = &config.brand;
    Shell::new(head)
        .with_body_start(format!(
            r##"<body>
<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">{brand}</a>
        <div class="nav-links">
            <a href="#popular">Popular</a>
            <a href="#request">Request a Dish</a>
            <a href="#contact">Contact</a>
        </div>
    </nav>
</header>
<main>
"##
        ))
        .with_body_end(format!(
            r#"</main>
<footer class="site-footer">
    <p>&copy; {brand} — home kitchens, delivered with love.</p>
</footer>
</body>
</html>"#
        ))
}

/// Render the full landing page into a writer, shell first.
///
/// Section order follows the page: hero, video, popular carousel, cart
/// widget, request modal, contact, notifications.
pub fn render_landing<W: Write>(
    content: &PageContent,
    page: &LandingPage,
    writer: W,
) -> Result<Vec<TimingMark>, RenderError> {
    let shell = landing_shell(page.config());
    let mut sink = SectionSink::new(writer);

    sink.send_shell(&shell)?;
    sink.send_section("hero", &render_hero(&content.hero))?;
    sink.send_section("video", &render_video(&content.video, page.video()))?;
    sink.send_section("popular", &render_popular(&content.menu))?;
    sink.send_section(
        "cart",
        &render_cart_widget(&page.cart_view(), page.cart_panel_open()),
    )?;
    sink.send_section("request-modal", &render_request_modal(page.modal()))?;
    sink.send_section("contact", &render_contact(&content.contact))?;
    sink.send_section("notifications", &render_notifications(page.notifications()))?;
    sink.finish(&shell)
}

const SITE_STYLES: &str = r#"
:root {
    --primary: #e4572e;
    --primary-hover: #c43f1a;
    --bg: #fffaf5;
    --text: #2b2118;
    --text-muted: #8a7968;
    --border: #ecdfd2;
    --success: #2e7d32;
    --error: #c62828;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}

.site-header {
    position: sticky;
    top: 0;
    background: rgba(255, 250, 245, 0.95);
    border-bottom: 1px solid var(--border);
    z-index: 100;
}

.nav-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); text-decoration: none; }
.nav-links { display: flex; gap: 2rem; }
.nav-links a { color: var(--text); text-decoration: none; font-weight: 500; }

.hero { padding: 5rem 2rem; text-align: center; }
.hero-headline { font-size: 3rem; line-height: 1.1; margin-bottom: 1rem; }
.hero-subheadline { color: var(--text-muted); margin-bottom: 2rem; }
.hero-search { display: flex; gap: 0.5rem; max-width: 480px; margin: 0 auto; }
.hero-search input { flex: 1; padding: 0.875rem 1rem; border: 1px solid var(--border); border-radius: 8px; }
.hero-search button { padding: 0.875rem 1.5rem; background: var(--primary); color: white; border: none; border-radius: 8px; cursor: pointer; }

.popular { padding: 4rem 2rem; position: relative; }
.popular-slider { display: flex; gap: 20px; overflow-x: auto; scroll-behavior: smooth; }
.popular-card { flex: 0 0 300px; background: white; border: 1px solid var(--border); border-radius: 12px; padding: 1rem; }
.dish-price { font-weight: 700; color: var(--primary); }
.quantity-control { display: inline-flex; align-items: center; gap: 0.75rem; margin: 0.5rem 0; }
.qty-btn { width: 28px; height: 28px; border: 1px solid var(--border); border-radius: 50%; background: white; cursor: pointer; }
.add-btn { width: 100%; padding: 0.75rem; background: var(--primary); color: white; border: none; border-radius: 8px; cursor: pointer; }
.add-btn:hover { background: var(--primary-hover); }
.slider-btn { position: absolute; top: 50%; background: white; border: 1px solid var(--border); border-radius: 50%; width: 40px; height: 40px; cursor: pointer; }
.slider-btn.prev { left: 0.5rem; }
.slider-btn.next { right: 0.5rem; }

.cart-widget { position: fixed; top: 1rem; right: 1rem; z-index: 110; }
.cart-icon { position: relative; border: none; background: white; border-radius: 50%; width: 48px; height: 48px; cursor: pointer; box-shadow: 0 2px 8px rgba(0,0,0,0.12); }
.cart-count { position: absolute; top: -6px; right: -6px; background: var(--primary); color: white; border-radius: 50%; min-width: 20px; height: 20px; font-size: 0.75rem; line-height: 20px; }
.cart-display { display: none; background: white; border: 1px solid var(--border); border-radius: 12px; padding: 1rem; margin-top: 0.5rem; min-width: 260px; }
.cart-display.show { display: block; }
.cart-item { display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid var(--border); }
.cart-total { font-weight: 700; padding-top: 0.75rem; }
.cart-empty { color: var(--text-muted); }

.modal { display: none; position: fixed; inset: 0; z-index: 120; }
.modal.open { display: block; }
.modal-overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.5); }
.modal-content { position: relative; max-width: 420px; margin: 10vh auto; background: white; border-radius: 12px; padding: 2rem; }
.modal-content input { width: 100%; margin-bottom: 0.75rem; padding: 0.75rem; border: 1px solid var(--border); border-radius: 8px; }
.modal-actions { display: flex; justify-content: flex-end; gap: 0.75rem; }

.kitchen-video { position: relative; max-width: 720px; margin: 0 auto; padding: 2rem; }
.kitchen-video video { width: 100%; border-radius: 12px; }
.video-control { position: absolute; inset: 0; margin: auto; width: 64px; height: 64px; border-radius: 50%; border: none; background: rgba(255, 255, 255, 0.9); font-size: 1.5rem; cursor: pointer; }
.video-control.hidden { display: none; }
.video-control:disabled { cursor: not-allowed; }

.contact { padding: 4rem 2rem; }
.contact-form { max-width: 480px; margin: 0 auto; display: grid; gap: 0.75rem; }
.contact-form input, .contact-form textarea { padding: 0.75rem; border: 1px solid var(--border); border-radius: 8px; }
.submit-btn { padding: 0.875rem; background: var(--primary); color: white; border: none; border-radius: 8px; cursor: pointer; }
.submit-btn.loading, .submit-request-btn.loading { opacity: 0.7; }

.notifications { position: fixed; bottom: 1rem; right: 1rem; display: grid; gap: 0.5rem; z-index: 130; }
.notification { padding: 0.75rem 1rem; border-radius: 8px; color: white; opacity: 0; transition: opacity 0.3s; }
.notification.show { opacity: 1; }
.notification.success { background: var(--success); }
.notification.error { background: var(--error); }

.section-header { text-align: center; margin-bottom: 2rem; }
.section-header p { color: var(--text-muted); }

.skeleton .skeleton-text,
.skeleton .skeleton-image,
.skeleton .skeleton-button {
    background: linear-gradient(90deg, #efe6db 25%, #f8f2ea 50%, #efe6db 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
    border-radius: 4px;
    margin-bottom: 0.5rem;
}
.skeleton .skeleton-image { height: 160px; }
.skeleton .skeleton-text { height: 1rem; }
.skeleton .skeleton-headline { width: 60%; height: 1.5rem; }
.skeleton .skeleton-button { height: 44px; }

@keyframes shimmer {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}

.site-footer { padding: 2rem; text-align: center; color: var(--text-muted); border-top: 1px solid var(--border); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tiffin_page::forms::SimulatedBackend;
    use tiffin_page::page::AddToCartAttrs;

    fn page() -> LandingPage {
        LandingPage::new(
            SiteConfig::default(),
            Arc::new(SimulatedBackend::new(Duration::from_millis(0))),
        )
    }

    #[test]
    fn test_full_page_renders_every_section() {
        let content = PageContent::with_default_menu();
        let page = page();
        let mut buffer = Vec::new();

        let marks = render_landing(&content, &page, &mut buffer).unwrap();
        let html = String::from_utf8(buffer).unwrap();

        for section in [
            "hero", "video", "popular", "cart", "request-modal", "contact", "notifications",
        ] {
            assert!(
                html.contains(&format!(r#"data-section="{}""#, section)),
                "missing section {}",
                section
            );
        }
        assert!(html.contains("TiffinTales"));
        assert_eq!(marks.first().unwrap().name, "shell_sent");
        assert_eq!(marks.last().unwrap().name, "complete");
    }

    #[test]
    fn test_cart_state_flows_into_markup() {
        let content = PageContent::with_default_menu();
        let mut page = page();
        page.on_add_to_cart(&AddToCartAttrs {
            name: Some("Biryani".to_string()),
            price: Some("250".to_string()),
        });

        let mut buffer = Vec::new();
        render_landing(&content, &page, &mut buffer).unwrap();
        let html = String::from_utf8(buffer).unwrap();

        assert!(html.contains(r#"<span class="cart-count">1</span>"#));
        assert!(html.contains("Total: \u{20b9}250"));
        assert!(html.contains("Biryani added to cart!"));
    }
}
