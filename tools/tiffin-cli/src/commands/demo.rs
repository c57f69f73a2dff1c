//! `tiffin demo` - replay a scripted visitor session.
//!
//! Drives the assembled page the way the host page would: dispatching
//! clicks, form submissions, and timer ticks, and printing what the
//! visitor would see after each step.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;

use tiffin_page::carousel::ViewMetrics;
use tiffin_page::config::SiteConfig;
use tiffin_page::forms::SimulatedBackend;
use tiffin_page::notify::NotificationLevel;
use tiffin_page::page::{AddToCartAttrs, LandingPage};

use crate::output::Output;

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Simulated backend delay in milliseconds (overrides config)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

fn attrs(name: &str, price: &str) -> AddToCartAttrs {
    AddToCartAttrs {
        name: Some(name.to_string()),
        price: Some(price.to_string()),
    }
}

/// Print and clear whatever notifications the last steps produced.
fn drain_notifications(page: &mut LandingPage, output: &Output) {
    let later = Instant::now() + Duration::from_secs(60);
    for notification in page.tick(later) {
        match notification.level {
            NotificationLevel::Success => output.success(&notification.message),
            NotificationLevel::Error => output.warn(&notification.message),
        }
    }
}

fn print_cart(page: &LandingPage, output: &Output) {
    let view = page.cart_view();
    output.info(&format!("Cart badge: {} — {}", view.badge, view.total));
    for line in &view.lines {
        output.info(&format!("    {} ({})", line.name, line.quantity_label()));
    }
}

pub async fn run(args: DemoArgs, config: &SiteConfig, output: &Output) -> Result<()> {
    let mut config = config.clone();
    if let Some(delay_ms) = args.delay_ms {
        config.submission.delay_ms = delay_ms;
    }

    let backend = Arc::new(SimulatedBackend::new(Duration::from_millis(
        config.submission.delay_ms,
    )));
    let mut page = LandingPage::new(config, backend);
    drain_notifications(&mut page, output);

    output.heading("Browsing the popular carousel");
    page.measure_carousel(ViewMetrics {
        scroll_left: 0.0,
        scroll_width: 1920.0,
        client_width: 960.0,
        card_width: Some(300.0),
    });
    for _ in 0..2 {
        if let Some(command) = page.on_carousel_next() {
            output.info(&format!("Scrolled to offset {}", command.target));
        }
    }
    if let Some(command) = page.on_carousel_prev() {
        output.info(&format!("Scrolled back to offset {}", command.target));
    }
    page.images_mut().observe("dish-biryani", "/img/dishes/biryani.jpg");
    if let Some(src) = page.images_mut().on_visible("dish-biryani") {
        output.debug(&format!("Lazy-loaded {}", src));
    }

    output.heading("An empty cart nudges the visitor");
    page.on_cart_icon();
    drain_notifications(&mut page, output);

    output.heading("Filling the cart");
    page.on_add_to_cart(&attrs("Biryani", "250"));
    page.on_add_to_cart(&attrs("Biryani", "250"));
    page.on_add_to_cart(&attrs("Masala Dosa", "80"));
    drain_notifications(&mut page, output);
    print_cart(&page, output);

    output.heading("Second thoughts");
    page.on_update_quantity("Biryani", 3);
    page.on_remove_line("Masala Dosa");
    print_cart(&page, output);

    output.heading("Requesting a dish");
    page.on_request_dish(Some("Gulab Jamun".to_string()));
    if let Some(modal) = page.modal() {
        output.info(&format!("Modal open: {}", modal.title()));
    }
    page.submit_dish_request("Asha", "asha@example.com").await?;
    drain_notifications(&mut page, output);

    output.heading("Leaving a message");
    page.submit_contact("Asha", "asha@example.com", "Loved the thali!")
        .await?;
    drain_notifications(&mut page, output);

    output.heading("Session summary");
    print_cart(&page, output);
    output.success(&format!(
        "Demo complete: {} item(s) across {} line(s)",
        page.store().cart().total_items(),
        page.store().cart().unique_items(),
    ));

    Ok(())
}
