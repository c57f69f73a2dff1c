//! Cart widget: badge, itemized list, and total.

use super::html_escape;
use tiffin_page::sync::CartView;

/// Render the cart widget from a projected view.
///
/// The three surfaces the display sync writes — the count badge, the
/// item list, and the total line — each get a stable structural role.
pub fn render_cart_widget(view: &CartView, open: bool) -> String {
    let items: String = if view.lines.is_empty() {
        r#"            <p class="cart-empty">Your cart is empty.</p>"#.to_string()
    } else {
        view.lines
            .iter()
            .map(|line| {
                format!(
                    r#"            <div class="cart-item"><span>{}</span><span>{}</span></div>"#,
                    html_escape(&line.name),
                    html_escape(&line.quantity_label()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let open_class = if open { " show" } else { "" };

    format!(
        r#"<div class="cart-widget" data-section="cart">
    <button class="cart-icon" aria-label="Cart">
        🛒<span class="cart-count">{badge}</span>
    </button>
    <div class="cart-display{open_class}">
        <div class="cart-items">
{items}
        </div>
        <div class="cart-total">{total}</div>
    </div>
</div>"#,
        badge = html_escape(&view.badge),
        items = items,
        total = html_escape(&view.total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiffin_commerce::cart::Cart;
    use tiffin_commerce::money::{Currency, Money};

    #[test]
    fn test_empty_cart_widget() {
        let cart = Cart::new(Currency::INR);
        let html = render_cart_widget(&CartView::project(&cart), false);

        assert!(html.contains(r#"<span class="cart-count">0</span>"#));
        assert!(html.contains("Your cart is empty."));
        assert!(html.contains("Total: \u{20b9}0"));
        assert!(!html.contains("cart-display show"));
    }

    #[test]
    fn test_filled_cart_widget_surfaces() {
        let mut cart = Cart::new(Currency::INR);
        cart.add("Biryani", Money::new(250, Currency::INR), 3).unwrap();

        let html = render_cart_widget(&CartView::project(&cart), true);

        assert!(html.contains(r#"<span class="cart-count">3</span>"#));
        assert!(html.contains("Biryani"));
        assert!(html.contains("3 \u{00d7} \u{20b9}250"));
        assert!(html.contains("Total: \u{20b9}750"));
        assert!(html.contains("cart-display show"));
    }
}
