//! Popular dishes carousel.

use super::html_escape;
use tiffin_commerce::menu::Menu;

/// Render the popular-dishes carousel.
///
/// Each card carries the dish name and price as data attributes; the
/// add button and quantity stepper are wired up by the page host.
pub fn render_popular(menu: &Menu) -> String {
    let cards: String = menu
        .popular()
        .map(|dish| {
            let image = dish
                .image_url
                .as_deref()
                .map(|url| {
                    format!(
                        r#"<img data-src="{}" alt="{}">"#,
                        html_escape(url),
                        html_escape(&dish.name)
                    )
                })
                .unwrap_or_default();
            let description = dish
                .description
                .as_deref()
                .map(|d| format!(r#"<p class="dish-description">{}</p>"#, html_escape(d)))
                .unwrap_or_default();

            format!(
                r#"        <div class="popular-card" data-dish="{slug}">
            {image}
            <h3 class="dish-name">{name}</h3>
            {description}
            <p class="dish-price">{price}</p>
            <div class="quantity-control">
                <button class="qty-btn minus" aria-label="Decrease quantity">&minus;</button>
                <span class="qty-number">1</span>
                <button class="qty-btn plus" aria-label="Increase quantity">+</button>
            </div>
            <button class="add-btn" data-name="{name}" data-price="{amount}">Add to Cart</button>
        </div>"#,
                slug = html_escape(&dish.slug),
                image = image,
                name = html_escape(&dish.name),
                description = description,
                price = dish.price.display(),
                amount = dish.price.amount,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="popular" data-section="popular">
    <div class="section-header">
        <h2>Popular this week</h2>
        <p>Straight from home kitchens near you</p>
    </div>
    <button class="slider-btn prev" aria-label="Previous dishes">&lsaquo;</button>
    <div class="popular-slider" data-role="popular-slider">
{cards}
    </div>
    <button class="slider-btn next" aria-label="More dishes">&rsaquo;</button>
</section>"#
    )
}

/// Render skeleton placeholders while the menu loads.
pub fn render_popular_skeleton() -> String {
    let card = r#"        <div class="popular-card skeleton">
            <div class="skeleton-image"></div>
            <div class="skeleton-text skeleton-headline"></div>
            <div class="skeleton-text"></div>
            <div class="skeleton-button"></div>
        </div>"#;

    format!(
        r#"<section class="popular skeleton" data-section="popular">
    <div class="popular-slider">
{card}
{card}
{card}
    </div>
</section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_menu;

    #[test]
    fn test_cards_carry_cart_attributes() {
        let html = render_popular(&default_menu());
        assert!(html.contains(r#"data-name="Biryani""#));
        assert!(html.contains(r#"data-price="250""#));
        assert!(html.contains(r#"data-src="/img/dishes/biryani.jpg""#));
    }

    #[test]
    fn test_stepper_controls_present_per_card() {
        let html = render_popular(&default_menu());
        assert_eq!(html.matches("quantity-control").count(), 6);
    }
}
