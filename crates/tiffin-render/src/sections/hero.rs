//! Hero banner with dish search.

use super::html_escape;
use crate::content::HeroContent;

/// Render the hero section.
pub fn render_hero(content: &HeroContent) -> String {
    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <h1 class="hero-headline">{}</h1>
        <p class="hero-subheadline">{}</p>
        <form class="hero-search" data-role="hero-search">
            <input type="search" name="q" placeholder="{}" aria-label="Search dishes">
            <button type="submit">Search</button>
        </form>
    </div>
</section>"#,
        html_escape(&content.headline),
        html_escape(&content.subheadline),
        html_escape(&content.search_placeholder),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_renders_search_form() {
        let html = render_hero(&HeroContent::default());
        assert!(html.contains("hero-search"));
        assert!(html.contains("Ghar ka khana"));
    }
}
