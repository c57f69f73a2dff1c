//! Kitchen-tour video section.

use super::html_escape;
use crate::content::VideoContent;
use tiffin_page::video::VideoPlayer;

/// Render the video section with its custom play/pause control.
pub fn render_video(content: &VideoContent, player: Option<&VideoPlayer>) -> String {
    let Some(player) = player else {
        return String::new();
    };

    let poster = content
        .poster
        .as_deref()
        .map(|p| format!(r#" poster="{}""#, html_escape(p)))
        .unwrap_or_default();

    let mut control_classes = vec!["video-control"];
    if !player.control_visible() {
        control_classes.push("hidden");
    }
    let disabled = if player.disabled() { " disabled" } else { "" };

    format!(
        r#"<section class="kitchen-video" data-section="video">
    <video data-role="kitchen-video" src="{src}"{poster} playsinline></video>
    <button class="{control_classes}"{disabled} aria-label="Play or pause">{glyph}</button>
</section>"#,
        src = html_escape(&content.src),
        poster = poster,
        control_classes = control_classes.join(" "),
        disabled = disabled,
        glyph = player.glyph().as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiffin_page::video::ControlGlyph;

    #[test]
    fn test_initial_control_shows_play_glyph() {
        let mut player = VideoPlayer::new();
        player.on_loaded();
        let html = render_video(&VideoContent::default(), Some(&player));

        assert!(html.contains(ControlGlyph::Play.as_str()));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn test_failed_video_degrades_control() {
        let mut player = VideoPlayer::new();
        player.on_error("404");
        let html = render_video(&VideoContent::default(), Some(&player));

        assert!(html.contains(ControlGlyph::Error.as_str()));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_missing_section_renders_nothing() {
        assert_eq!(render_video(&VideoContent::default(), None), "");
    }
}
