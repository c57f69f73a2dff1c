//! Hero video player control.
//!
//! Models the custom play/pause control: the glyph mirrors playback,
//! a load failure degrades the control instead of breaking the page,
//! and the control auto-hides a fixed delay after playback starts.

use std::time::{Duration, Instant};
use thiserror::Error;

/// Raised when playback cannot start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VideoError {
    /// The media failed to load; the control is degraded.
    #[error("Unable to play video. Please check if the video file exists.")]
    Unplayable,
}

/// Playback state of the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Playing,
}

/// Glyph shown on the custom control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlGlyph {
    Play,
    Pause,
    Error,
}

impl ControlGlyph {
    /// The character rendered on the button.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlGlyph::Play => "\u{25b6}",
            ControlGlyph::Pause => "\u{23f8}",
            ControlGlyph::Error => "\u{274c}",
        }
    }
}

/// Command for the page host to apply to the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// The hero video's control state.
#[derive(Debug, Clone)]
pub struct VideoPlayer {
    playback: Playback,
    loaded: bool,
    failed: bool,
    hidden_after_play: bool,
    hide_at: Option<Instant>,
    auto_hide: Duration,
}

impl VideoPlayer {
    /// Default delay before the control hides during playback.
    pub const AUTO_HIDE: Duration = Duration::from_secs(2);

    /// Create a paused player with the control showing its play glyph.
    pub fn new() -> Self {
        Self {
            playback: Playback::Paused,
            loaded: false,
            failed: false,
            hidden_after_play: false,
            hide_at: None,
            auto_hide: Self::AUTO_HIDE,
        }
    }

    /// Current playback state.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Glyph for the control button.
    pub fn glyph(&self) -> ControlGlyph {
        if self.failed {
            ControlGlyph::Error
        } else if self.playback == Playback::Playing {
            ControlGlyph::Pause
        } else {
            ControlGlyph::Play
        }
    }

    /// Whether the control is currently visible.
    pub fn control_visible(&self) -> bool {
        self.loaded && !self.hidden_after_play
    }

    /// Whether the control is disabled (after a load failure).
    pub fn disabled(&self) -> bool {
        self.failed
    }

    /// Media data loaded; reveal the control.
    pub fn on_loaded(&mut self) {
        self.loaded = true;
        tracing::debug!("video loaded");
    }

    /// Media failed to load; degrade the control, never the page.
    pub fn on_error(&mut self, detail: &str) {
        self.failed = true;
        self.loaded = true;
        tracing::warn!(detail, "video loading error");
    }

    /// Toggle playback.
    ///
    /// Returns the command to apply to the media element, or an error
    /// when the media is unplayable.
    pub fn toggle(&mut self, now: Instant) -> Result<PlaybackCommand, VideoError> {
        if self.failed {
            return Err(VideoError::Unplayable);
        }
        match self.playback {
            Playback::Paused => {
                self.on_play(now);
                Ok(PlaybackCommand::Play)
            }
            Playback::Playing => {
                self.on_pause();
                Ok(PlaybackCommand::Pause)
            }
        }
    }

    /// Playback started; schedule the control to hide.
    pub fn on_play(&mut self, now: Instant) {
        self.playback = Playback::Playing;
        self.hidden_after_play = false;
        self.hide_at = Some(now + self.auto_hide);
    }

    /// Playback paused; restore the control.
    pub fn on_pause(&mut self) {
        self.playback = Playback::Paused;
        self.hidden_after_play = false;
        self.hide_at = None;
    }

    /// Playback reached the end; restore the control.
    pub fn on_ended(&mut self) {
        self.on_pause();
    }

    /// Apply deadline-based effects: hide the control once its delay
    /// elapses during playback.
    pub fn tick(&mut self, now: Instant) {
        if self.playback == Playback::Playing {
            if let Some(hide_at) = self.hide_at {
                if now >= hide_at {
                    self.hidden_after_play = true;
                    self.hide_at = None;
                }
            }
        }
    }

    /// Tab visibility changed; pause playback when hidden.
    pub fn on_visibility_change(&mut self, hidden: bool) -> Option<PlaybackCommand> {
        if hidden && self.playback == Playback::Playing {
            self.on_pause();
            Some(PlaybackCommand::Pause)
        } else {
            None
        }
    }
}

impl Default for VideoPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_play_pause() {
        let mut player = VideoPlayer::new();
        player.on_loaded();
        let now = Instant::now();

        assert_eq!(player.toggle(now), Ok(PlaybackCommand::Play));
        assert_eq!(player.glyph(), ControlGlyph::Pause);

        assert_eq!(player.toggle(now), Ok(PlaybackCommand::Pause));
        assert_eq!(player.glyph(), ControlGlyph::Play);
    }

    #[test]
    fn test_load_error_degrades_control() {
        let mut player = VideoPlayer::new();
        player.on_error("404");

        assert_eq!(player.glyph(), ControlGlyph::Error);
        assert!(player.disabled());
        assert_eq!(player.toggle(Instant::now()), Err(VideoError::Unplayable));
    }

    #[test]
    fn test_control_hides_after_play_delay() {
        let mut player = VideoPlayer::new();
        player.on_loaded();
        let now = Instant::now();
        player.on_play(now);

        player.tick(now + Duration::from_millis(500));
        assert!(player.control_visible());

        player.tick(now + Duration::from_secs(3));
        assert!(!player.control_visible());

        // Pausing restores the control.
        player.on_pause();
        assert!(player.control_visible());
    }

    #[test]
    fn test_ended_restores_play_glyph() {
        let mut player = VideoPlayer::new();
        player.on_loaded();
        player.on_play(Instant::now());
        player.on_ended();

        assert_eq!(player.glyph(), ControlGlyph::Play);
        assert_eq!(player.playback(), Playback::Paused);
    }

    #[test]
    fn test_hidden_tab_pauses_playback() {
        let mut player = VideoPlayer::new();
        player.on_loaded();
        player.on_play(Instant::now());

        assert_eq!(
            player.on_visibility_change(true),
            Some(PlaybackCommand::Pause)
        );
        assert_eq!(player.playback(), Playback::Paused);

        // Already paused: nothing to do.
        assert_eq!(player.on_visibility_change(true), None);
    }
}
