//! # Application State
//!
//! Core state for the portfolio. Domain logic only, no TUI-specific
//! types. Presentation state (scroll offsets, hit areas) lives in `tui`.
//!
//! ```text
//! App
//! ├── profile: Arc<Profile>     // variant, commands, prompt, card text
//! ├── cover: Cover              // intro screen, modal until dismissed
//! ├── card: CardTilt            // badge tilt + spring
//! ├── console: Console          // terminal session or snake game
//! └── last_frame: Instant       // clock of the latest Frame action
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Instant;

use log::info;

use super::config::ResolvedConfig;
use super::console::{Console, GameSettings};
use super::cover::Cover;
use super::id_card::CardTilt;
use super::profile::Profile;

pub struct App {
    pub profile: Arc<Profile>,
    pub cover: Cover,
    pub card: CardTilt,
    pub console: Console,
    pub last_frame: Instant,
}

impl App {
    pub fn new(profile: Profile, settings: GameSettings, show_cover: bool, now: Instant) -> Self {
        let profile = Arc::new(profile);
        Self {
            console: Console::new(Arc::clone(&profile), settings),
            profile,
            cover: if show_cover {
                Cover::new()
            } else {
                Cover::dismissed()
            },
            card: CardTilt::new(),
            last_frame: now,
        }
    }

    pub fn from_config(config: &ResolvedConfig, now: Instant) -> Self {
        info!(
            "Starting portfolio: variant={}, cover={}",
            config.variant.label(),
            !config.skip_cover
        );
        Self::new(
            config.profile(),
            config.game_settings(),
            !config.skip_cover,
            now,
        )
    }

    /// Advance every time-driven part to `now`.
    pub(crate) fn frame(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.cover.update(now);
        self.card.update(dt);
        self.console.pump(now);
    }

    /// Something on screen moves without input; the adapter should keep
    /// drawing at frame rate.
    pub fn is_animating(&self) -> bool {
        self.cover.is_animating() || self.card.is_animating()
    }

    /// Earliest moment queued terminal output becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.console.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::Variant;
    use crate::core::terminal::SessionState;
    use crate::test_support::{test_app, test_app_with_cover};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app(Variant::Arcade);
        assert!(!app.cover.is_visible());
        assert!(!app.is_animating());
        assert!(!app.console.in_game());
        assert_eq!(app.console.session().state(), SessionState::Idle);
    }

    #[test]
    fn test_cover_shown_unless_skipped() {
        let app = test_app_with_cover(Variant::Classic);
        assert!(app.cover.is_visible());
    }

    #[test]
    fn test_classic_typing_exposes_deadline() {
        let now = Instant::now();
        let mut app = App::new(
            Profile::for_variant(Variant::Classic),
            GameSettings::default(),
            false,
            now,
        );
        app.frame(now);
        // welcome text is still typing
        assert!(app.next_deadline().is_some());
    }
}
