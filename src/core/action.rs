//! # Actions
//!
//! Everything that can happen in the portfolio becomes an `Action`.
//! Visitor types a letter? That's `Action::Key(Key::Char(c))`.
//! A game tick fires? That's `Action::GameTick`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns the side effects for the adapter to run.
//! No I/O here: sound and quitting happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + [Effect]
//! ```

use std::time::Instant;

use log::{debug, info};

use super::snake::GameEvent;
use super::state::App;

/// Keyboard input, already stripped of terminal specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Esc,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Key(Key),
    /// Wall clock advanced; drives typing, the cover and the card spring
    Frame(Instant),
    GameTick,
    /// Right-hand panel laid out at this many cells
    SurfaceResized { width: u16, height: u16 },
    ClickBulb,
    /// Pointer over the card, offset from its top centre in pixels
    CardPointer { x_px: f64, y_px: f64 },
    CardReleased,
    PokeCard,
    FlipCard,
    /// Click inside the game panel
    GamePointer,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Quit,
    /// Make sure the audio output is open (first user gesture)
    WakeAudio,
    SetMuted(bool),
    Sound(GameEvent),
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    if !matches!(action, Action::Frame(_) | Action::GameTick) {
        debug!("update: {:?}", action);
    }

    match action {
        Action::Quit => {
            info!("Quit requested");
            vec![Effect::Quit]
        }
        Action::Frame(now) => {
            app.frame(now);
            Vec::new()
        }
        Action::ClickBulb => {
            app.cover.click(app.last_frame);
            Vec::new()
        }
        // the cover is modal: keys only reach it while it is up
        Action::Key(key) if app.cover.is_visible() => {
            if matches!(key, Key::Enter | Key::Char(' ')) {
                app.cover.click(app.last_frame);
            }
            Vec::new()
        }
        _ if app.cover.is_visible() => Vec::new(),
        Action::Key(key) => app.console.key(key),
        Action::GameTick => app.console.game_tick(),
        Action::SurfaceResized { width, height } => {
            app.console.resize_surface(width, height);
            Vec::new()
        }
        Action::CardPointer { x_px, y_px } => {
            app.card.pointer_move(x_px, y_px);
            Vec::new()
        }
        Action::CardReleased => {
            app.card.release();
            Vec::new()
        }
        Action::PokeCard => {
            app.card.poke();
            Vec::new()
        }
        Action::FlipCard => {
            if app.profile.card.back.is_some() {
                app.card.flip();
            }
            Vec::new()
        }
        Action::GamePointer => app.console.pointer(),
    }
}
