//! # Console
//!
//! Owner of the right-hand panel. Exactly one of the terminal session or
//! the snake game is mounted at a time, and the switch happens here rather
//! than as a side effect of rendering.
//!
//! ```text
//!              "game"                 50ms later
//!   Terminal ─────────▶ Launching ──────────────▶ Game
//!      ▲                                            │
//!      └──────────────── Esc (remount) ─────────────┘
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;

use super::action::{Effect, Key};
use super::profile::Profile;
use super::snake::{Direction, Grid, ResizeOutcome, SnakeGame};
use super::terminal::{SessionEvent, TerminalSession};

/// Pause between the launch message and the game taking over the panel.
pub const LAUNCH_DELAY: Duration = Duration::from_millis(50);

/// Game options that come from config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    pub tick: Duration,
    pub start_muted: bool,
    /// Fixed RNG seed for food placement; random when `None`
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(90),
            start_muted: false,
            seed: None,
        }
    }
}

pub enum ConsoleMode {
    Terminal,
    /// Launch message shown, hand-off pending
    Launching { due: Option<Instant> },
    Game(Box<SnakeGame>),
}

pub struct Console {
    session: TerminalSession,
    mode: ConsoleMode,
    settings: GameSettings,
    muted: bool,
    /// Last known panel size in terminal cells
    surface: (u16, u16),
    rounds_started: u64,
}

impl Console {
    pub fn new(profile: Arc<Profile>, settings: GameSettings) -> Self {
        Self {
            session: TerminalSession::new(profile),
            mode: ConsoleMode::Terminal,
            settings,
            muted: settings.start_muted,
            surface: (0, 0),
            rounds_started: 0,
        }
    }

    pub fn mode(&self) -> &ConsoleMode {
        &self.mode
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn game(&self) -> Option<&SnakeGame> {
        match &self.mode {
            ConsoleMode::Game(game) => Some(game),
            _ => None,
        }
    }

    pub fn in_game(&self) -> bool {
        matches!(self.mode, ConsoleMode::Game(_))
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.mode {
            ConsoleMode::Terminal => self.session.next_deadline(),
            ConsoleMode::Launching { due } => due,
            ConsoleMode::Game(_) => None,
        }
    }

    pub fn key(&mut self, key: Key) -> Vec<Effect> {
        match &mut self.mode {
            ConsoleMode::Terminal => {
                let ch = match key {
                    Key::Char(c) => c,
                    Key::Enter => '\r',
                    Key::Backspace => '\u{7f}',
                    _ => return Vec::new(),
                };
                if let Some(SessionEvent::LaunchGame) = self.session.feed(ch) {
                    self.begin_launch();
                }
                Vec::new()
            }
            ConsoleMode::Launching { .. } => Vec::new(),
            ConsoleMode::Game(game) => {
                let mut effects = vec![Effect::WakeAudio];
                match key {
                    Key::Esc => {
                        self.exit_game();
                    }
                    Key::Char('m' | 'M') => {
                        self.muted = !self.muted;
                        info!("Sound {}", if self.muted { "muted" } else { "unmuted" });
                        effects.push(Effect::SetMuted(self.muted));
                    }
                    other => {
                        if let Some(dir) = steering(other) {
                            game.steer(dir);
                        }
                    }
                }
                effects
            }
        }
    }

    /// A click inside the game panel: only wakes the audio output.
    pub fn pointer(&mut self) -> Vec<Effect> {
        if self.in_game() {
            vec![Effect::WakeAudio]
        } else {
            Vec::new()
        }
    }

    /// Release due terminal output and complete a pending launch.
    pub fn pump(&mut self, now: Instant) {
        match &mut self.mode {
            ConsoleMode::Terminal => {
                if let Some(SessionEvent::LaunchGame) = self.session.pump(now) {
                    self.begin_launch();
                    self.pump(now);
                }
            }
            ConsoleMode::Launching { due } => {
                // the launch message is still flushed through the session
                self.session.pump(now);
                let at = *due.get_or_insert(now + LAUNCH_DELAY);
                if now >= at {
                    self.start_game();
                }
            }
            ConsoleMode::Game(_) => {}
        }
    }

    /// One simulation step. Returns the sounds to play.
    pub fn game_tick(&mut self) -> Vec<Effect> {
        let ConsoleMode::Game(game) = &mut self.mode else {
            return Vec::new();
        };
        match game.tick() {
            Some(event) if !self.muted => vec![Effect::Sound(event)],
            _ => Vec::new(),
        }
    }

    /// The panel was laid out at `width` × `height` cells.
    pub fn resize_surface(&mut self, width: u16, height: u16) {
        if self.surface == (width, height) {
            return;
        }
        self.surface = (width, height);
        if let ConsoleMode::Game(game) = &mut self.mode {
            let outcome = game.resize(Grid::for_surface(width, height));
            if outcome != ResizeOutcome::Unchanged {
                info!("Game board resized to {width}x{height} cells: {:?}", outcome);
            }
        }
    }

    fn begin_launch(&mut self) {
        info!("Launching snake");
        self.mode = ConsoleMode::Launching { due: None };
    }

    fn start_game(&mut self) {
        let grid = Grid::for_surface(self.surface.0, self.surface.1);
        let game = match self.settings.seed {
            Some(seed) => SnakeGame::seeded(grid, seed.wrapping_add(self.rounds_started)),
            None => SnakeGame::new(grid),
        };
        self.rounds_started += 1;
        self.mode = ConsoleMode::Game(Box::new(game));
    }

    fn exit_game(&mut self) {
        info!("Leaving snake, remounting terminal");
        self.mode = ConsoleMode::Terminal;
        self.session.remount();
    }
}

fn steering(key: Key) -> Option<Direction> {
    match key {
        Key::Up | Key::Char('w' | 'W') => Some(Direction::Up),
        Key::Down | Key::Char('s' | 'S') => Some(Direction::Down),
        Key::Left | Key::Char('a' | 'A') => Some(Direction::Left),
        Key::Right | Key::Char('d' | 'D') => Some(Direction::Right),
        _ => None,
    }
}
