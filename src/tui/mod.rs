//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! turns crossterm input into `core::Action` values and carries out the
//! effects `update()` hands back (sound, quitting).
//!
//! This is the only module that knows about ratatui, crossterm and the
//! audio device.
//!
//! ## Scheduling
//!
//! One `tokio::select!` loop waits on whichever comes first:
//!
//! - a terminal event from crossterm's `EventStream`
//! - the game tick (only while the snake is mounted)
//! - the frame interval (only while the cover or card spring is moving)
//! - the typewriter's next deadline
//! - the 1 s clock
//!
//! Every wake-up feeds `Action::Frame(now)` and redraws. When nothing moves
//! and nobody types, the loop sleeps until the next clock tick.

mod component;
mod components;
mod event;
mod ui;

use std::future;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::layout::{Position, Rect};
use tokio::time::{Interval, MissedTickBehavior, interval_at, sleep_until};

use crate::audio::Sound;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardHits, TerminalViewState, format_clock};
use crate::tui::event::TuiEvent;

/// Redraw period while something animates (~60 fps).
const FRAME_PERIOD: Duration = Duration::from_millis(16);
const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub terminal_view: TerminalViewState,
    // Hit areas from the last render
    pub card_hits: CardHits,
    pub bulb_hit: Option<Rect>,
    pub console_area: Option<Rect>,
    /// Pointer is currently tilting the card
    pub pointer_on_card: bool,
    /// Board area inside the console panel, in cells
    pub game_surface: (u16, u16),
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            terminal_view: TerminalViewState::new(),
            card_hits: CardHits::default(),
            bulb_hit: None,
            console_area: None,
            pointer_on_card: false,
            game_surface: (0, 0),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// A fixed-period timer that can be switched on and off.
///
/// While inactive, `tick()` never completes, so it can sit in a
/// `select!` arm unconditionally. Switching it on starts a fresh period.
pub struct Repeating {
    period: Duration,
    interval: Option<Interval>,
}

impl Repeating {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn start(&mut self) {
        let mut interval = interval_at(tokio::time::Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn cancel(&mut self) {
        self.interval = None;
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Start or cancel to match `active`. Already-running timers keep
    /// their phase.
    pub fn set_active(&mut self, active: bool) {
        match (active, self.is_active()) {
            (true, false) => self.start(),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    pub async fn tick(&mut self) {
        match &mut self.interval {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(tokio::time::Instant::from_std(at)).await,
        None => future::pending::<()>().await,
    }
}

fn hit(area: Option<Rect>, col: u16, row: u16) -> bool {
    area.is_some_and(|r| r.contains(Position::new(col, row)))
}

/// Map a terminal event to core actions, using the hit areas of the last
/// render. Scrolling is handled here directly.
fn route_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Vec<Action> {
    match event {
        TuiEvent::ForceQuit => vec![Action::Quit],
        TuiEvent::Key(key) => vec![Action::Key(key)],
        TuiEvent::Resize => Vec::new(),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            if !app.cover.is_visible() && !app.console.in_game() {
                tui.terminal_view.handle_event(&event);
            }
            Vec::new()
        }
        TuiEvent::MouseDown(col, row) => {
            if app.cover.is_visible() {
                return if hit(tui.bulb_hit, col, row) {
                    vec![Action::ClickBulb]
                } else {
                    Vec::new()
                };
            }
            if tui.card_hits.on_poke(col, row) {
                vec![Action::PokeCard]
            } else if tui.card_hits.on_card(col, row) {
                let mut actions = vec![Action::FlipCard];
                if let Some((x_px, y_px)) = tui.card_hits.pointer_offset(col, row) {
                    tui.pointer_on_card = true;
                    actions.push(Action::CardPointer { x_px, y_px });
                }
                actions
            } else if hit(tui.console_area, col, row) {
                vec![Action::GamePointer]
            } else {
                Vec::new()
            }
        }
        TuiEvent::MouseMove(col, row) => {
            if !app.cover.is_visible()
                && tui.card_hits.on_card(col, row)
                && let Some((x_px, y_px)) = tui.card_hits.pointer_offset(col, row)
            {
                tui.pointer_on_card = true;
                vec![Action::CardPointer { x_px, y_px }]
            } else if tui.pointer_on_card {
                tui.pointer_on_card = false;
                vec![Action::CardReleased]
            } else {
                Vec::new()
            }
        }
        TuiEvent::MouseUp(_, _) => {
            if tui.pointer_on_card {
                tui.pointer_on_card = false;
                vec![Action::CardReleased]
            } else {
                Vec::new()
            }
        }
    }
}

/// Carry out effects. Returns true when the app should quit.
fn apply_effects(effects: Vec<Effect>, sound: &mut Sound) -> bool {
    let mut quit = false;
    for effect in effects {
        match effect {
            Effect::Quit => quit = true,
            Effect::WakeAudio => {
                sound.ensure();
            }
            Effect::SetMuted(muted) => sound.set_muted(muted),
            Effect::Sound(event) => sound.play(event),
        }
    }
    quit
}

fn wall_clock() -> String {
    format_clock(Local::now().naive_local())
}

pub async fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config, Instant::now());
    let mut tui = TuiState::new();
    let mut sound = Sound::system(config.volume, config.muted);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut events = EventStream::new();
    let mut game_clock = Repeating::new(app.console.settings().tick);
    let mut frames = Repeating::new(FRAME_PERIOD);
    let mut seconds = Repeating::new(CLOCK_PERIOD);
    seconds.start();
    let mut clock = wall_clock();

    let result = loop {
        update(&mut app, Action::Frame(Instant::now()));

        let now = app.last_frame;
        if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now, &clock)) {
            break Err(e);
        }
        let (width, height) = tui.game_surface;
        update(&mut app, Action::SurfaceResized { width, height });

        game_clock.set_active(app.console.in_game());
        frames.set_active(app.is_animating());
        let deadline = app.next_deadline();

        let mut actions = Vec::new();
        tokio::select! {
            biased;

            maybe_event = events.next() => match maybe_event {
                Some(Ok(raw)) => {
                    if let Some(event) = event::translate(raw) {
                        actions = route_event(event, &app, &mut tui);
                    }
                }
                Some(Err(e)) => {
                    warn!("Terminal event stream failed: {}", e);
                    break Err(e);
                }
                None => break Ok(()),
            },
            _ = game_clock.tick() => actions.push(Action::GameTick),
            _ = sleep_until_deadline(deadline) => {}
            _ = frames.tick() => {}
            _ = seconds.tick() => {
                clock = wall_clock();
            }
        }

        let mut quit = false;
        for action in actions {
            quit |= apply_effects(update(&mut app, action), &mut sound);
        }
        if quit {
            debug!("Leaving event loop");
            break Ok(());
        }
    };

    ratatui::restore();
    result
}
