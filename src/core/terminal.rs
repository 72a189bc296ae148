//! # Terminal Session
//!
//! The line editor and command dispatcher, composed into one state machine
//! that owns the display surface while the terminal is mounted.
//!
//! ```text
//!            char              Enter              output drained
//!   Idle ─────────▶ Accumulating ─────▶ Busy ──────────────────▶ Idle
//!     ▲                                  │
//!     │                                  │ "game"
//!     │            remount()             ▼
//!     └──────────────────────────── Suspended
//! ```
//!
//! While `Busy`, keystrokes are queued (up to `MAX_PENDING_KEYS`) and
//! replayed in arrival order once the fresh prompt has been written. Echo
//! never lands in the middle of a response. While `Suspended` every
//! keystroke is ignored; the session comes back only through `remount()`.
//!
//! The event loop must call `pump()` after every batch of input so queued
//! output with a zero delay is flushed right away.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use super::commands::{CLEAR_COMMAND, GAME_COMMAND, GAME_LAUNCH_MESSAGE, WELCOME};
use super::line_editor::{Edit, LineEditor};
use super::profile::Profile;
use super::screen::{Scrollback, Surface, Tint};
use super::typewriter::Typewriter;

/// Keystrokes held while output is animating. Extra keys are dropped.
pub const MAX_PENDING_KEYS: usize = 256;

/// Visual erase: cursor back, blank, cursor back.
const ERASE_SEQUENCE: &str = "\u{8} \u{8}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for input with an empty buffer
    Idle,
    /// Buffer holds unsubmitted characters
    Accumulating,
    /// Output is still being written
    Busy,
    /// The game owns the panel
    Suspended,
}

/// Requests the session makes of its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LaunchGame,
}

pub struct TerminalSession {
    profile: Arc<Profile>,
    editor: LineEditor,
    screen: Scrollback,
    out: Typewriter,
    pending: VecDeque<char>,
    suspended: bool,
}

impl TerminalSession {
    /// Creates a mounted session: header, welcome text and first prompt are queued.
    pub fn new(profile: Arc<Profile>) -> Self {
        let mut session = Self {
            profile,
            editor: LineEditor::new(),
            screen: Scrollback::new(),
            out: Typewriter::new(),
            pending: VecDeque::new(),
            suspended: false,
        };
        session.remount();
        session
    }

    /// Fresh surface, empty buffer, header + welcome + prompt.
    pub fn remount(&mut self) {
        self.out.cancel();
        self.editor.reset();
        self.pending.clear();
        self.suspended = false;

        let delay = self.profile.typing_delay;
        self.out.clear();
        self.out.write(&self.profile.header, Tint::Header);
        self.out.animate(WELCOME, Tint::Body, delay);
        self.out.write(&self.profile.prompt, Tint::Prompt);
        debug!("Terminal session mounted ({})", self.profile.variant.label());
    }

    pub fn state(&self) -> SessionState {
        if self.suspended {
            SessionState::Suspended
        } else if self.out.is_busy() {
            SessionState::Busy
        } else if self.editor.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Accumulating
        }
    }

    pub fn screen(&self) -> &Scrollback {
        &self.screen
    }

    pub fn input(&self) -> &str {
        self.editor.buffer()
    }

    pub fn pending_keys(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.out.next_deadline()
    }

    /// Feed one keystroke.
    pub fn feed(&mut self, ch: char) -> Option<SessionEvent> {
        if self.suspended {
            return None;
        }
        if self.out.is_busy() {
            if self.pending.len() < MAX_PENDING_KEYS {
                self.pending.push_back(ch);
            } else {
                debug!("Dropping keystroke {:?}: pending queue full", ch);
            }
            return None;
        }
        self.process_key(ch)
    }

    /// Release due output, then replay queued keystrokes once the surface is free.
    pub fn pump(&mut self, now: Instant) -> Option<SessionEvent> {
        loop {
            self.out.pump(now, &mut self.screen);
            if self.out.is_busy() || self.suspended {
                return None;
            }
            let ch = self.pending.pop_front()?;
            if let Some(event) = self.process_key(ch) {
                return Some(event);
            }
        }
    }

    fn process_key(&mut self, ch: char) -> Option<SessionEvent> {
        match self.editor.feed(ch) {
            Edit::Appended(c) => {
                let mut buf = [0u8; 4];
                self.screen.write(c.encode_utf8(&mut buf), Tint::Echo);
                None
            }
            Edit::Erased => {
                self.screen.write(ERASE_SEQUENCE, Tint::Body);
                None
            }
            Edit::Unchanged => None,
            Edit::Submitted(line) => {
                self.screen.write("\n", Tint::Body);
                self.dispatch(&line)
            }
        }
    }

    /// Run a completed (already trimmed) command line.
    pub fn dispatch(&mut self, line: &str) -> Option<SessionEvent> {
        info!("Dispatching command: {:?}", line);

        if line == CLEAR_COMMAND {
            self.out.clear();
            self.out.write(&self.profile.header, Tint::Header);
            self.out.write(&self.profile.prompt, Tint::Prompt);
            return None;
        }

        if line == GAME_COMMAND && self.profile.game_enabled {
            self.out.write(GAME_LAUNCH_MESSAGE, Tint::Body);
            self.editor.reset();
            self.pending.clear();
            self.suspended = true;
            return Some(SessionEvent::LaunchGame);
        }

        let response = self.profile.commands.respond(line);
        self.out
            .animate(&response, Tint::Body, self.profile.typing_delay);
        self.out.write(&self.profile.prompt, Tint::Prompt);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::Variant;

    /// Pump at each deadline until all queued output is written.
    fn settle(s: &mut TerminalSession) -> Option<SessionEvent> {
        let mut event = s.pump(Instant::now());
        while let Some(deadline) = s.next_deadline() {
            event = event.or(s.pump(deadline));
        }
        event
    }

    fn session(variant: Variant) -> TerminalSession {
        let mut s = TerminalSession::new(Arc::new(Profile::for_variant(variant)));
        settle(&mut s);
        s
    }

    fn type_line(s: &mut TerminalSession, line: &str) -> Option<SessionEvent> {
        let mut event = None;
        for ch in line.chars() {
            event = event.or(s.feed(ch));
        }
        event = event.or(s.feed('\r'));
        event.or(settle(s))
    }

    #[test]
    fn test_mount_writes_header_welcome_prompt() {
        let s = session(Variant::Arcade);
        let text = s.screen().text();
        assert!(text.starts_with("Type 'help' for available commands."));
        assert!(text.contains("Welcome to my interactive portfolio terminal!"));
        assert!(text.ends_with("vaibhav@portfolio:~$"));
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_echo_is_immediate() {
        let mut s = session(Variant::Arcade);
        s.feed('h');
        s.feed('i');
        assert_eq!(s.state(), SessionState::Accumulating);
        assert!(s.screen().text().ends_with("$ hi"));
    }

    #[test]
    fn test_backspace_on_empty_buffer_changes_nothing() {
        let mut s = session(Variant::Arcade);
        let before = s.screen().text();
        let cursor = s.screen().cursor();
        assert_eq!(s.feed('\u{7f}'), None);
        assert_eq!(s.screen().text(), before);
        assert_eq!(s.screen().cursor(), cursor);
    }

    #[test]
    fn test_backspace_erases_visually() {
        let mut s = session(Variant::Arcade);
        s.feed('a');
        s.feed('b');
        s.feed('\u{7f}');
        assert_eq!(s.input(), "a");
        assert!(s.screen().text().ends_with("$ a"));
    }

    #[test]
    fn test_known_command_renders_response_then_prompt() {
        let mut s = session(Variant::Classic);
        let profile = Profile::for_variant(Variant::Classic);
        let expected = profile.commands.get("skills").unwrap().trim_end();

        // classic types 20ms per char
        type_line(&mut s, "  skills ");

        let text = s.screen().text();
        assert!(text.contains(expected));
        assert!(text.ends_with("vaibhav@portfolio:~$"));
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_unknown_command_echoes_literal() {
        let mut s = session(Variant::Arcade);
        type_line(&mut s, "  Help ");
        let text = s.screen().text();
        assert!(text.contains("Command not found: Help"));
        assert!(text.contains("Type 'help' for a list."));
    }

    #[test]
    fn test_empty_line_gives_fresh_prompt() {
        let mut s = session(Variant::Arcade);
        let prompts_before = s.screen().text().matches("~$").count();
        type_line(&mut s, "   ");
        let text = s.screen().text();
        assert_eq!(text.matches("~$").count(), prompts_before + 1);
        assert!(text.contains("Command not found:\nType 'help' for a list."));
    }

    #[test]
    fn test_clear_redraws_only_header_and_prompt() {
        let mut s = session(Variant::Arcade);
        type_line(&mut s, "about");
        assert!(s.screen().text().contains("motivated"));

        type_line(&mut s, "clear");
        let text = s.screen().text();
        let profile = Profile::for_variant(Variant::Arcade);
        let expected = format!("{}{}", profile.header, profile.prompt.trim_end());
        assert_eq!(text, expected);
    }

    #[test]
    fn test_game_suspends_session() {
        let mut s = session(Variant::Arcade);
        let event = type_line(&mut s, "game");
        assert_eq!(event, Some(SessionEvent::LaunchGame));
        assert_eq!(s.state(), SessionState::Suspended);
        assert!(s.screen().text().contains("Launching Snake..."));

        // keystrokes are ignored while suspended
        assert_eq!(s.feed('x'), None);
        assert_eq!(s.input(), "");
        assert_eq!(s.pending_keys(), 0);
    }

    #[test]
    fn test_game_is_unknown_when_disabled() {
        let mut s = session(Variant::Classic);
        for ch in "game\r".chars() {
            assert_eq!(s.feed(ch), None);
        }
        settle(&mut s);
        assert!(s.screen().text().contains("Command not found: game"));
        assert_ne!(s.state(), SessionState::Suspended);
    }

    #[test]
    fn test_keys_typed_while_busy_are_replayed_in_order() {
        let mut s = session(Variant::Classic);
        let t0 = Instant::now();
        for ch in "about\r".chars() {
            s.feed(ch);
        }
        s.pump(t0);
        assert_eq!(s.state(), SessionState::Busy);

        s.feed('h');
        s.feed('i');
        assert_eq!(s.pending_keys(), 2);
        assert_eq!(s.input(), "");

        settle(&mut s);
        assert_eq!(s.pending_keys(), 0);
        assert_eq!(s.input(), "hi");
        assert!(s.screen().text().ends_with("$ hi"));
    }

    #[test]
    fn test_pending_queue_is_bounded() {
        let mut s = session(Variant::Classic);
        for ch in "about\r".chars() {
            s.feed(ch);
        }
        s.pump(Instant::now());
        for _ in 0..(MAX_PENDING_KEYS + 10) {
            s.feed('x');
        }
        assert_eq!(s.pending_keys(), MAX_PENDING_KEYS);
    }

    #[test]
    fn test_remount_after_game() {
        let mut s = session(Variant::Arcade);
        type_line(&mut s, "game");
        s.remount();
        settle(&mut s);
        assert_eq!(s.state(), SessionState::Idle);
        let text = s.screen().text();
        assert!(!text.contains("Launching Snake"));
        assert!(text.contains("Welcome to my interactive portfolio terminal!"));
    }
}
