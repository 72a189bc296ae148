//! # Output Renderer
//!
//! Queues writes for the display surface and releases them over time so
//! responses appear character by character. Instant writes (prompts, the
//! header) go through the same queue, which keeps them ordered behind any
//! animated text that is still being typed.
//!
//! The renderer never sleeps. The event loop calls `pump(now, surface)` and
//! asks `next_deadline()` when to wake up again.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::screen::{Surface, Tint};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    /// One animated character followed by a pause
    Char { ch: char, tint: Tint, pause: Duration },
    /// A block of text written in one go
    Text { text: String, tint: Tint },
    Clear,
}

impl Op {
    fn pause(&self) -> Duration {
        match self {
            Op::Char { pause, .. } => *pause,
            Op::Text { .. } | Op::Clear => Duration::ZERO,
        }
    }
}

#[derive(Debug, Default)]
pub struct Typewriter {
    queue: VecDeque<Op>,
    /// When the head of the queue may be written. `None` = on the next pump.
    next_due: Option<Instant>,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `text` to be written one character at a time, `delay` apart.
    /// A zero delay still goes through the queue but is released in one pump.
    pub fn animate(&mut self, text: &str, tint: Tint, delay: Duration) {
        self.queue.extend(text.chars().map(|ch| Op::Char {
            ch,
            tint,
            pause: delay,
        }));
    }

    /// Queue `text` to be written all at once, after anything already queued.
    pub fn write(&mut self, text: &str, tint: Tint) {
        if !text.is_empty() {
            self.queue.push_back(Op::Text {
                text: text.to_string(),
                tint,
            });
        }
    }

    /// Queue a surface reset.
    pub fn clear(&mut self) {
        self.queue.push_back(Op::Clear);
    }

    /// Drop everything still queued (used when the surface is torn down).
    pub fn cancel(&mut self) {
        self.queue.clear();
        self.next_due = None;
    }

    pub fn is_busy(&self) -> bool {
        !self.queue.is_empty()
    }

    /// When the next queued write becomes due, if anything is queued and
    /// has been scheduled by a previous pump.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.is_busy() { self.next_due } else { None }
    }

    /// Write everything that is due at `now`. Returns the number of ops applied.
    pub fn pump(&mut self, now: Instant, surface: &mut dyn Surface) -> usize {
        let mut applied = 0;
        while let Some(op) = self.queue.front() {
            let due = *self.next_due.get_or_insert(now);
            if due > now {
                break;
            }
            let pause = op.pause();
            let Some(op) = self.queue.pop_front() else {
                break;
            };
            match op {
                Op::Char { ch, tint, .. } => {
                    let mut buf = [0u8; 4];
                    surface.write(ch.encode_utf8(&mut buf), tint);
                }
                Op::Text { text, tint } => surface.write(&text, tint),
                Op::Clear => surface.clear(),
            }
            applied += 1;
            self.next_due = Some(due + pause);
        }
        if self.queue.is_empty() {
            self.next_due = None;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::Scrollback;

    #[test]
    fn test_zero_delay_releases_everything_in_one_pump() {
        let mut tw = Typewriter::new();
        let mut screen = Scrollback::new();
        tw.animate("hello", Tint::Body, Duration::ZERO);
        tw.write("$ ", Tint::Prompt);
        assert!(tw.is_busy());

        tw.pump(Instant::now(), &mut screen);
        assert!(!tw.is_busy());
        assert_eq!(screen.text(), "hello$");
    }

    #[test]
    fn test_paced_output_one_char_per_delay() {
        let mut tw = Typewriter::new();
        let mut screen = Scrollback::new();
        let delay = Duration::from_millis(20);
        let t0 = Instant::now();
        tw.animate("abc", Tint::Body, delay);

        assert_eq!(tw.pump(t0, &mut screen), 1);
        assert_eq!(screen.text(), "a");
        assert_eq!(tw.next_deadline(), Some(t0 + delay));

        // not yet due
        assert_eq!(tw.pump(t0 + Duration::from_millis(10), &mut screen), 0);
        assert_eq!(tw.pump(t0 + delay, &mut screen), 1);
        assert_eq!(screen.text(), "ab");

        // late pump catches up
        assert_eq!(tw.pump(t0 + Duration::from_millis(100), &mut screen), 1);
        assert_eq!(screen.text(), "abc");
        assert!(!tw.is_busy());
        assert_eq!(tw.next_deadline(), None);
    }

    #[test]
    fn test_instant_write_waits_for_animation() {
        let mut tw = Typewriter::new();
        let mut screen = Scrollback::new();
        let delay = Duration::from_millis(20);
        let t0 = Instant::now();
        tw.animate("ok", Tint::Body, delay);
        tw.write("$ ", Tint::Prompt);

        tw.pump(t0, &mut screen);
        tw.pump(t0 + delay, &mut screen);
        // the trailing pause after the last char still holds the prompt back
        assert_eq!(screen.text(), "ok");
        tw.pump(t0 + delay * 2, &mut screen);
        assert_eq!(screen.text(), "ok$");
    }

    #[test]
    fn test_clear_is_ordered() {
        let mut tw = Typewriter::new();
        let mut screen = Scrollback::new();
        screen.write("old output\n", Tint::Body);
        tw.clear();
        tw.write("header\n", Tint::Header);
        tw.pump(Instant::now(), &mut screen);
        assert_eq!(screen.text(), "header\n");
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut tw = Typewriter::new();
        tw.animate("long text", Tint::Body, Duration::from_millis(50));
        tw.cancel();
        assert!(!tw.is_busy());
        assert_eq!(tw.next_deadline(), None);
    }
}
