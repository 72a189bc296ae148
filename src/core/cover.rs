//! # Cover Page
//!
//! The intro screen: a lamp that, once clicked, fills a block progress bar
//! over two seconds and then slides the cover away. One-shot: after the
//! first click further clicks do nothing, and once gone it never returns.

use std::time::{Duration, Instant};

use log::info;

/// How long the lamp glows while the bar fills.
pub const GLOW_DURATION: Duration = Duration::from_millis(2000);
/// How long the slide-away takes after the bar is full.
pub const SLIDE_DURATION: Duration = Duration::from_millis(800);
/// Number of blocks in the progress bar.
pub const TOTAL_BLOCKS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverPhase {
    /// Lamp off, waiting for the click
    Waiting,
    /// Lamp on, bar filling
    Glowing { started: Instant },
    /// Bar full, cover moving up
    Sliding { started: Instant },
    /// Cover removed
    Done,
}

#[derive(Debug, Clone)]
pub struct Cover {
    phase: CoverPhase,
    progress: u8,
}

impl Default for Cover {
    fn default() -> Self {
        Self::new()
    }
}

impl Cover {
    pub fn new() -> Self {
        Self {
            phase: CoverPhase::Waiting,
            progress: 0,
        }
    }

    /// A cover that is already gone (`--skip-cover`).
    pub fn dismissed() -> Self {
        Self {
            phase: CoverPhase::Done,
            progress: 100,
        }
    }

    pub fn phase(&self) -> CoverPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != CoverPhase::Done
    }

    pub fn lamp_on(&self) -> bool {
        !matches!(self.phase, CoverPhase::Waiting)
    }

    /// Needs per-frame updates.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            CoverPhase::Glowing { .. } | CoverPhase::Sliding { .. }
        )
    }

    /// 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn filled_blocks(&self) -> usize {
        (f64::from(self.progress) / 100.0 * TOTAL_BLOCKS as f64).round() as usize
    }

    /// Click on the bulb. Returns true if this started the intro.
    pub fn click(&mut self, now: Instant) -> bool {
        if self.phase != CoverPhase::Waiting {
            return false;
        }
        info!("Cover lamp switched on");
        self.phase = CoverPhase::Glowing { started: now };
        true
    }

    /// Fraction of the slide completed, eased; 0 before sliding, 1 when done.
    pub fn slide_offset(&self, now: Instant) -> f64 {
        match self.phase {
            CoverPhase::Waiting | CoverPhase::Glowing { .. } => 0.0,
            CoverPhase::Sliding { started } => {
                let t = now.saturating_duration_since(started).as_secs_f64()
                    / SLIDE_DURATION.as_secs_f64();
                ease_out(t.clamp(0.0, 1.0))
            }
            CoverPhase::Done => 1.0,
        }
    }

    /// Advance the animation. Returns true when the cover just finished.
    pub fn update(&mut self, now: Instant) -> bool {
        match self.phase {
            CoverPhase::Glowing { started } => {
                let elapsed = now.saturating_duration_since(started).as_secs_f64();
                let pct = (elapsed / GLOW_DURATION.as_secs_f64() * 100.0).round();
                self.progress = pct.min(100.0) as u8;
                if self.progress >= 100 {
                    self.phase = CoverPhase::Sliding { started: now };
                }
                false
            }
            CoverPhase::Sliding { started } => {
                if now.saturating_duration_since(started) >= SLIDE_DURATION {
                    info!("Cover dismissed");
                    self.phase = CoverPhase::Done;
                    true
                } else {
                    false
                }
            }
            CoverPhase::Waiting | CoverPhase::Done => false,
        }
    }
}

/// Cubic ease-out, close to the slide curve the page uses.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
