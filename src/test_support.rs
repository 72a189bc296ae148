//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::audio::{Tone, ToneSink};
use crate::core::action::{Action, update};
use crate::core::commands::Variant;
use crate::core::console::GameSettings;
use crate::core::profile::Profile;
use crate::core::state::App;

/// A sink that remembers every tone it was asked to play.
#[derive(Clone, Default)]
pub struct RecordingSink {
    played: Rc<RefCell<Vec<(Tone, f32)>>>,
}

impl RecordingSink {
    pub fn played(&self) -> Vec<(Tone, f32)> {
        self.played.borrow().clone()
    }
}

impl ToneSink for RecordingSink {
    fn play(&mut self, tone: &Tone, gain: f32) {
        self.played.borrow_mut().push((*tone, gain));
    }
}

fn build(variant: Variant, show_cover: bool) -> App {
    let now = Instant::now();
    let settings = GameSettings {
        seed: Some(7),
        ..GameSettings::default()
    };
    let mut app = App::new(Profile::for_variant(variant), settings, show_cover, now);
    update(&mut app, Action::Frame(now));
    app
}

/// An app past the cover with the welcome text already pumped.
pub fn test_app(variant: Variant) -> App {
    build(variant, false)
}

/// An app still showing the cover page.
pub fn test_app_with_cover(variant: Variant) -> App {
    build(variant, true)
}
