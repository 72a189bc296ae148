//! # Audio
//!
//! Synthesized sound effects for the snake game. Every effect is a short
//! list of `Tone`s rendered to mono samples; a `ToneSink` plays them.
//!
//! ```text
//! GameEvent ──cues()──▶ [Tone] ──Sound (mute, gain)──▶ dyn ToneSink
//!                                                      ├── SilentSink
//!                                                      └── RodioSink (feature "audio")
//! ```
//!
//! The output device is opened lazily by `Sound::ensure()` on the first
//! user gesture inside the game. Opening is attempted once; a failure is
//! logged and the game stays silent.

pub mod synth;

#[cfg(feature = "audio")]
mod rodio_sink;

use std::fmt;
use std::time::Duration;

use log::{info, warn};

use crate::core::snake::GameEvent;

pub const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One oscillator note with its envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    /// Sweep target, reached exponentially at the end of the tone
    pub end_frequency: Option<f32>,
    pub duration: Duration,
    pub shape: Waveform,
    /// Envelope peak, before the master gain
    pub peak: f32,
    pub attack: Duration,
    /// Delay after the cue starts
    pub start_offset: Duration,
}

impl Tone {
    /// A plain note: 10 ms attack up to `0.8 × volume`.
    pub const fn note(frequency: f32, millis: u64, shape: Waveform, volume: f32) -> Self {
        Self {
            frequency,
            end_frequency: None,
            duration: Duration::from_millis(millis),
            shape,
            peak: 0.8 * volume,
            attack: Duration::from_millis(10),
            start_offset: Duration::ZERO,
        }
    }

    pub const fn after(mut self, millis: u64) -> Self {
        self.start_offset = Duration::from_millis(millis);
        self
    }
}

const STEP: [Tone; 1] = [Tone::note(900.0, 30, Waveform::Square, 0.5)];

const EAT: [Tone; 2] = [
    Tone::note(380.0, 60, Waveform::Triangle, 0.9),
    Tone::note(520.0, 80, Waveform::Triangle, 0.9).after(50),
];

const GAME_OVER: [Tone; 1] = [Tone {
    frequency: 600.0,
    end_frequency: Some(120.0),
    duration: Duration::from_millis(600),
    shape: Waveform::Sawtooth,
    peak: 0.5,
    attack: Duration::from_millis(30),
    start_offset: Duration::ZERO,
}];

/// The tones played for a game event.
pub fn cues(event: GameEvent) -> &'static [Tone] {
    match event {
        GameEvent::Step => &STEP,
        GameEvent::Eat => &EAT,
        GameEvent::GameOver => &GAME_OVER,
    }
}

#[derive(Debug)]
pub enum AudioError {
    /// No output device, or the backend refused to open it
    Unavailable(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Unavailable(reason) => write!(f, "audio output unavailable: {reason}"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Something that can make a tone audible.
pub trait ToneSink {
    /// Play `tone` scaled by the master `gain`. Must not block.
    fn play(&mut self, tone: &Tone, gain: f32);
}

/// Discards everything. Used when sound is compiled out or unavailable.
#[derive(Debug, Default)]
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn play(&mut self, _tone: &Tone, _gain: f32) {}
}

type Opener = Box<dyn FnMut() -> Result<Box<dyn ToneSink>, AudioError>>;

enum Output {
    Closed(Opener),
    Open(Box<dyn ToneSink>),
    Failed,
}

/// Master output: lazy device, mute switch and fixed master gain.
pub struct Sound {
    output: Output,
    volume: f32,
    muted: bool,
}

impl Sound {
    pub fn new(
        opener: impl FnMut() -> Result<Box<dyn ToneSink>, AudioError> + 'static,
        volume: f32,
        muted: bool,
    ) -> Self {
        Self {
            output: Output::Closed(Box::new(opener)),
            volume,
            muted,
        }
    }

    /// The system output device when built with the `audio` feature,
    /// otherwise a silent sink.
    pub fn system(volume: f32, muted: bool) -> Self {
        Self::new(open_system_sink, volume, muted)
    }

    /// Open the device if that has not been tried yet. Returns true when
    /// an output is available.
    pub fn ensure(&mut self) -> bool {
        if let Output::Closed(opener) = &mut self.output {
            self.output = match opener() {
                Ok(sink) => {
                    info!("Audio output opened");
                    Output::Open(sink)
                }
                Err(e) => {
                    warn!("{}; continuing without sound", e);
                    Output::Failed
                }
            };
        }
        matches!(self.output, Output::Open(_))
    }

    pub fn is_open(&self) -> bool {
        matches!(self.output, Output::Open(_))
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// 0 while muted, the configured volume otherwise.
    pub fn gain(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Play the cue for `event`. Does nothing while muted or before the
    /// output was opened.
    pub fn play(&mut self, event: GameEvent) {
        if self.muted {
            return;
        }
        let gain = self.gain();
        if let Output::Open(sink) = &mut self.output {
            for tone in cues(event) {
                sink.play(tone, gain);
            }
        }
    }
}

#[cfg(feature = "audio")]
fn open_system_sink() -> Result<Box<dyn ToneSink>, AudioError> {
    Ok(Box::new(rodio_sink::RodioSink::open()?))
}

#[cfg(not(feature = "audio"))]
fn open_system_sink() -> Result<Box<dyn ToneSink>, AudioError> {
    info!("Built without the audio feature, sound is silent");
    Ok(Box::new(SilentSink))
}
