//! Sample rendering for `Tone`s: one oscillator, optional exponential
//! frequency sweep, linear attack and exponential decay envelope.

use std::time::Duration;

use super::{SAMPLE_RATE, Tone, Waveform};

/// Level the decay ramps down to; zero is unreachable exponentially.
const DECAY_FLOOR: f32 = 0.0001;

impl Waveform {
    /// One period of the wave, `phase` in `0.0..1.0`, output in `-1.0..=1.0`.
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * std::f32::consts::TAU).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

/// Gain envelope at `t` seconds into a tone.
fn envelope(tone: &Tone, t: f32) -> f32 {
    let attack = tone.attack.as_secs_f32();
    let total = tone.duration.as_secs_f32();
    if t < attack {
        return tone.peak * (t / attack);
    }
    let decay = (total - attack).max(f32::EPSILON);
    let progress = ((t - attack) / decay).min(1.0);
    // exponential ramp from peak to the floor
    tone.peak * (DECAY_FLOOR / tone.peak).powf(progress)
}

/// Instantaneous frequency at `t` seconds.
fn frequency(tone: &Tone, t: f32) -> f32 {
    match tone.end_frequency {
        Some(end) => {
            let progress = (t / tone.duration.as_secs_f32()).min(1.0);
            tone.frequency * (end / tone.frequency).powf(progress)
        }
        None => tone.frequency,
    }
}

/// Whole samples covering `d` at `SAMPLE_RATE`.
pub fn sample_count(d: Duration) -> usize {
    (d.as_micros() * u128::from(SAMPLE_RATE) / 1_000_000) as usize
}

/// Mono samples at `SAMPLE_RATE`, scaled by the master `gain`. Any start
/// offset is rendered as leading silence.
pub fn render(tone: &Tone, gain: f32) -> Vec<f32> {
    let rate = SAMPLE_RATE as f32;
    let lead = sample_count(tone.start_offset);
    let body = sample_count(tone.duration);

    let mut samples = vec![0.0; lead];
    samples.reserve(body);
    let mut phase = 0.0f32;
    for i in 0..body {
        let t = i as f32 / rate;
        samples.push(tone.shape.sample(phase) * envelope(tone, t) * gain);
        phase = (phase + frequency(tone, t) / rate).fract();
    }
    samples
}
