use log::warn;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use super::{AudioError, SAMPLE_RATE, Tone, ToneSink, synth};

/// Plays tones on the default output device. The stream must outlive
/// every sink created from its handle.
pub struct RodioSink {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioSink {
    pub fn open() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Unavailable(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl ToneSink for RodioSink {
    fn play(&mut self, tone: &Tone, gain: f32) {
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, synth::render(tone, gain)));
                sink.detach();
            }
            Err(e) => warn!("Failed to create audio sink: {}", e),
        }
    }
}
