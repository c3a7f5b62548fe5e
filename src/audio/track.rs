//! Decoding `.wav` files into interleaved `f32` samples.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use crate::error::{AudioError, AudioResult};

/// A decoded piece of music, ready to loop.
#[derive(Debug, Clone)]
pub struct Track {
    /// Interleaved samples in `-1.0..=1.0`
    samples: Arc<[f32]>,
    channels: u16,
    sample_rate: u32,
}

impl Track {
    /// Parses the bytes of a `.wav` file.
    pub fn decode(bytes: &[u8]) -> AudioResult<Self> {
        let reader = hound::WavReader::new(Cursor::new(bytes))?;
        Self::from_reader(reader)
    }

    pub fn open(path: &Path) -> AudioResult<Self> {
        let reader = hound::WavReader::open(path)?;
        Self::from_reader(reader)
    }

    fn from_reader<R: std::io::Read>(mut reader: hound::WavReader<R>) -> AudioResult<Self> {
        let spec = reader.spec();

        let samples: Result<Vec<f32>, _> = match spec.sample_format {
            hound::SampleFormat::Float => reader.samples::<f32>().collect(),
            hound::SampleFormat::Int => {
                let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|sample| sample.map(|s| s as f32 / max_value))
                    .collect()
            }
        };
        let samples = samples?;

        if spec.channels == 0 || samples.len() < usize::from(spec.channels) {
            return Err(AudioError::EmptyTrack);
        }

        Ok(Self {
            samples: samples.into(),
            channels: spec.channels,
            sample_rate: spec.sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of sample frames (one sample per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }
}
