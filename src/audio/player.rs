use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info};
use parking_lot::Mutex;

use super::track::Track;
use crate::error::{AudioError, AudioResult};

/// A track plus how far into it playback has got
struct Playback {
    track: Track,
    /// Position in source frames; fractional when the rates differ
    cursor: f64,
}

/// State shared with the audio callback thread
struct Mixer {
    playback: Option<Playback>,
    volume: f32,
}

impl Mixer {
    /// Fills `out` (interleaved, `channels` wide at `sample_rate`) from the
    /// current track, wrapping back to its start when it runs out.
    fn fill(&mut self, out: &mut [f32], channels: u16, sample_rate: u32) {
        let channels = usize::from(channels.max(1));
        let Some(playback) = self.playback.as_mut() else {
            out.fill(0.0);
            return;
        };

        let source_channels = usize::from(playback.track.channels());
        let frames = playback.track.frames();
        let step = f64::from(playback.track.sample_rate()) / f64::from(sample_rate.max(1));
        let samples = playback.track.samples();

        for frame in out.chunks_mut(channels) {
            let index = (playback.cursor as usize).min(frames - 1);
            for (channel, sample) in frame.iter_mut().enumerate() {
                let source_channel = channel.min(source_channels - 1);
                *sample = samples[index * source_channels + source_channel] * self.volume;
            }
            playback.cursor += step;
            while playback.cursor >= frames as f64 {
                playback.cursor -= frames as f64;
            }
        }
    }
}

/// Loops one track at a time on the default output device.
pub struct MusicPlayer {
    mixer: Arc<Mutex<Mixer>>,
    /// Kept alive for as long as the player; dropping it stops the sound
    stream: Option<cpal::Stream>,
}

impl MusicPlayer {
    /// Opens the default output device and starts an (initially silent) stream.
    pub fn open(volume: f32) -> AudioResult<Self> {
        let mixer = Arc::new(Mutex::new(Mixer { playback: None, volume }));

        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let channels = config.channels();
        let sample_rate = config.sample_rate();

        let callback_mixer = Arc::clone(&mixer);
        let audio_callback = move |output_buffer: &mut [f32], _: &cpal::OutputCallbackInfo| {
            callback_mixer.lock().fill(output_buffer, channels, sample_rate);
        };

        let error_callback = |err| {
            error!("An error occurred on the audio stream: {}", err);
        };

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => {
                device.build_output_stream(&config.into(), audio_callback, error_callback, None)?
            }
            format => return Err(AudioError::UnsupportedSampleFormat(format.to_string())),
        };
        stream.play()?;

        info!("Audio output: {} channels at {} Hz", channels, sample_rate);
        Ok(Self {
            mixer,
            stream: Some(stream),
        })
    }

    /// A player with no device behind it. Everything is accepted and nothing is heard.
    pub fn silent(volume: f32) -> Self {
        Self {
            mixer: Arc::new(Mutex::new(Mixer { playback: None, volume })),
            stream: None,
        }
    }

    pub fn has_device(&self) -> bool {
        self.stream.is_some()
    }

    /// Replaces whatever is playing with `track`, looping forever.
    pub fn play_looping(&self, track: Track) {
        self.mixer.lock().playback = Some(Playback { track, cursor: 0.0 });
    }

    pub fn stop(&self) {
        self.mixer.lock().playback = None;
    }

    pub fn is_playing(&self) -> bool {
        self.mixer.lock().playback.is_some()
    }
}
