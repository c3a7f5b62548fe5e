use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a picture to disk
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode picture: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for save operations
pub type SaveResult<T> = Result<T, SaveError>;

/// Errors that can occur while loading or playing music
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("No default output device available")]
    NoOutputDevice,

    #[error("Unsupported sample format: {0}")]
    UnsupportedSampleFormat(String),

    #[error("Failed to query output config: {0}")]
    OutputConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("Failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("Failed to decode WAV file: {0}")]
    Decode(#[from] hound::Error),

    #[error("Track has no samples")]
    EmptyTrack,
}

/// Result type for audio operations
pub type AudioResult<T> = Result<T, AudioError>;
