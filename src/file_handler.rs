use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::info;

use crate::canvas::Canvas;
use crate::error::{SaveError, SaveResult};
use crate::util::time;

/// Prefix of every saved picture's file name
pub const PICTURE_PREFIX: &str = "drawing_";

/// `drawing_<timestamp>.png`
pub fn picture_file_name(timestamp: &str) -> String {
    format!("{PICTURE_PREFIX}{timestamp}.png")
}

/// Writes canvases out as PNG files into one output directory.
pub struct FileHandler {
    output_dir: PathBuf,
    saved_files: Vec<PathBuf>,
}

impl FileHandler {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            saved_files: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written during this session, oldest first
    pub fn saved_files(&self) -> &[PathBuf] {
        &self.saved_files
    }

    /// Save under a name stamped with the current local time.
    pub fn save(&mut self, canvas: &Canvas) -> SaveResult<PathBuf> {
        self.save_as(canvas, &time::file_timestamp())
    }

    /// Save under `drawing_<timestamp>.png`, creating the output directory if needed.
    /// A picture saved earlier in the same second is overwritten.
    pub fn save_as(&mut self, canvas: &Canvas, timestamp: &str) -> SaveResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| SaveError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(picture_file_name(timestamp));
        canvas.pixels().save_with_format(&path, ImageFormat::Png)?;

        info!("Picture saved as {}", path.display());
        self.saved_files.push(path.clone());
        Ok(path)
    }
}
