use std::path::{Path, PathBuf};

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// The title track plus the pool of drawing tracks.
#[derive(Debug, Clone, Default)]
pub struct MusicLibrary {
    title: PathBuf,
    tracks: Vec<PathBuf>,
}

impl MusicLibrary {
    pub fn new(title: PathBuf, tracks: Vec<PathBuf>) -> Self {
        Self { title, tracks }
    }

    /// Collects every `*.wav` file directly inside `music_dir`, sorted by name.
    /// An unreadable or missing directory gives an empty pool.
    pub fn scan(music_dir: &Path, title: &Path) -> Self {
        let mut tracks: Vec<PathBuf> = match std::fs::read_dir(music_dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "wav"))
                .collect(),
            Err(err) => {
                warn!("Cannot read music directory {}: {}", music_dir.display(), err);
                Vec::new()
            }
        };
        tracks.sort();
        debug!("Found {} drawing tracks in {}", tracks.len(), music_dir.display());

        Self::new(title.to_path_buf(), tracks)
    }

    pub fn title(&self) -> &Path {
        &self.title
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    /// Uniformly random drawing track, or `None` if there are none.
    pub fn pick_drawing_track<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Path> {
        self.tracks.choose(rng).map(PathBuf::as_path)
    }
}
