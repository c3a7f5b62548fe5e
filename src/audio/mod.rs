mod library;
mod player;
mod track;

use std::path::Path;

use log::{error, info, warn};

pub use library::MusicLibrary;
pub use player::MusicPlayer;
pub use track::Track;

use crate::config::AppConfig;

/// Background music for the session: the title theme and a random drawing track.
pub struct Music {
    library: MusicLibrary,
    player: MusicPlayer,
}

impl Music {
    pub fn new(library: MusicLibrary, player: MusicPlayer) -> Self {
        Self { library, player }
    }

    /// Scans the configured music folders and opens the default output device.
    /// Without a device the session continues silently.
    pub fn from_config(config: &AppConfig) -> Self {
        let library = MusicLibrary::scan(&config.music_dir, &config.title_music);
        let player = MusicPlayer::open(config.music_volume).unwrap_or_else(|err| {
            warn!("Music disabled: {}", err);
            MusicPlayer::silent(config.music_volume)
        });
        Self::new(library, player)
    }

    pub fn library(&self) -> &MusicLibrary {
        &self.library
    }

    pub fn player(&self) -> &MusicPlayer {
        &self.player
    }

    pub fn play_title(&self) {
        self.play_file(self.library.title());
    }

    /// Loops a randomly chosen drawing track. Keeps the current music if there are none.
    pub fn play_random_drawing(&self) {
        let mut rng = rand::thread_rng();
        match self.library.pick_drawing_track(&mut rng) {
            Some(path) => self.play_file(path),
            None => info!("No drawing tracks to play"),
        }
    }

    fn play_file(&self, path: &Path) {
        match Track::open(path) {
            Ok(track) => {
                info!("Playing {}", path.display());
                self.player.play_looping(track);
            }
            Err(err) => error!("Cannot play {}: {}", path.display(), err),
        }
    }
}
