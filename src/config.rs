use std::path::PathBuf;

use egui::{Pos2, Rect, Vec2};

/// Title used for the window and the title screen.
pub const APP_TITLE: &str = "Creativity Castle HD Deluxe Edition";

/// Static settings for a session. There is no config file; `Default` gives
/// the layout and asset locations the app ships with.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Height of the toolbar strip under the canvas
    pub toolbar_height: u32,
    pub max_undo_steps: usize,
    pub stamps_dir: PathBuf,
    /// Stamps are looked up as `1.png ..= max_stamps.png`
    pub max_stamps: usize,
    pub music_dir: PathBuf,
    pub title_music: PathBuf,
    pub output_dir: PathBuf,
    pub music_volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 600,
            toolbar_height: 50,
            max_undo_steps: 50,
            stamps_dir: PathBuf::from("stamps"),
            max_stamps: 23,
            music_dir: PathBuf::from("music"),
            title_music: PathBuf::from("title.wav"),
            output_dir: PathBuf::from("saved_pictures"),
            music_volume: 0.5,
        }
    }
}

impl AppConfig {
    pub fn canvas_width(&self) -> u32 {
        self.window_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.window_height.saturating_sub(self.toolbar_height)
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    /// The canvas region in window coordinates
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(self.canvas_width() as f32, self.canvas_height() as f32),
        )
    }

    /// True when a window-space position is over the drawing area.
    pub fn is_on_canvas(&self, pos: Pos2) -> bool {
        pos.y < self.canvas_height() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_leaves_room_for_toolbar() {
        let config = AppConfig::default();
        assert_eq!(config.canvas_width(), 900);
        assert_eq!(config.canvas_height(), 550);
        assert!(config.is_on_canvas(Pos2::new(10.0, 549.0)));
        assert!(!config.is_on_canvas(Pos2::new(10.0, 550.0)));
    }
}
