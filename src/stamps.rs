use std::path::Path;

use egui::{ColorImage, Vec2};
use image::RgbaImage;
use log::{debug, warn};

/// A small predefined picture placed on the canvas with one click.
#[derive(Clone)]
pub struct Stamp {
    /// The number in the stamp's file name (`<number>.png`)
    number: usize,
    image: RgbaImage,
}

impl std::fmt::Debug for Stamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stamp")
            .field("number", &self.number)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl Stamp {
    pub fn new(number: usize, image: RgbaImage) -> Self {
        Self { number, image }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.image.width() as usize, self.image.height() as usize],
            self.image.as_raw(),
        )
    }
}

/// The stamps available in the stamp picker, in file-number order.
#[derive(Debug, Clone, Default)]
pub struct StampLibrary {
    stamps: Vec<Stamp>,
}

impl StampLibrary {
    pub fn new(stamps: Vec<Stamp>) -> Self {
        Self { stamps }
    }

    /// Loads `dir/1.png ..= dir/<max>.png`.
    ///
    /// Missing numbers are skipped silently, so the library may have gaps in
    /// its numbering. Files that exist but fail to decode are skipped with a warning.
    pub fn load(dir: &Path, max: usize) -> Self {
        let mut stamps = Vec::new();
        if !dir.is_dir() {
            debug!("No stamp directory at {}", dir.display());
            return Self { stamps };
        }

        for number in 1..=max {
            let path = dir.join(format!("{number}.png"));
            if !path.exists() {
                continue;
            }
            match image::open(&path) {
                Ok(img) => {
                    let image = img.to_rgba8();
                    debug!("Loaded stamp {}: {}x{}", path.display(), image.width(), image.height());
                    stamps.push(Stamp::new(number, image));
                }
                Err(err) => warn!("Skipping stamp {}: {}", path.display(), err),
            }
        }

        Self { stamps }
    }

    pub fn get(&self, index: usize) -> Option<&Stamp> {
        self.stamps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stamp> {
        self.stamps.iter()
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}
