use std::collections::HashMap;
use egui::{Context, TextureHandle, TextureId, ColorImage, TextureOptions};
use log::debug;
use thiserror::Error;

/// Errors that can occur during texture generation
#[derive(Error, Debug, PartialEq)]
pub enum TextureGenerationError {
    #[error("Invalid texture dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),
}

/// What a cached texture shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Canvas,
    /// Index into the stamp library
    Stamp(usize),
}

impl TextureKey {
    fn name(&self, version: u64) -> String {
        match self {
            TextureKey::Canvas => format!("canvas_v{}", version),
            TextureKey::Stamp(index) => format!("stamp_{}_v{}", index, version),
        }
    }
}

/// Manages GPU textures for the canvas and stamps, providing caching and invalidation.
///
/// Only the newest version of each key is kept: uploading version N drops
/// every other version of that key.
pub struct TextureManager {
    /// Cache of textures by (key, version)
    texture_cache: HashMap<(TextureKey, u64), TextureHandle>,
    /// Tracks when each texture was last used
    last_used: HashMap<(TextureKey, u64), u64>,
    /// Current frame counter for LRU tracking
    current_frame: u64,
    /// Maximum number of textures to cache
    max_cache_size: usize,
}

impl TextureManager {
    /// Creates a new texture manager with the specified cache size
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            texture_cache: HashMap::new(),
            last_used: HashMap::new(),
            current_frame: 0,
            max_cache_size,
        }
    }

    /// Increments the frame counter, should be called at the start of each frame
    pub fn begin_frame(&mut self) {
        self.current_frame += 1;
    }

    /// Gets or uploads the texture for `key` at `version`
    pub fn get_or_create_texture<F>(
        &mut self,
        key: TextureKey,
        version: u64,
        generator: F,
        ctx: &Context,
    ) -> Result<TextureId, TextureGenerationError>
    where
        F: FnOnce() -> ColorImage,
    {
        let cache_key = (key, version);

        // Check if the texture is already in the cache
        if let Some(handle) = self.texture_cache.get(&cache_key) {
            self.last_used.insert(cache_key, self.current_frame);
            return Ok(handle.id());
        }

        let image = generator();
        let [width, height] = image.size;
        if width == 0 || height == 0 {
            return Err(TextureGenerationError::InvalidDimensions(width, height));
        }

        // Older versions of this key are stale now
        self.invalidate(key);
        self.prune_cache_if_needed();

        let name = key.name(version);
        debug!("Uploading texture {} ({}x{})", name, width, height);
        let handle = ctx.load_texture(&name, image, TextureOptions::LINEAR);

        self.texture_cache.insert(cache_key, handle.clone());
        self.last_used.insert(cache_key, self.current_frame);

        Ok(handle.id())
    }

    /// Invalidates all textures for a specific key
    pub fn invalidate(&mut self, key: TextureKey) {
        let keys_to_remove: Vec<(TextureKey, u64)> = self.texture_cache
            .keys()
            .filter(|(cached, _)| *cached == key)
            .cloned()
            .collect();

        for cache_key in keys_to_remove {
            self.texture_cache.remove(&cache_key);
            self.last_used.remove(&cache_key);
        }
    }

    /// Makes room for one more texture by evicting the least recently used ones
    fn prune_cache_if_needed(&mut self) {
        if self.texture_cache.len() < self.max_cache_size {
            return;
        }

        // Collect keys and their last-used frames
        let mut entries: Vec<((TextureKey, u64), u64)> = self.last_used
            .iter()
            .map(|(k, v)| (*k, *v))
            .collect();

        // Sort by last-used frame (oldest first)
        entries.sort_by_key(|(_, frame)| *frame);

        let to_remove = entries.len() + 1 - self.max_cache_size.max(1);
        for (cache_key, _) in entries.iter().take(to_remove) {
            self.texture_cache.remove(cache_key);
            self.last_used.remove(cache_key);
        }
    }

    /// Returns the number of textures currently in the cache
    pub fn cache_size(&self) -> usize {
        self.texture_cache.len()
    }

    #[cfg(test)]
    pub fn get_texture(&self, key: TextureKey, version: u64) -> Option<&TextureHandle> {
        self.texture_cache.get(&(key, version))
    }
}
