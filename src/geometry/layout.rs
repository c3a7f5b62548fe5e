//! Fixed screen layout, measured from the bottom of the window.

use egui::{Pos2, Rect, Vec2};

use crate::config::AppConfig;

pub const BUTTON_SIZE: Vec2 = Vec2::new(80.0, 30.0);
/// Distance from the window bottom to the top of toolbar buttons and small swatches
pub const TOOLBAR_ROW_OFFSET: f32 = 40.0;

pub const SWATCH_SIZE: f32 = 20.0;
pub const SWATCH_PITCH: f32 = 30.0;

pub const STAMP_SLOT_SIZE: f32 = 60.0;
pub const STAMP_SLOT_PITCH: f32 = 70.0;
pub const STAMP_STRIP_OFFSET: f32 = 100.0;

const LEFT_MARGIN: f32 = 10.0;

fn window_bottom(config: &AppConfig) -> f32 {
    config.window_height as f32
}

/// A toolbar button whose left edge is at `x`
pub fn toolbar_button_rect(config: &AppConfig, x: f32) -> Rect {
    Rect::from_min_size(Pos2::new(x, window_bottom(config) - TOOLBAR_ROW_OFFSET), BUTTON_SIZE)
}

/// Slots for the color, size and background pickers
pub fn swatch_rects(config: &AppConfig, count: usize) -> Vec<Rect> {
    let top = window_bottom(config) - TOOLBAR_ROW_OFFSET;
    (0..count)
        .map(|i| {
            Rect::from_min_size(
                Pos2::new(LEFT_MARGIN + i as f32 * SWATCH_PITCH, top),
                Vec2::splat(SWATCH_SIZE),
            )
        })
        .collect()
}

/// Clicks above this line dismiss the stamp picker
pub fn stamp_strip_top(config: &AppConfig) -> f32 {
    window_bottom(config) - STAMP_STRIP_OFFSET
}

pub fn stamp_slot_rects(config: &AppConfig, count: usize) -> Vec<Rect> {
    let top = stamp_strip_top(config);
    (0..count)
        .map(|i| {
            Rect::from_min_size(
                Pos2::new(LEFT_MARGIN + i as f32 * STAMP_SLOT_PITCH, top),
                Vec2::splat(STAMP_SLOT_SIZE),
            )
        })
        .collect()
}

/// Where the line between canvas and toolbar is drawn
pub fn separator_y(config: &AppConfig) -> f32 {
    config.canvas_height() as f32
}
