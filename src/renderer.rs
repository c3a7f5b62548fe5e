// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};
use log::warn;

use crate::config::APP_TITLE;
use crate::geometry::layout;
use crate::state::{AppState, PickerKind, Screen};
use crate::texture_manager::{TextureKey, TextureManager};
use crate::tool::{PALETTE, PEN_SIZES};

const BACKGROUND: Color32 = Color32::WHITE;
const OUTLINE: Stroke = Stroke {
    width: 2.0,
    color: Color32::BLACK,
};
const FULL_UV: Rect = Rect {
    min: Pos2::ZERO,
    max: Pos2::new(1.0, 1.0),
};

/// Stamps plus the canvas
const TEXTURE_CACHE_SIZE: usize = 32;

/// Paints the current screen of an [`AppState`].
pub struct Renderer {
    textures: TextureManager,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            textures: TextureManager::new(TEXTURE_CACHE_SIZE),
        }
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context for the current frame
    ///     painter (egui::Painter): The painter to draw with
    ///     origin (Pos2): Screen position of the app's top-left corner
    ///     state (AppState): What to draw
    ///     pointer (Option<Pos2>): Pointer position in app coordinates, for the stamp preview
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        origin: Pos2,
        state: &AppState,
        pointer: Option<Pos2>,
    ) {
        self.textures.begin_frame();
        let offset = origin.to_vec2();
        let config = state.config();

        painter.rect_filled(Rect::from_min_size(origin, config.window_size()), 0.0, BACKGROUND);

        match state.screen() {
            Screen::Title => self.render_title(painter, origin, config.window_size()),
            Screen::Drawing => {
                self.render_canvas(ctx, painter, offset, state);
                for button in state.buttons() {
                    let mut button = button.clone();
                    button.rect = button.rect.translate(offset);
                    button.show(painter);
                }
                let y = origin.y + layout::separator_y(config);
                painter.line_segment(
                    [Pos2::new(origin.x, y), Pos2::new(origin.x + config.window_width as f32, y)],
                    OUTLINE,
                );
                if let Some(pointer) = pointer {
                    self.render_stamp_preview(ctx, painter, offset, state, pointer);
                }
            }
            Screen::Picker(kind) => {
                self.render_canvas(ctx, painter, offset, state);
                self.render_picker(ctx, painter, offset, state, kind);
            }
        }
    }

    fn render_title(&self, painter: &egui::Painter, origin: Pos2, size: Vec2) {
        let font = FontId::proportional(30.0);
        let center_x = origin.x + size.x / 2.0;
        painter.text(
            Pos2::new(center_x, origin.y + size.y / 3.0),
            Align2::CENTER_TOP,
            APP_TITLE,
            font.clone(),
            Color32::BLACK,
        );
        painter.text(
            Pos2::new(center_x, origin.y + size.y / 2.0),
            Align2::CENTER_TOP,
            "Click anywhere to begin",
            font,
            Color32::BLACK,
        );
    }

    fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, offset: Vec2, state: &AppState) {
        let canvas = state.canvas();
        match self.textures.get_or_create_texture(
            TextureKey::Canvas,
            canvas.version(),
            || canvas.to_color_image(),
            ctx,
        ) {
            Ok(texture) => {
                let rect = Rect::from_min_size(Pos2::ZERO + offset, canvas.size());
                painter.image(texture, rect, FULL_UV, Color32::WHITE);
            }
            Err(err) => warn!("Cannot show canvas: {}", err),
        }
    }

    fn stamp_texture(&mut self, ctx: &egui::Context, state: &AppState, index: usize) -> Option<egui::TextureId> {
        let stamp = state.stamps().get(index)?;
        match self
            .textures
            .get_or_create_texture(TextureKey::Stamp(index), 0, || stamp.to_color_image(), ctx)
        {
            Ok(texture) => Some(texture),
            Err(err) => {
                warn!("Cannot show stamp {}: {}", stamp.number(), err);
                None
            }
        }
    }

    /// The selected stamp follows the cursor at its real size.
    fn render_stamp_preview(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        offset: Vec2,
        state: &AppState,
        pointer: Pos2,
    ) {
        let Some(index) = state.tools().stamp else {
            return;
        };
        let Some(stamp) = state.stamps().get(index) else {
            return;
        };
        let size = stamp.size();
        if let Some(texture) = self.stamp_texture(ctx, state, index) {
            let half = Vec2::new((size.x / 2.0).floor(), (size.y / 2.0).floor());
            let rect = Rect::from_min_size(pointer - half + offset, size);
            painter.image(texture, rect, FULL_UV, Color32::WHITE);
        }
    }

    fn render_picker(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        offset: Vec2,
        state: &AppState,
        kind: PickerKind,
    ) {
        let slots = kind.slots(state.config(), state.stamps().len());
        for (index, slot) in slots.iter().enumerate() {
            let slot = slot.translate(offset);
            match kind {
                PickerKind::PenColor | PickerKind::Background => {
                    painter.rect_filled(slot, 0.0, PALETTE[index]);
                }
                PickerKind::PenSize => {
                    painter.circle_filled(slot.center(), PEN_SIZES[index] as f32, Color32::BLACK);
                }
                PickerKind::Stamp => {
                    if let Some(texture) = self.stamp_texture(ctx, state, index) {
                        painter.image(texture, slot, FULL_UV, Color32::WHITE);
                    }
                }
            }
            painter.rect_stroke(slot, 0.0, OUTLINE);
        }
    }
}
