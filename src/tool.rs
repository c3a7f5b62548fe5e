use egui::Color32;

/// Colors offered by the pen and background pickers, in swatch order.
pub const PALETTE: [Color32; 5] = [
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::BLACK,
    Color32::WHITE,
];

/// Pen sizes offered by the size picker, in swatch order.
pub const PEN_SIZES: [u32; 5] = [1, 3, 5, 10, 20];

/// Color a cleared canvas is filled with
pub const BLANK: Color32 = Color32::WHITE;

/// What the pointer does when it touches the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    pub pen_color: Color32,
    /// Dot radius; strokes are twice this wide
    pub pen_size: u32,
    /// Index into the loaded stamps. When set, clicks place the stamp instead of drawing.
    pub stamp: Option<usize>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            pen_color: Color32::BLACK,
            pen_size: 2,
            stamp: None,
        }
    }
}

impl ToolState {
    pub fn dot_radius(&self) -> f32 {
        self.pen_size as f32
    }

    pub fn line_width(&self) -> f32 {
        (self.pen_size * 2) as f32
    }
}
