use egui::{Pos2, Rect};

/// Half-open containment: the right and bottom edges belong to the neighbour.
///
/// `egui::Rect::contains` is inclusive on every side, which would let a click
/// on the shared edge of two adjacent swatches hit both.
pub fn hits(rect: Rect, pos: Pos2) -> bool {
    rect.min.x <= pos.x && pos.x < rect.max.x && rect.min.y <= pos.y && pos.y < rect.max.y
}

/// Index of the first rect containing `pos`
pub fn first_hit(rects: &[Rect], pos: Pos2) -> Option<usize> {
    rects.iter().position(|rect| hits(*rect, pos))
}
