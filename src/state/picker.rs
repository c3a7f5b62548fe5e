use egui::{Pos2, Rect};

use crate::config::AppConfig;
use crate::geometry::{first_hit, layout};
use crate::tool::{PALETTE, PEN_SIZES};

/// The selection strips opened from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    PenColor,
    PenSize,
    /// Picks a color and floods the whole canvas with it
    Background,
    Stamp,
}

/// How a click inside an open picker resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// The swatch at this index was clicked
    Selected(usize),
    /// Closed without choosing anything (stamp picker only)
    Dismissed,
    /// The picker stays open
    Ignored,
}

impl PickerKind {
    pub fn name(&self) -> &'static str {
        match self {
            PickerKind::PenColor => "color",
            PickerKind::PenSize => "size",
            PickerKind::Background => "background",
            PickerKind::Stamp => "stamp",
        }
    }

    /// Number of choices shown in the strip
    pub fn choice_count(&self, stamp_count: usize) -> usize {
        match self {
            PickerKind::PenColor | PickerKind::Background => PALETTE.len(),
            PickerKind::PenSize => PEN_SIZES.len(),
            PickerKind::Stamp => stamp_count,
        }
    }

    /// Screen rects of each choice, in order
    pub fn slots(&self, config: &AppConfig, stamp_count: usize) -> Vec<Rect> {
        let count = self.choice_count(stamp_count);
        match self {
            PickerKind::Stamp => layout::stamp_slot_rects(config, count),
            _ => layout::swatch_rects(config, count),
        }
    }

    pub fn resolve_click(&self, pos: Pos2, config: &AppConfig, stamp_count: usize) -> PickerOutcome {
        if let Some(index) = first_hit(&self.slots(config, stamp_count), pos) {
            return PickerOutcome::Selected(index);
        }
        match self {
            PickerKind::Stamp if pos.y < layout::stamp_strip_top(config) => PickerOutcome::Dismissed,
            _ => PickerOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_picker_ignores_misses() {
        let config = AppConfig::default();
        let kind = PickerKind::PenColor;
        assert_eq!(kind.resolve_click(Pos2::new(45.0, 565.0), &config, 0), PickerOutcome::Selected(1));
        assert_eq!(kind.resolve_click(Pos2::new(400.0, 100.0), &config, 0), PickerOutcome::Ignored);
    }

    #[test]
    fn test_stamp_picker_dismisses_above_strip() {
        let config = AppConfig::default();
        let kind = PickerKind::Stamp;
        assert_eq!(kind.resolve_click(Pos2::new(85.0, 520.0), &config, 2), PickerOutcome::Selected(1));
        // right of the last slot, inside the strip band
        assert_eq!(kind.resolve_click(Pos2::new(300.0, 520.0), &config, 2), PickerOutcome::Ignored);
        assert_eq!(kind.resolve_click(Pos2::new(300.0, 499.0), &config, 2), PickerOutcome::Dismissed);
        assert_eq!(kind.resolve_click(Pos2::new(20.0, 580.0), &config, 2), PickerOutcome::Ignored);
    }

    #[test]
    fn test_empty_stamp_picker_has_no_slots() {
        let config = AppConfig::default();
        assert!(PickerKind::Stamp.slots(&config, 0).is_empty());
        assert_eq!(PickerKind::Stamp.resolve_click(Pos2::new(15.0, 10.0), &config, 0), PickerOutcome::Dismissed);
    }
}
