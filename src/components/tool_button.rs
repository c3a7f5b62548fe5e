use eframe::egui;

use crate::config::AppConfig;
use crate::geometry::{hits, layout};

/// What a toolbar button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    OpenColorPicker,
    OpenSizePicker,
    OpenBackgroundPicker,
    OpenStampPicker,
    Undo,
    Clear,
    Save,
    Menu,
}

const LABEL_COLOR: egui::Color32 = egui::Color32::BLACK;
const FILL_COLOR: egui::Color32 = egui::Color32::from_gray(230);

/// Buttons and the left edge of each, in toolbar order
const TOOLBAR: [(&str, f32, ToolbarAction); 8] = [
    ("Color", 10.0, ToolbarAction::OpenColorPicker),
    ("Size", 100.0, ToolbarAction::OpenSizePicker),
    ("Background", 190.0, ToolbarAction::OpenBackgroundPicker),
    ("Stamps", 280.0, ToolbarAction::OpenStampPicker),
    ("Undo", 370.0, ToolbarAction::Undo),
    ("Clear", 460.0, ToolbarAction::Clear),
    ("Save", 550.0, ToolbarAction::Save),
    ("Menu", 710.0, ToolbarAction::Menu),
];

/// A labelled rectangle in the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolButton {
    pub rect: egui::Rect,
    pub label: &'static str,
    pub action: ToolbarAction,
}

impl ToolButton {
    pub fn new(rect: egui::Rect, label: &'static str, action: ToolbarAction) -> Self {
        Self { rect, label, action }
    }

    pub fn contains(&self, pos: egui::Pos2) -> bool {
        hits(self.rect, pos)
    }

    pub fn show(&self, painter: &egui::Painter) {
        painter.rect_filled(self.rect, 0.0, FILL_COLOR);
        painter.rect_stroke(self.rect, 0.0, egui::Stroke::new(2.0, LABEL_COLOR));
        painter.text(
            self.rect.center(),
            egui::Align2::CENTER_CENTER,
            self.label,
            egui::FontId::proportional(16.0),
            LABEL_COLOR,
        );
    }
}

/// The toolbar laid out for the configured window.
pub fn toolbar_buttons(config: &AppConfig) -> Vec<ToolButton> {
    TOOLBAR
        .iter()
        .map(|&(label, x, action)| ToolButton::new(layout::toolbar_button_rect(config, x), label, action))
        .collect()
}

/// The action of the first button under `pos`.
pub fn action_at(buttons: &[ToolButton], pos: egui::Pos2) -> Option<ToolbarAction> {
    buttons.iter().find(|button| button.contains(pos)).map(|button| button.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_lookup() {
        let buttons = toolbar_buttons(&AppConfig::default());
        assert_eq!(buttons.len(), 8);
        assert_eq!(action_at(&buttons, egui::pos2(15.0, 565.0)), Some(ToolbarAction::OpenColorPicker));
        assert_eq!(action_at(&buttons, egui::pos2(400.0, 575.0)), Some(ToolbarAction::Undo));
        assert_eq!(action_at(&buttons, egui::pos2(750.0, 570.0)), Some(ToolbarAction::Menu));
        // gap between Save and Menu
        assert_eq!(action_at(&buttons, egui::pos2(660.0, 570.0)), None);
        // gap between buttons
        assert_eq!(action_at(&buttons, egui::pos2(95.0, 570.0)), None);
    }
}
