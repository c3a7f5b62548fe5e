//! The application state machine.
//!
//! All mutable session state lives in [`AppState`]: the canvas, its undo
//! history, the tool settings and which screen is showing. Input events are
//! fed in one at a time; anything that has to reach outside the state (music,
//! writing files) comes back as an [`Effect`] for the caller to carry out.
//!
//! # Screens
//!
//! ```text
//!   ┌─────────┐  any click   ┌─────────┐  toolbar button  ┌──────────────┐
//!   │  Title  ├─────────────►│ Drawing ├─────────────────►│ Picker(kind) │
//!   │         │◄─────────────┤         │◄─────────────────┤              │
//!   └─────────┘  Menu button └─────────┘  choice / dismiss└──────────────┘
//! ```
use egui::{Color32, PointerButton, Pos2};
use log::{debug, info};

use super::picker::{PickerKind, PickerOutcome};
use crate::canvas::Canvas;
use crate::components::{ToolButton, ToolbarAction, action_at, toolbar_buttons};
use crate::config::AppConfig;
use crate::history::UndoHistory;
use crate::input::{InputLocation, Region};
use crate::stamps::StampLibrary;
use crate::tool::{BLANK, PALETTE, PEN_SIZES, ToolState};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Drawing,
    Picker(PickerKind),
}

/// Work requested by the state machine that it cannot do itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PlayTitleMusic,
    /// Start a randomly chosen drawing track
    PlayDrawingMusic,
    SavePicture,
}

pub struct AppState {
    config: AppConfig,
    screen: Screen,
    canvas: Canvas,
    history: UndoHistory,
    tools: ToolState,
    stamps: StampLibrary,
    buttons: Vec<ToolButton>,
    /// Last pointer position of the stroke in progress, if any
    stroke: Option<Pos2>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("screen", &self.screen)
            .field("canvas", &self.canvas)
            .field("history", &self.history)
            .field("tools", &self.tools)
            .field("stamps", &self.stamps.len())
            .field("stroke", &self.stroke)
            .finish()
    }
}

impl AppState {
    pub fn new(config: AppConfig, stamps: StampLibrary) -> Self {
        let canvas = Canvas::new(config.canvas_width(), config.canvas_height(), BLANK);
        let history = UndoHistory::new(config.max_undo_steps);
        let buttons = toolbar_buttons(&config);
        Self {
            config,
            screen: Screen::Title,
            canvas,
            history,
            tools: ToolState::default(),
            stamps,
            buttons,
            stroke: None,
        }
    }

    /// Effect to run once the window is up
    pub fn startup_effect(&self) -> Effect {
        Effect::PlayTitleMusic
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn stamps(&self) -> &StampLibrary {
        &self.stamps
    }

    pub fn buttons(&self) -> &[ToolButton] {
        &self.buttons
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            info!("Screen: {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
        }
    }

    /// Handle a button press anywhere in the window.
    pub fn pointer_pressed(&mut self, location: InputLocation, button: PointerButton) -> Option<Effect> {
        match self.screen {
            Screen::Title => {
                self.set_screen(Screen::Drawing);
                Some(Effect::PlayDrawingMusic)
            }
            Screen::Drawing => {
                if button != PointerButton::Primary {
                    return None;
                }
                match location.region {
                    Region::Canvas => {
                        self.begin_stroke(location.position);
                        None
                    }
                    Region::Toolbar => {
                        let action = action_at(&self.buttons, location.position)?;
                        self.run_action(action)
                    }
                }
            }
            Screen::Picker(kind) => {
                let outcome = kind.resolve_click(location.position, &self.config, self.stamps.len());
                self.apply_picker_outcome(kind, outcome);
                None
            }
        }
    }

    pub fn pointer_released(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.stroke = None;
        }
    }

    /// Continues the stroke in progress. Stamps are placed once per click and never dragged.
    pub fn pointer_moved(&mut self, position: Pos2) {
        if self.screen != Screen::Drawing || self.tools.stamp.is_some() {
            return;
        }
        if let Some(last) = self.stroke {
            self.canvas
                .draw_line(last, position, self.tools.line_width(), self.tools.pen_color);
            self.stroke = Some(position);
        }
    }

    /// Snapshot, then either place the selected stamp or drop a dot of pen color.
    pub fn begin_stroke(&mut self, position: Pos2) {
        self.history.push(&self.canvas);
        self.stroke = Some(position);

        match self.tools.stamp.and_then(|index| self.stamps.get(index)) {
            Some(stamp) => self.canvas.stamp(stamp.image(), position),
            None => self
                .canvas
                .draw_dot(position, self.tools.dot_radius(), self.tools.pen_color),
        }
    }

    pub fn run_action(&mut self, action: ToolbarAction) -> Option<Effect> {
        debug!("Toolbar action: {:?}", action);
        match action {
            ToolbarAction::OpenColorPicker => self.open_picker(PickerKind::PenColor),
            ToolbarAction::OpenSizePicker => self.open_picker(PickerKind::PenSize),
            ToolbarAction::OpenBackgroundPicker => self.open_picker(PickerKind::Background),
            ToolbarAction::OpenStampPicker => self.open_picker(PickerKind::Stamp),
            ToolbarAction::Undo => {
                self.undo();
            }
            ToolbarAction::Clear => self.clear(),
            ToolbarAction::Save => return Some(Effect::SavePicture),
            ToolbarAction::Menu => {
                self.stroke = None;
                self.set_screen(Screen::Title);
                return Some(Effect::PlayTitleMusic);
            }
        }
        None
    }

    pub fn open_picker(&mut self, kind: PickerKind) {
        self.stroke = None;
        self.set_screen(Screen::Picker(kind));
    }

    fn apply_picker_outcome(&mut self, kind: PickerKind, outcome: PickerOutcome) {
        match outcome {
            PickerOutcome::Ignored => return,
            PickerOutcome::Dismissed => {
                self.tools.stamp = None;
            }
            PickerOutcome::Selected(index) => match kind {
                PickerKind::PenColor => {
                    if let Some(color) = PALETTE.get(index) {
                        self.tools.pen_color = *color;
                    }
                }
                PickerKind::PenSize => {
                    if let Some(size) = PEN_SIZES.get(index) {
                        self.tools.pen_size = *size;
                    }
                }
                PickerKind::Background => {
                    if let Some(color) = PALETTE.get(index) {
                        self.fill_background(*color);
                    }
                }
                PickerKind::Stamp => {
                    if index < self.stamps.len() {
                        self.tools.stamp = Some(index);
                    }
                }
            },
        }
        info!("Closed {} picker: {:?}", kind.name(), outcome);
        self.set_screen(Screen::Drawing);
    }

    /// Restores the most recent snapshot. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.canvas)
    }

    /// Snapshot, then blank the canvas.
    pub fn clear(&mut self) {
        self.fill_background(BLANK);
    }

    /// Snapshot, then flood the whole canvas with `color`.
    pub fn fill_background(&mut self, color: Color32) {
        self.history.push(&self.canvas);
        self.canvas.fill(color);
    }
}
