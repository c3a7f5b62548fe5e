use egui::{Context, PointerButton, Pos2};

mod router;
pub use router::route_event;

use crate::config::AppConfig;

/// Which part of the window an input event occurred in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// The drawing area
    Canvas,
    /// The strip under the canvas holding the buttons
    Toolbar,
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the top-left corner of the app area
    pub position: Pos2,
    pub region: Region,
}

/// Represents different types of input events that can occur in the application
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    config: AppConfig,
    /// Top-left of the app area in screen points
    origin: Pos2,
    last_pointer_pos: Option<Pos2>,
    held_buttons: Vec<PointerButton>,
}

impl InputHandler {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            origin: Pos2::ZERO,
            last_pointer_pos: None,
            held_buttons: Vec::new(),
        }
    }

    /// Update where the app area starts on screen
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    /// Last known pointer position in app coordinates
    pub fn pointer_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    fn make_location(&self, screen_pos: Pos2) -> InputLocation {
        let position = Pos2::ZERO + (screen_pos - self.origin);
        let region = if self.config.is_on_canvas(position) {
            Region::Canvas
        } else {
            Region::Toolbar
        };
        InputLocation { position, region }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let events = ctx.input(|input| input.events.clone());
        self.process_events(&events)
    }

    /// Translate raw events in the order they arrived.
    pub fn process_events(&mut self, events: &[egui::Event]) -> Vec<InputEvent> {
        let mut out = Vec::new();

        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let location = self.make_location(*pos);
                    if Some(location.position) != self.last_pointer_pos {
                        out.push(InputEvent::PointerMove {
                            location,
                            held_buttons: self.held_buttons.clone(),
                        });
                    }
                    self.last_pointer_pos = Some(location.position);
                }
                egui::Event::PointerButton { pos, button, pressed, .. } => {
                    let location = self.make_location(*pos);
                    self.last_pointer_pos = Some(location.position);
                    if *pressed {
                        if !self.held_buttons.contains(button) {
                            self.held_buttons.push(*button);
                        }
                        out.push(InputEvent::PointerDown { location, button: *button });
                    } else {
                        self.held_buttons.retain(|held| held != button);
                        out.push(InputEvent::PointerUp { location, button: *button });
                    }
                }
                egui::Event::PointerGone => {
                    self.last_pointer_pos = None;
                }
                _ => {}
            }
        }

        out
    }
}
