use crate::state::{AppState, Effect};

use super::InputEvent;

/// Routes an input event to the state machine, returning any effect it asks for
pub fn route_event(event: &InputEvent, state: &mut AppState) -> Option<Effect> {
    match event {
        InputEvent::PointerDown { location, button } => state.pointer_pressed(*location, *button),
        InputEvent::PointerUp { button, .. } => {
            state.pointer_released(*button);
            None
        }
        InputEvent::PointerMove { location, .. } => {
            state.pointer_moved(location.position);
            None
        }
    }
}
