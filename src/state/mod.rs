mod app_state;
pub mod picker;

pub use app_state::{AppState, Effect, Screen};
pub use picker::{PickerKind, PickerOutcome};
