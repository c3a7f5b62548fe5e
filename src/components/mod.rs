pub mod tool_button;

pub use tool_button::{ToolButton, ToolbarAction, action_at, toolbar_buttons};
