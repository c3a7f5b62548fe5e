#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod audio;
pub mod canvas;
pub mod components;
pub mod config;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod history;
pub mod input;
pub mod renderer;
pub mod stamps;
pub mod state;
pub mod texture_manager;
pub mod tool;
pub mod util;

pub use app::CastleApp;
pub use canvas::Canvas;
pub use config::AppConfig;
pub use history::UndoHistory;
pub use input::{InputEvent, InputLocation, Region};
pub use renderer::Renderer;
pub use state::{AppState, Effect, Screen};
pub use tool::ToolState;
