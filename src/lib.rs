#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tool_state;

pub use app::DoodleApp;
pub use config::DoodleConfig;
pub use error::ConfigError;
pub use event::{DoodleEvent, EventBus, EventHandler};
pub use history::StrokeHistory;
pub use input::{GestureEvent, GestureSink, GestureTracker, PointerSample};
pub use renderer::Renderer;
pub use state::DoodleState;
pub use stroke::{Stroke, StrokeBuilder, StrokeId};
pub use tool_state::{PaletteColor, ToolState};
