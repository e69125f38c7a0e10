pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod geometry;
pub mod host;
pub mod input;
pub mod logging;
pub mod state;
pub mod tools;
pub mod viewport;

pub use config::{load_viewer_config, load_viewer_config_from, ViewerConfig};
pub use controller::MapController;
pub use error::MapError;
pub use geometry::{BlockPos, ScreenPoint, ViewportSize};
pub use host::{CursorHint, LayerContext, MapHost};
pub use input::{InputEvent, ModifierState, PointerButton};
pub use state::ToolMode;
pub use tools::{Tool, ToolKind, ToolSet};
pub use viewport::{ScrollDirection, Viewport};
