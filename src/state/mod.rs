pub mod error;
pub mod event;
pub mod machine;
pub mod model;

pub use error::{StateError, StateResult};
pub use event::ArmingEvent;
pub use machine::ArmingMachine;
pub use model::ToolMode;
