use crate::config::ConfigError;
use crate::state::StateError;
use crate::tools::ToolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
