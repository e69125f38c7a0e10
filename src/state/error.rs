use super::event::ArmingEvent;
use super::model::ToolMode;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("invalid tool mode transition: from {from:?} using event {event:?}")]
    InvalidStateTransition { from: ToolMode, event: ArmingEvent },
}
