use super::model::ToolMode;
use crate::tools::ToolKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmingEvent {
    Arm(ToolKind),
    Disarm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: ToolMode,
    pub event: ArmingEvent,
    pub to: ToolMode,
}

impl StateTransition {
    pub const fn new(from: ToolMode, event: ArmingEvent, to: ToolMode) -> Self {
        Self { from, event, to }
    }
}
