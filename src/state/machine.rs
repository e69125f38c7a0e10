use super::error::{StateError, StateResult};
use super::{event::StateTransition, ArmingEvent, ToolMode};
use crate::tools::ToolKind;

#[derive(Debug)]
pub struct ArmingMachine {
    state: ToolMode,
    #[cfg(test)]
    transition_history: Vec<StateTransition>,
}

impl ArmingMachine {
    pub fn new() -> Self {
        Self {
            state: ToolMode::default(),
            #[cfg(test)]
            transition_history: Vec::new(),
        }
    }

    pub fn state(&self) -> ToolMode {
        self.state
    }

    pub fn next_state(&self, event: ArmingEvent) -> Option<ToolMode> {
        match (self.state, event) {
            (_, ArmingEvent::Arm(kind)) => Some(ToolMode::Armed(kind)),
            (ToolMode::Armed(_), ArmingEvent::Disarm) => Some(ToolMode::Idle),
            (ToolMode::Idle, ArmingEvent::Disarm) => None,
        }
    }

    /// Event that toggles `kind`: disarms when `kind` is already armed, arms
    /// it otherwise.
    pub fn toggle_event(&self, kind: ToolKind) -> ArmingEvent {
        match self.state {
            ToolMode::Armed(current) if current == kind => ArmingEvent::Disarm,
            _ => ArmingEvent::Arm(kind),
        }
    }

    pub fn transition(&mut self, event: ArmingEvent) -> StateResult<StateTransition> {
        tracing::debug!(from = ?self.state, event = ?event, "request tool mode transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::warn!(from = ?from, event = ?event, "invalid tool mode transition requested");
            StateError::InvalidStateTransition { from, event }
        })?;

        let record = StateTransition::new(self.state, event, next);
        self.state = next;
        #[cfg(test)]
        self.transition_history.push(record);

        Ok(record)
    }
}

#[cfg(test)]
impl ArmingMachine {
    fn history(&self) -> &[StateTransition] {
        &self.transition_history
    }
}

impl Default for ArmingMachine {
    fn default() -> Self {
        Self::new()
    }
}
