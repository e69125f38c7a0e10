use super::*;
use crate::state::{ArmingEvent, StateResult, ToolMode};

/// Result of an arming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmOutcome {
    pub mode: ToolMode,
    /// Incomplete tool dropped when the previous selection was abandoned.
    pub discarded: Option<u64>,
    /// Empty tool created and selected for the newly armed kind.
    pub created: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tool_id: u64,
    /// The selected tool was full and a new one received the point.
    pub duplicated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub removed: u64,
    /// Fresh tool selected in place of the removed one.
    pub replacement: Option<u64>,
}

impl ToolSet {
    /// Toggles `kind`: arms it when idle or when another kind is armed, and
    /// disarms it when it is already armed.
    pub fn arm_tool(&mut self, kind: ToolKind) -> StateResult<ArmOutcome> {
        let event = self.mode.toggle_event(kind);
        self.apply_arming(event)
    }

    /// Leaves armed mode without arming anything else.
    pub fn disarm(&mut self) -> StateResult<ArmOutcome> {
        self.apply_arming(ArmingEvent::Disarm)
    }

    fn apply_arming(&mut self, event: ArmingEvent) -> StateResult<ArmOutcome> {
        let transition = self.mode.transition(event)?;
        let mode = transition.to;
        tracing::debug!(from = ?transition.from, to = ?mode, "tool mode changed");
        let discarded = self.discard_incomplete_selection();

        let created = match mode {
            ToolMode::Armed(kind) => {
                let id = self.push_new(kind);
                self.selected = Some(id);
                Some(id)
            }
            ToolMode::Idle => None,
        };

        Ok(ArmOutcome {
            mode,
            discarded,
            created,
        })
    }

    fn discard_incomplete_selection(&mut self) -> Option<u64> {
        let id = self.selected.take()?;
        let index = self.position(id)?;
        if self.objects[index].is_acceptable() {
            return None;
        }
        self.objects.remove(index);
        tracing::debug!(tool_id = id, "discarded incomplete tool");
        Some(id)
    }

    /// Adds `pos` to the selected tool. A full tool is left as is and a new
    /// tool of the same kind is appended, selected, and given the point.
    pub fn place_point(&mut self, pos: BlockPos) -> ToolResult<Placement> {
        let selected_id = self.selected.ok_or(ToolError::NoToolSelected)?;
        let tool = self
            .find_object_mut(selected_id)
            .ok_or(ToolError::ToolNotFound { id: selected_id })?;
        if tool.add_point(pos) {
            return Ok(Placement {
                tool_id: selected_id,
                duplicated: false,
            });
        }

        let kind = tool.kind();
        let id = self.allocate_id();
        let mut duplicate = Tool::new(kind, id);
        duplicate.add_point(pos);
        self.objects.push(duplicate);
        self.selected = Some(id);
        tracing::debug!(from = selected_id, tool_id = id, "tool full; continuing in duplicate");

        Ok(Placement {
            tool_id: id,
            duplicated: true,
        })
    }

    /// Removes tool `id`. When it is the selected tool, an empty tool of the
    /// same kind is appended and selected so the armed mode is kept.
    pub fn remove_tool(&mut self, id: u64) -> ToolResult<Removal> {
        let index = self.position(id).ok_or(ToolError::ToolNotFound { id })?;
        let removed = self.objects.remove(index);

        let replacement = if self.selected == Some(id) {
            let replacement_id = self.allocate_id();
            self.objects.push(removed.duplicate(replacement_id));
            self.selected = Some(replacement_id);
            Some(replacement_id)
        } else {
            None
        };

        Ok(Removal {
            removed: id,
            replacement,
        })
    }
}
