use super::*;
use crate::state::ToolMode;

impl ToolSet {
    pub fn objects(&self) -> &[Tool] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Tool> {
        self.objects.iter().find(|tool| tool.id() == id)
    }

    pub fn mode(&self) -> ToolMode {
        self.mode.state()
    }

    pub fn is_armed(&self) -> bool {
        self.mode().is_armed()
    }

    pub fn armed_kind(&self) -> Option<ToolKind> {
        self.mode().armed_kind()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Tool> {
        self.selected.and_then(|id| self.get(id))
    }

    /// First vertex of the selected area, when a placement there would close it.
    pub fn selected_closing_vertex(&self) -> Option<BlockPos> {
        self.selected()
            .and_then(Tool::as_area)
            .and_then(Area::closing_vertex)
    }

    /// Tools with enough points to be measured, in creation order.
    pub fn measurable(&self) -> impl Iterator<Item = &Tool> + '_ {
        self.objects.iter().filter(|tool| tool.is_acceptable())
    }
}
