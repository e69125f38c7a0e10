//! Interfaces through which the engine talks to the surrounding viewer.

use crate::error::MapError;
use crate::geometry::BlockPos;
use crate::tools::{Tool, ToolKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    Crosshair,
}

/// Notifications emitted by the controller. Every call happens after the state
/// change it reports. Repaint requests are not de-duplicated.
pub trait MapHost {
    fn request_repaint(&mut self);
    fn set_cursor(&mut self, cursor: CursorHint);
    /// Armed tool kind changed; `None` means pan mode.
    fn tool_mode_changed(&mut self, armed: Option<ToolKind>);
    /// The tool set changed. Incomplete tools are included; see
    /// [`Tool::is_acceptable`].
    fn refresh_tool_metrics(&mut self, tools: &[Tool]);
    /// Block under the pointer, for coordinate and biome display.
    fn show_coordinates(&mut self, pos: BlockPos);
    fn sync_layer_selector(&mut self, layer_id: usize);
    /// The rendered layer changed and tiles must be regenerated.
    fn restart_pipeline(&mut self);
    fn report_unexpected(&mut self, error: &MapError);
}

/// Rendering layer selection owned by the host.
pub trait LayerContext {
    fn layer_id(&self) -> usize;
    fn set_layer_id(&mut self, layer_id: usize);
    fn layer_count(&self) -> usize;
}
