use crate::error::MapError;
use crate::geometry::BlockPos;
use crate::host::{CursorHint, LayerContext, MapHost};
use crate::tools::{Tool, ToolKind};

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Signal {
    Repaint,
    Cursor(CursorHint),
    Mode(Option<ToolKind>),
    Metrics(Vec<u64>),
    Coordinates(BlockPos),
    LayerSelector(usize),
    Restart,
    Unexpected(String),
}

#[derive(Debug, Default)]
pub(super) struct RecordingHost {
    pub(super) signals: Vec<Signal>,
}

impl RecordingHost {
    pub(super) fn count(&self, signal: &Signal) -> usize {
        self.signals.iter().filter(|seen| *seen == signal).count()
    }
}

impl MapHost for RecordingHost {
    fn request_repaint(&mut self) {
        self.signals.push(Signal::Repaint);
    }

    fn set_cursor(&mut self, cursor: CursorHint) {
        self.signals.push(Signal::Cursor(cursor));
    }

    fn tool_mode_changed(&mut self, armed: Option<ToolKind>) {
        self.signals.push(Signal::Mode(armed));
    }

    fn refresh_tool_metrics(&mut self, tools: &[Tool]) {
        self.signals
            .push(Signal::Metrics(tools.iter().map(Tool::id).collect()));
    }

    fn show_coordinates(&mut self, pos: BlockPos) {
        self.signals.push(Signal::Coordinates(pos));
    }

    fn sync_layer_selector(&mut self, layer_id: usize) {
        self.signals.push(Signal::LayerSelector(layer_id));
    }

    fn restart_pipeline(&mut self) {
        self.signals.push(Signal::Restart);
    }

    fn report_unexpected(&mut self, error: &MapError) {
        self.signals.push(Signal::Unexpected(error.to_string()));
    }
}

#[derive(Debug)]
pub(super) struct FixedLayers {
    id: usize,
    count: usize,
}

impl FixedLayers {
    pub(super) fn new(id: usize, count: usize) -> Self {
        Self { id, count }
    }
}

impl LayerContext for FixedLayers {
    fn layer_id(&self) -> usize {
        self.id
    }

    fn set_layer_id(&mut self, layer_id: usize) {
        self.id = layer_id;
    }

    fn layer_count(&self) -> usize {
        self.count
    }
}
