//! Per-view controller tying the viewport and tool set to a host.
//!
//! One controller is created for each map view and owns its host handle, so
//! no global "current view" lookup is needed. State changes always complete
//! before the host is notified about them.

mod dispatch;
#[cfg(test)]
mod test_host;

use std::path::Path;

use crate::config::{load_viewer_config_from, ViewerConfig};
use crate::error::MapError;
use crate::geometry::{BlockPos, ScreenPoint, ViewportSize};
use crate::host::{CursorHint, LayerContext, MapHost};
use crate::state::ToolMode;
use crate::tools::{ArmOutcome, Placement, Removal, ToolKind, ToolSet};
use crate::viewport::{ScrollDirection, Viewport, ZoomChange};

#[derive(Debug)]
pub struct MapController<H: MapHost> {
    viewport: Viewport,
    tools: ToolSet,
    config: ViewerConfig,
    host: H,
    drag_anchor: Option<ScreenPoint>,
    last_world_pos: Option<BlockPos>,
}

impl<H: MapHost> MapController<H> {
    pub fn new(config: ViewerConfig, size: ViewportSize, host: H) -> Self {
        let viewport = Viewport::new(config.blocks_per_fragment, size);
        Self {
            viewport,
            tools: ToolSet::new(),
            config,
            host,
            drag_anchor: None,
            last_world_pos: None,
        }
    }

    /// Builds a controller from the settings in `path`. A missing file gives
    /// default settings; an unreadable or malformed one is reported to the
    /// host and defaults are used.
    pub fn from_config_file(path: &Path, size: ViewportSize, host: H) -> Self {
        match load_viewer_config_from(path) {
            Ok(config) => Self::new(config, size, host),
            Err(err) => {
                let mut controller = Self::new(ViewerConfig::default(), size, host);
                controller.report(err.into());
                controller
            }
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn mode(&self) -> ToolMode {
        self.tools.mode()
    }

    /// Replaces the settings. The fragment size stays fixed for the lifetime
    /// of the map.
    pub fn set_config(&mut self, config: ViewerConfig) {
        if config.blocks_per_fragment != self.viewport.blocks_per_fragment() {
            tracing::warn!(
                requested = config.blocks_per_fragment,
                current = self.viewport.blocks_per_fragment(),
                "fragment size cannot change on a live map; keeping current"
            );
        }
        self.config = config;
    }

    pub fn resize(&mut self, size: ViewportSize) {
        self.viewport.resize(size);
        self.host.request_repaint();
    }

    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.viewport.pan_by(delta_x, delta_y);
        self.host.request_repaint();
    }

    pub fn zoom_viewport(&mut self, direction: ScrollDirection) -> ZoomChange {
        let change = self
            .viewport
            .zoom(direction, self.config.restrict_max_zoom);
        if !change.changed() {
            tracing::debug!(scale = change.current, "zoom already at scale limit");
        }
        self.host.request_repaint();
        change
    }

    /// Moves the rendered layer one step up or down. Returns the new layer
    /// index when it changed.
    pub fn cycle_layer(
        &mut self,
        direction: ScrollDirection,
        layers: &mut dyn LayerContext,
    ) -> Option<usize> {
        let count = layers.layer_count();
        if count == 0 {
            tracing::debug!("layer context has no layers");
            return None;
        }
        let current = layers.layer_id();
        let next = match direction {
            ScrollDirection::Up => current.saturating_add(1),
            ScrollDirection::Down => current.saturating_sub(1),
        }
        .min(count - 1);
        if next == current {
            return None;
        }

        layers.set_layer_id(next);
        tracing::debug!(from = current, to = next, "rendering layer changed");
        self.host.sync_layer_selector(next);
        self.host.restart_pipeline();
        Some(next)
    }

    pub fn set_center(&mut self, pos: BlockPos) {
        self.viewport.set_center(pos);
        self.host.request_repaint();
    }

    pub fn center_pos(&self) -> Option<BlockPos> {
        self.viewport.center_pos()
    }

    /// Toggles `kind` the way a tool menu entry does.
    pub fn arm_tool(&mut self, kind: ToolKind) -> Option<ArmOutcome> {
        match self.tools.arm_tool(kind) {
            Ok(outcome) => {
                self.after_arming(outcome);
                Some(outcome)
            }
            Err(err) => {
                self.report(err.into());
                None
            }
        }
    }

    /// Returns to pan mode. Does nothing when no tool is armed.
    pub fn disarm(&mut self) -> Option<ArmOutcome> {
        if !self.tools.is_armed() {
            return None;
        }
        match self.tools.disarm() {
            Ok(outcome) => {
                self.after_arming(outcome);
                Some(outcome)
            }
            Err(err) => {
                self.report(err.into());
                None
            }
        }
    }

    fn after_arming(&mut self, outcome: ArmOutcome) {
        let cursor = if outcome.mode.is_armed() {
            CursorHint::Crosshair
        } else {
            CursorHint::Default
        };
        self.host.set_cursor(cursor);
        self.host.tool_mode_changed(outcome.mode.armed_kind());
        self.refresh_metrics();
        self.host.request_repaint();
    }

    /// Feeds a world position to the selected tool.
    pub fn place_point(&mut self, pos: BlockPos) -> Option<Placement> {
        match self.tools.place_point(pos) {
            Ok(placement) => {
                self.refresh_metrics();
                self.host.request_repaint();
                Some(placement)
            }
            Err(err) => {
                self.report(err.into());
                None
            }
        }
    }

    pub fn remove_tool(&mut self, id: u64) -> Option<Removal> {
        let removal = match self.tools.remove_tool(id) {
            Ok(removal) => Some(removal),
            Err(err) => {
                self.report(err.into());
                None
            }
        };
        self.refresh_metrics();
        self.host.request_repaint();
        removal
    }

    fn refresh_metrics(&mut self) {
        self.host.refresh_tool_metrics(self.tools.objects());
    }

    fn report(&mut self, error: MapError) {
        tracing::warn!(%error, "unexpected condition; event ignored");
        self.host.report_unexpected(&error);
    }
}
