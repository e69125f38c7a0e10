use super::MapController;
use crate::geometry::{BlockPos, ScreenPoint};
use crate::host::{CursorHint, LayerContext, MapHost};
use crate::input::{InputEvent, ModifierState, PointerButton};
use crate::viewport::ScrollDirection;

impl<H: MapHost> MapController<H> {
    /// Routes one input event. Only the primary button pans and places points.
    pub fn handle(&mut self, event: InputEvent, layers: &mut dyn LayerContext) {
        match event {
            InputEvent::Press { button, point } => self.pointer_pressed(button, point),
            InputEvent::Drag { button, point } => self.pointer_dragged(button, point),
            InputEvent::Move { point } => self.pointer_moved(point),
            InputEvent::Release { button, point } => self.pointer_released(button, point),
            InputEvent::Wheel { units, modifiers } => {
                self.wheel_scrolled(units, modifiers, layers)
            }
        }
    }

    pub fn pointer_pressed(&mut self, button: PointerButton, point: ScreenPoint) {
        if button != PointerButton::Primary {
            return;
        }
        self.drag_anchor = Some(point);
        if !self.tools.is_armed() {
            self.host.set_cursor(CursorHint::Move);
            return;
        }

        let Some(pos) = self.snapped_world_pos(point) else {
            tracing::debug!(?point, "press has no world position; ignored");
            return;
        };
        self.place_point(pos);
    }

    /// World block under `point`, pulled onto the selected area's first
    /// vertex when the press lands close enough to close it.
    fn snapped_world_pos(&self, point: ScreenPoint) -> Option<BlockPos> {
        let pos = self.viewport.screen_to_world(point)?;
        let snap = self.tools.selected_closing_vertex().filter(|vertex| {
            self.viewport
                .world_to_screen(*vertex)
                .is_some_and(|screen| screen.distance_to(point) <= self.config.area_close_snap_px)
        });
        Some(snap.unwrap_or(pos))
    }

    pub fn pointer_dragged(&mut self, button: PointerButton, point: ScreenPoint) {
        if button != PointerButton::Primary || self.tools.is_armed() {
            return;
        }
        let Some(anchor) = self.drag_anchor.replace(point) else {
            return;
        };
        self.pan(point.x - anchor.x, point.y - anchor.y);
    }

    pub fn pointer_moved(&mut self, point: ScreenPoint) {
        if let Some(pos) = self.viewport.screen_to_world(point) {
            self.last_world_pos = Some(pos);
        }
        if let Some(pos) = self.last_world_pos {
            self.host.show_coordinates(pos);
        }
        self.host.request_repaint();
    }

    pub fn pointer_released(&mut self, button: PointerButton, _point: ScreenPoint) {
        if button != PointerButton::Primary {
            return;
        }
        self.drag_anchor = None;
        if !self.tools.is_armed() {
            self.host.set_cursor(CursorHint::Default);
        }
    }

    /// Ctrl+wheel steps the rendering layer; a plain wheel zooms.
    pub fn wheel_scrolled(
        &mut self,
        units: i32,
        modifiers: ModifierState,
        layers: &mut dyn LayerContext,
    ) {
        if modifiers.ctrl {
            self.cycle_layer(ScrollDirection::layer_from_units(units), layers);
        } else {
            self.zoom_viewport(ScrollDirection::zoom_from_units(units));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_host::{FixedLayers, RecordingHost, Signal};
    use super::*;
    use crate::config::ViewerConfig;
    use crate::geometry::ViewportSize;
    use crate::state::ToolMode;
    use crate::tools::ToolKind;

    fn controller() -> MapController<RecordingHost> {
        MapController::new(
            ViewerConfig::default(),
            ViewportSize::new(800, 600),
            RecordingHost::default(),
        )
    }

    fn press(x: f64, y: f64) -> InputEvent {
        InputEvent::Press {
            button: PointerButton::Primary,
            point: ScreenPoint::new(x, y),
        }
    }

    fn drag(x: f64, y: f64) -> InputEvent {
        InputEvent::Drag {
            button: PointerButton::Primary,
            point: ScreenPoint::new(x, y),
        }
    }

    fn release(x: f64, y: f64) -> InputEvent {
        InputEvent::Release {
            button: PointerButton::Primary,
            point: ScreenPoint::new(x, y),
        }
    }

    fn wheel(units: i32, modifiers: ModifierState) -> InputEvent {
        InputEvent::Wheel { units, modifiers }
    }

    #[test]
    fn idle_drag_pans_by_sum_of_deltas() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(0, 1);

        for event in [
            press(100.0, 100.0),
            drag(110.0, 95.0),
            drag(130.0, 90.0),
            drag(125.0, 120.0),
            release(125.0, 120.0),
        ] {
            controller.handle(event, &mut layers);
        }

        assert_eq!(controller.viewport().pan_x(), 25.0);
        assert_eq!(controller.viewport().pan_y(), 20.0);
        let signals = &controller.host().signals;
        assert_eq!(signals.first(), Some(&Signal::Cursor(CursorHint::Move)));
        assert_eq!(signals.last(), Some(&Signal::Cursor(CursorHint::Default)));
        assert_eq!(controller.host().count(&Signal::Repaint), 3);
    }

    #[test]
    fn drag_without_press_only_sets_anchor() {
        let mut controller = controller();
        controller.pointer_dragged(PointerButton::Primary, ScreenPoint::new(10.0, 10.0));
        controller.pointer_dragged(PointerButton::Primary, ScreenPoint::new(15.0, 10.0));
        assert_eq!(controller.viewport().pan_x(), 5.0);
    }

    #[test]
    fn armed_drag_never_pans() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(0, 1);
        controller.arm_tool(ToolKind::Ruler);

        for event in [
            press(400.0, 300.0),
            drag(450.0, 350.0),
            drag(500.0, 320.0),
            release(500.0, 320.0),
        ] {
            controller.handle(event, &mut layers);
        }

        assert_eq!(controller.viewport().pan_x(), 0.0);
        assert_eq!(controller.viewport().pan_y(), 0.0);
        assert!(!controller
            .host()
            .signals
            .contains(&Signal::Cursor(CursorHint::Move)));
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(0, 1);
        controller.arm_tool(ToolKind::Ruler);
        controller.host_mut().signals.clear();

        controller.handle(
            InputEvent::Press {
                button: PointerButton::Secondary,
                point: ScreenPoint::new(400.0, 300.0),
            },
            &mut layers,
        );

        assert!(controller.host().signals.is_empty());
        assert!(controller
            .tools()
            .selected()
            .expect("selected")
            .points()
            .is_empty());
    }

    #[test]
    fn ruler_presses_fill_then_duplicate() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(0, 1);
        controller.arm_tool(ToolKind::Ruler);

        controller.handle(press(400.0, 300.0), &mut layers);
        controller.handle(press(450.0, 300.0), &mut layers);
        let first = controller.tools().selected_id().expect("first ruler");
        assert_eq!(
            controller.tools().get(first).expect("ruler").points(),
            &[BlockPos::new(0, 0), BlockPos::new(100, 0)]
        );

        controller.handle(press(400.0, 350.0), &mut layers);

        let tools = controller.tools();
        assert_eq!(tools.len(), 2);
        let second = tools.selected().expect("second ruler");
        assert_ne!(second.id(), first);
        assert_eq!(second.kind(), ToolKind::Ruler);
        assert_eq!(second.points(), &[BlockPos::new(0, 100)]);
        assert_eq!(tools.measurable().count(), 1);
    }

    #[test]
    fn press_near_first_vertex_closes_area() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(0, 1);
        controller.arm_tool(ToolKind::Area);

        controller.handle(press(400.0, 300.0), &mut layers);
        controller.handle(press(420.0, 300.0), &mut layers);
        controller.handle(press(420.0, 320.0), &mut layers);
        controller.handle(press(403.0, 302.0), &mut layers);

        let area = controller.tools().selected().expect("area");
        assert!(area.is_full());
        assert_eq!(area.points().len(), 3);
        assert!(area.is_acceptable());

        controller.handle(press(500.0, 300.0), &mut layers);
        assert_eq!(controller.tools().len(), 2);
        assert_eq!(
            controller.tools().selected().expect("new area").points(),
            &[BlockPos::new(200, 0)]
        );
    }

    #[test]
    fn press_far_from_first_vertex_extends_area() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(0, 1);
        controller.arm_tool(ToolKind::Area);

        for (x, y) in [(400.0, 300.0), (420.0, 300.0), (420.0, 320.0), (380.0, 320.0)] {
            controller.handle(press(x, y), &mut layers);
        }

        let area = controller.tools().selected().expect("area");
        assert!(!area.is_full());
        assert_eq!(area.points().len(), 4);
    }

    #[test]
    fn armed_press_on_degenerate_viewport_is_dropped() {
        let mut controller = MapController::new(
            ViewerConfig::default(),
            ViewportSize::new(0, 0),
            RecordingHost::default(),
        );
        let mut layers = FixedLayers::new(0, 1);
        controller.arm_tool(ToolKind::Circle);
        controller.host_mut().signals.clear();

        controller.handle(press(1.0, 1.0), &mut layers);

        assert!(controller.host().signals.is_empty());
        assert_eq!(controller.mode(), ToolMode::Armed(ToolKind::Circle));
    }

    #[test]
    fn pointer_move_reports_block_and_keeps_last_known() {
        let mut controller = controller();
        controller.pointer_moved(ScreenPoint::new(450.0, 250.0));
        assert_eq!(
            controller.host().signals,
            vec![Signal::Coordinates(BlockPos::new(100, -100)), Signal::Repaint]
        );

        controller.resize(ViewportSize::new(0, 0));
        controller.host_mut().signals.clear();
        controller.pointer_moved(ScreenPoint::new(1.0, 1.0));
        assert_eq!(
            controller.host().signals,
            vec![Signal::Coordinates(BlockPos::new(100, -100)), Signal::Repaint]
        );
    }

    #[test]
    fn wheel_without_ctrl_zooms_and_rescales_pan() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(2, 5);
        controller.pan(100.0, 50.0);

        controller.handle(wheel(1, ModifierState::NONE), &mut layers);

        assert_eq!(controller.viewport().pixels_per_fragment(), 128.0);
        assert_eq!(controller.viewport().pan_x(), 50.0);
        assert_eq!(controller.viewport().pan_y(), 25.0);
        assert_eq!(layers.layer_id(), 2);

        controller.handle(wheel(-3, ModifierState::NONE), &mut layers);
        assert_eq!(controller.viewport().pixels_per_fragment(), 256.0);
    }

    #[test]
    fn ctrl_wheel_steps_layer_without_zooming() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(2, 5);

        controller.handle(wheel(-1, ModifierState::ctrl()), &mut layers);
        assert_eq!(layers.layer_id(), 3);
        controller.handle(wheel(1, ModifierState::ctrl()), &mut layers);
        controller.handle(wheel(1, ModifierState::ctrl()), &mut layers);
        assert_eq!(layers.layer_id(), 1);

        assert_eq!(controller.viewport().pixels_per_fragment(), 256.0);
        assert_eq!(controller.host().count(&Signal::Restart), 3);
        assert!(controller.host().signals.contains(&Signal::LayerSelector(3)));
    }

    #[test]
    fn zero_wheel_units_zoom_in_or_step_layer_down() {
        let mut controller = controller();
        let mut layers = FixedLayers::new(2, 5);

        controller.handle(wheel(0, ModifierState::NONE), &mut layers);
        assert_eq!(controller.viewport().pixels_per_fragment(), 512.0);
        assert_eq!(layers.layer_id(), 2);

        controller.handle(wheel(0, ModifierState::ctrl()), &mut layers);
        assert_eq!(layers.layer_id(), 1);
        assert_eq!(controller.viewport().pixels_per_fragment(), 512.0);
    }
}
