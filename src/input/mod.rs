//! Normalized pointer input consumed by the controller.

use crate::geometry::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl ModifierState {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        super_key: false,
    };

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press {
        button: PointerButton,
        point: ScreenPoint,
    },
    /// Pointer moved while `button` is held.
    Drag {
        button: PointerButton,
        point: ScreenPoint,
    },
    /// Pointer moved with no button held.
    Move { point: ScreenPoint },
    Release {
        button: PointerButton,
        point: ScreenPoint,
    },
    /// Positive units scroll down.
    Wheel {
        units: i32,
        modifiers: ModifierState,
    },
}
