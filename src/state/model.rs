use crate::tools::ToolKind;

/// Pointer interpretation mode. While `Armed`, presses place tool points
/// instead of starting a pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Idle,
    Armed(ToolKind),
}

impl ToolMode {
    pub const fn is_armed(self) -> bool {
        matches!(self, Self::Armed(_))
    }

    pub const fn armed_kind(self) -> Option<ToolKind> {
        match self {
            Self::Armed(kind) => Some(kind),
            Self::Idle => None,
        }
    }
}
