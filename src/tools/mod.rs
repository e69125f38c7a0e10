mod area;
mod circle;
mod operations;
mod query;
mod ruler;

pub use crate::geometry::BlockPos;
pub use area::{Area, AREA_MIN_VERTICES};
pub use circle::{Circle, CIRCLE_POINT_COUNT};
pub use operations::{ArmOutcome, Placement, Removal};
pub use ruler::{Ruler, RULER_POINT_COUNT};

use crate::state::ArmingMachine;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Ruler,
    Area,
    Circle,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [Self::Ruler, Self::Area, Self::Circle];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ruler => "Ruler",
            Self::Area => "Area",
            Self::Circle => "Circle",
        }
    }

    /// Label of the menu entry toggling this tool.
    pub fn menu_label(self, armed: bool) -> String {
        let prefix = if armed { "Disable" } else { "Enable" };
        format!("{prefix} {}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    Ruler(Ruler),
    Area(Area),
    Circle(Circle),
}

impl Tool {
    pub fn new(kind: ToolKind, id: u64) -> Self {
        match kind {
            ToolKind::Ruler => Self::Ruler(Ruler::new(id)),
            ToolKind::Area => Self::Area(Area::new(id)),
            ToolKind::Circle => Self::Circle(Circle::new(id)),
        }
    }

    pub const fn id(&self) -> u64 {
        match self {
            Self::Ruler(ruler) => ruler.id,
            Self::Area(area) => area.id,
            Self::Circle(circle) => circle.id,
        }
    }

    pub const fn kind(&self) -> ToolKind {
        match self {
            Self::Ruler(_) => ToolKind::Ruler,
            Self::Area(_) => ToolKind::Area,
            Self::Circle(_) => ToolKind::Circle,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn points(&self) -> &[BlockPos] {
        match self {
            Self::Ruler(ruler) => ruler.points(),
            Self::Area(area) => area.vertices(),
            Self::Circle(circle) => circle.points(),
        }
    }

    /// Returns `false` once the point budget is exhausted.
    pub fn add_point(&mut self, pos: BlockPos) -> bool {
        match self {
            Self::Ruler(ruler) => ruler.add_point(pos),
            Self::Area(area) => area.add_point(pos),
            Self::Circle(circle) => circle.add_point(pos),
        }
    }

    /// Whether enough points exist for the tool to be measured.
    pub fn is_acceptable(&self) -> bool {
        match self {
            Self::Ruler(ruler) => ruler.is_acceptable(),
            Self::Area(area) => area.is_acceptable(),
            Self::Circle(circle) => circle.is_acceptable(),
        }
    }

    pub fn is_full(&self) -> bool {
        match self {
            Self::Ruler(ruler) => ruler.is_full(),
            Self::Area(area) => area.is_closed(),
            Self::Circle(circle) => circle.is_full(),
        }
    }

    /// Empty tool of the same kind.
    pub fn duplicate(&self, id: u64) -> Self {
        Self::new(self.kind(), id)
    }

    pub fn reset(&mut self) {
        match self {
            Self::Ruler(ruler) => ruler.reset(),
            Self::Area(area) => area.reset(),
            Self::Circle(circle) => circle.reset(),
        }
    }

    fn as_area(&self) -> Option<&Area> {
        match self {
            Self::Area(area) => Some(area),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("tool #{id} is not in the tool set")]
    ToolNotFound { id: u64 },
    #[error("no tool is selected")]
    NoToolSelected,
}

pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Ordered store of measurement tools plus the arming state.
///
/// Tools are addressed by stable ids so a placement that spawns a duplicate
/// never invalidates references held by callers.
#[derive(Debug)]
pub struct ToolSet {
    mode: ArmingMachine,
    objects: Vec<Tool>,
    selected: Option<u64>,
    next_id: u64,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolSet {
    pub fn new() -> Self {
        Self {
            mode: ArmingMachine::new(),
            objects: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn push_new(&mut self, kind: ToolKind) -> u64 {
        let id = self.allocate_id();
        self.objects.push(Tool::new(kind, id));
        id
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.objects.iter().position(|tool| tool.id() == id)
    }

    fn find_object_mut(&mut self, id: u64) -> Option<&mut Tool> {
        self.objects.iter_mut().find(|tool| tool.id() == id)
    }
}
