use crate::geometry::BlockPos;

pub const RULER_POINT_COUNT: usize = 2;

/// Straight-line measurement between two blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruler {
    pub id: u64,
    points: Vec<BlockPos>,
}

impl Ruler {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            points: Vec::with_capacity(RULER_POINT_COUNT),
        }
    }

    pub fn points(&self) -> &[BlockPos] {
        &self.points
    }

    pub fn start(&self) -> Option<BlockPos> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<BlockPos> {
        self.points.get(1).copied()
    }

    pub fn add_point(&mut self, pos: BlockPos) -> bool {
        if self.is_full() {
            return false;
        }
        self.points.push(pos);
        true
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= RULER_POINT_COUNT
    }

    pub fn is_acceptable(&self) -> bool {
        self.points.len() == RULER_POINT_COUNT
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }
}
