use crate::geometry::BlockPos;

pub const CIRCLE_POINT_COUNT: usize = 2;

/// Circle given by its center and one point on the rim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub id: u64,
    points: Vec<BlockPos>,
}

impl Circle {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            points: Vec::with_capacity(CIRCLE_POINT_COUNT),
        }
    }

    pub fn points(&self) -> &[BlockPos] {
        &self.points
    }

    pub fn center(&self) -> Option<BlockPos> {
        self.points.first().copied()
    }

    pub fn rim(&self) -> Option<BlockPos> {
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
        self.points.len() >= CIRCLE_POINT_COUNT
    }

    pub fn is_acceptable(&self) -> bool {
        self.points.len() == CIRCLE_POINT_COUNT
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }
}
