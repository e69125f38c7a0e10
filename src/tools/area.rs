use crate::geometry::BlockPos;

pub const AREA_MIN_VERTICES: usize = 3;

/// Closed polygon. Placing a vertex on the first vertex once at least
/// [`AREA_MIN_VERTICES`] exist closes the polygon; a closed area accepts no
/// further vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub id: u64,
    vertices: Vec<BlockPos>,
    closed: bool,
}

impl Area {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            vertices: Vec::new(),
            closed: false,
        }
    }

    pub fn vertices(&self) -> &[BlockPos] {
        &self.vertices
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// First vertex, once the polygon could be closed on it.
    pub fn closing_vertex(&self) -> Option<BlockPos> {
        if self.closed || self.vertices.len() < AREA_MIN_VERTICES {
            return None;
        }
        self.vertices.first().copied()
    }

    pub fn add_point(&mut self, pos: BlockPos) -> bool {
        if self.closed {
            return false;
        }
        if self.closing_vertex() == Some(pos) {
            self.closed = true;
            return true;
        }
        self.vertices.push(pos);
        true
    }

    pub fn is_acceptable(&self) -> bool {
        self.vertices.len() >= AREA_MIN_VERTICES
    }

    pub fn reset(&mut self) {
        self.vertices.clear();
        self.closed = false;
    }
}
