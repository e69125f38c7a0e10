//! Shared coordinate primitives used by the viewport, tools and controller.

/// A world position in blocks. The vertical axis is not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Floors the block position into regions of `scale` blocks.
    pub const fn to_region(self, scale: i32) -> RegionPos {
        if scale <= 1 {
            return RegionPos {
                x: self.x,
                z: self.z,
            };
        }
        RegionPos {
            x: self.x.div_euclid(scale),
            z: self.z.div_euclid(scale),
        }
    }
}

/// A position in regions of some layer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionPos {
    pub x: i32,
    pub z: i32,
}

/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(self) -> ScreenPoint {
        ScreenPoint::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Inclusive range of fragment indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentRange {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl FragmentRange {
    pub fn iter(self) -> impl Iterator<Item = (i32, i32)> {
        (self.min_z..=self.max_z)
            .flat_map(move |z| (self.min_x..=self.max_x).map(move |x| (x, z)))
    }
}
