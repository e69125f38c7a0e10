use super::Viewport;
use crate::geometry::{BlockPos, FragmentRange, ScreenPoint};

impl Viewport {
    fn is_mappable(&self) -> bool {
        !self.size.is_degenerate()
            && self.pixels_per_fragment.is_finite()
            && self.pixels_per_fragment > 0.0
            && self.pan_x.is_finite()
            && self.pan_y.is_finite()
    }

    /// Maps a pointer position to the world block under it.
    ///
    /// Returns `None` when the viewport has no area or the result does not fit
    /// a block coordinate.
    pub fn screen_to_world(&self, point: ScreenPoint) -> Option<BlockPos> {
        if !self.is_mappable() {
            tracing::debug!(size = ?self.size, "no world mapping for degenerate viewport");
            return None;
        }
        let width = f64::from(self.size.width);
        let height = f64::from(self.size.height);
        let blocks = f64::from(self.blocks_per_fragment);

        let norm_x = (point.x - width / 2.0 - self.pan_x) / width;
        let norm_y = (point.y - height / 2.0 - self.pan_y) / height;
        let blocks_per_width = (width / self.pixels_per_fragment) * blocks;
        let blocks_per_height = (height / self.pixels_per_fragment) * blocks;

        let x = round_block(norm_x * blocks_per_width)?;
        let z = round_block(norm_y * blocks_per_height)?;
        Some(BlockPos::new(x, z))
    }

    /// Screen position at which `pos` renders. Inverse of [`Self::screen_to_world`]
    /// up to rounding.
    pub fn world_to_screen(&self, pos: BlockPos) -> Option<ScreenPoint> {
        if !self.is_mappable() {
            return None;
        }
        let center = self.size.center();
        let scale = self.scale();
        Some(ScreenPoint::new(
            f64::from(pos.x) * scale + center.x + self.pan_x,
            f64::from(pos.z) * scale + center.y + self.pan_y,
        ))
    }

    /// World block under the viewport center.
    pub fn center_pos(&self) -> Option<BlockPos> {
        self.screen_to_world(self.size.center())
    }

    /// Pans so that `pos` renders at the viewport center.
    pub fn set_center(&mut self, pos: BlockPos) {
        let scale = self.scale();
        self.pan_x = -f64::from(pos.x) * scale;
        self.pan_y = -f64::from(pos.z) * scale;
    }

    /// Fragments intersecting the viewport.
    pub fn visible_fragments(&self) -> Option<FragmentRange> {
        if !self.is_mappable() {
            return None;
        }
        let half_width = f64::from(self.size.width) / 2.0;
        let half_height = f64::from(self.size.height) / 2.0;
        let ppf = self.pixels_per_fragment;

        let min_x = floor_index((-half_width - self.pan_x) / ppf)?;
        let max_x = floor_index((half_width - self.pan_x) / ppf).map(|max| {
            if ((half_width - self.pan_x) / ppf).fract() == 0.0 {
                max.saturating_sub(1)
            } else {
                max
            }
        })?;
        let min_z = floor_index((-half_height - self.pan_y) / ppf)?;
        let max_z = floor_index((half_height - self.pan_y) / ppf).map(|max| {
            if ((half_height - self.pan_y) / ppf).fract() == 0.0 {
                max.saturating_sub(1)
            } else {
                max
            }
        })?;

        Some(FragmentRange {
            min_x,
            min_z,
            max_x: max_x.max(min_x),
            max_z: max_z.max(min_z),
        })
    }

    /// Screen position of the top-left corner of fragment `(fragment_x, fragment_z)`.
    pub fn fragment_origin(&self, fragment_x: i32, fragment_z: i32) -> Option<ScreenPoint> {
        if !self.is_mappable() {
            return None;
        }
        let center = self.size.center();
        Some(ScreenPoint::new(
            f64::from(fragment_x) * self.pixels_per_fragment + center.x + self.pan_x,
            f64::from(fragment_z) * self.pixels_per_fragment + center.y + self.pan_y,
        ))
    }
}

// f64::round rounds half away from zero.
fn round_block(value: f64) -> Option<i32> {
    to_i32(value.round())
}

fn floor_index(value: f64) -> Option<i32> {
    to_i32(value.floor())
}

fn to_i32(value: f64) -> Option<i32> {
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}
