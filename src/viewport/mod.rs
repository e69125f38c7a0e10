//! Pan offset and zoom scale of the map view.
//!
//! The pan offset is measured in screen pixels from the viewport center to the
//! world origin. The scale is expressed as screen pixels per fragment; every
//! world/screen conversion uses `pixels_per_fragment / blocks_per_fragment` as
//! its single multiplier.

mod transform;

use crate::geometry::ViewportSize;

pub const DEFAULT_BLOCKS_PER_FRAGMENT: u32 = 512;

const REFERENCE_BLOCKS_PER_FRAGMENT: f64 = 512.0;
const DEFAULT_PIXELS_PER_FRAGMENT: f64 = 256.0;
const MAX_PIXELS_PER_FRAGMENT: f64 = 2048.0;
const RESTRICTED_MIN_PIXELS_PER_FRAGMENT: f64 = 32.0;

/// Wheel direction. `Down` corresponds to positive scroll units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Direction for zooming: positive units zoom out, anything else zooms in.
    pub const fn zoom_from_units(units: i32) -> Self {
        if units > 0 {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// Direction for layer stepping: negative units step up, anything else
    /// steps down.
    pub const fn layer_from_units(units: i32) -> Self {
        if units < 0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomChange {
    pub previous: f64,
    pub current: f64,
    pub clamped: bool,
}

impl ZoomChange {
    pub fn ratio(&self) -> f64 {
        self.current / self.previous
    }

    pub fn changed(&self) -> bool {
        self.current != self.previous
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pan_x: f64,
    pan_y: f64,
    pixels_per_fragment: f64,
    blocks_per_fragment: u32,
    size: ViewportSize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKS_PER_FRAGMENT, ViewportSize::default())
    }
}

impl Viewport {
    pub fn new(blocks_per_fragment: u32, size: ViewportSize) -> Self {
        let blocks_per_fragment = if blocks_per_fragment == 0 {
            tracing::warn!("fragment size of zero blocks requested; using default");
            DEFAULT_BLOCKS_PER_FRAGMENT
        } else {
            blocks_per_fragment
        };
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            pixels_per_fragment: fragment_relative(DEFAULT_PIXELS_PER_FRAGMENT, blocks_per_fragment),
            blocks_per_fragment,
            size,
        }
    }

    pub const fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub const fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub const fn pixels_per_fragment(&self) -> f64 {
        self.pixels_per_fragment
    }

    pub const fn blocks_per_fragment(&self) -> u32 {
        self.blocks_per_fragment
    }

    pub const fn size(&self) -> ViewportSize {
        self.size
    }

    /// Screen pixels per block.
    pub fn scale(&self) -> f64 {
        self.pixels_per_fragment / f64::from(self.blocks_per_fragment)
    }

    pub fn resize(&mut self, size: ViewportSize) {
        self.size = size;
    }

    pub fn max_pixels_per_fragment(&self) -> f64 {
        fragment_relative(MAX_PIXELS_PER_FRAGMENT, self.blocks_per_fragment)
    }

    pub fn min_pixels_per_fragment(&self, restrict_max_zoom: bool) -> f64 {
        if restrict_max_zoom {
            fragment_relative(RESTRICTED_MIN_PIXELS_PER_FRAGMENT, self.blocks_per_fragment)
        } else {
            f64::MIN_POSITIVE
        }
    }

    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) {
        if !delta_x.is_finite() || !delta_y.is_finite() {
            tracing::debug!(delta_x, delta_y, "ignoring non-finite pan delta");
            return;
        }
        if delta_x == 0.0 && delta_y == 0.0 {
            return;
        }
        self.pan_x += delta_x;
        self.pan_y += delta_y;
    }

    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        if pan_x.is_finite() && pan_y.is_finite() {
            self.pan_x = pan_x;
            self.pan_y = pan_y;
        }
    }

    /// Sets the scale directly, keeping the pan untouched. Non-positive and
    /// non-finite values are rejected.
    pub fn set_pixels_per_fragment(&mut self, pixels_per_fragment: f64) -> bool {
        if !pixels_per_fragment.is_finite() || pixels_per_fragment <= 0.0 {
            return false;
        }
        self.pixels_per_fragment = pixels_per_fragment;
        true
    }

    /// Halves the scale on `Down`, doubles it on `Up`, clamps it and rescales
    /// the pan by the same ratio. Zoom therefore pivots on the world origin,
    /// not on the pointer.
    pub fn zoom(&mut self, direction: ScrollDirection, restrict_max_zoom: bool) -> ZoomChange {
        let previous = self.pixels_per_fragment;
        let requested = match direction {
            ScrollDirection::Down => previous / 2.0,
            ScrollDirection::Up => previous * 2.0,
        };

        let max = self.max_pixels_per_fragment();
        let min = self.min_pixels_per_fragment(restrict_max_zoom);
        let current = if requested > max {
            max
        } else if requested < min {
            min
        } else {
            requested
        };
        let clamped = current != requested;
        if clamped {
            tracing::debug!(requested, current, restrict_max_zoom, "zoom scale clamped");
        }

        let change = ZoomChange {
            previous,
            current,
            clamped,
        };
        let ratio = change.ratio();
        self.pan_x *= ratio;
        self.pan_y *= ratio;
        self.pixels_per_fragment = current;
        change
    }
}

fn fragment_relative(reference_pixels: f64, blocks_per_fragment: u32) -> f64 {
    reference_pixels * f64::from(blocks_per_fragment) / REFERENCE_BLOCKS_PER_FRAGMENT
}
