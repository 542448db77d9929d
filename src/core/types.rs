use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in pixel space.
///
/// A point is missing when either coordinate is NaN. Missing points are how
/// empty-value policies carry gaps through the geometry pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const MISSING: Self = Self {
        x: f64::NAN,
        y: f64::NAN,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_missing(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    #[must_use]
    pub fn distance_to(self, other: PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Coordinate along the primary (category) axis.
    #[must_use]
    pub fn primary(self, transposed: bool) -> f64 {
        if transposed { self.y } else { self.x }
    }
}
