use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Data-to-pixel projection consumed by segment geometry.
///
/// Implementations must be pure: the same inputs map to the same pixels for
/// as long as the axis ranges stay unchanged. NaN inputs map to NaN.
pub trait CoordinateMapper {
    fn point_to_pixel_x(&self, x: f64, y: f64) -> f64;

    fn point_to_pixel_y(&self, x: f64, y: f64) -> f64;

    /// Minimum of the visible range of the x (category) data axis.
    fn visible_range_minimum(&self) -> f64;

    /// `true` when the x data axis runs vertically.
    fn is_transposed(&self) -> bool;

    /// Pixel coordinate of `x` along the primary axis.
    fn primary_pixel(&self, x: f64) -> f64 {
        if self.is_transposed() {
            self.point_to_pixel_y(x, 0.0)
        } else {
            self.point_to_pixel_x(x, 0.0)
        }
    }
}

/// Cartesian mapper over a viewport with optional transposition and inversion.
///
/// Pixel `y` grows downward, so an upright axis puts its maximum at row 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianMapper {
    viewport: Viewport,
    x_scale: LinearScale,
    y_scale: LinearScale,
    transposed: bool,
    x_inverted: bool,
    y_inverted: bool,
}

impl CartesianMapper {
    pub fn new(viewport: Viewport, x_scale: LinearScale, y_scale: LinearScale) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            viewport,
            x_scale,
            y_scale,
            transposed: false,
            x_inverted: false,
            y_inverted: false,
        })
    }

    /// Builds a mapper straight from axis ranges.
    pub fn from_ranges(
        viewport: Viewport,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> ChartResult<Self> {
        Self::new(
            viewport,
            LinearScale::new(x_range.0, x_range.1)?,
            LinearScale::new(y_range.0, y_range.1)?,
        )
    }

    #[must_use]
    pub fn with_transposed(mut self, transposed: bool) -> Self {
        self.transposed = transposed;
        self
    }

    #[must_use]
    pub fn with_x_inverted(mut self, inverted: bool) -> Self {
        self.x_inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_y_inverted(mut self, inverted: bool) -> Self {
        self.y_inverted = inverted;
        self
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    fn horizontal(&self, scale: LinearScale, value: f64, inverted: bool) -> f64 {
        let width = f64::from(self.viewport.width);
        let px = scale.domain_to_pixel(value, width);
        if inverted { width - px } else { px }
    }

    fn vertical(&self, scale: LinearScale, value: f64, inverted: bool) -> f64 {
        let height = f64::from(self.viewport.height);
        let px = scale.domain_to_pixel(value, height);
        if inverted { px } else { height - px }
    }
}

impl CoordinateMapper for CartesianMapper {
    fn point_to_pixel_x(&self, x: f64, y: f64) -> f64 {
        if self.transposed {
            self.horizontal(self.y_scale, y, self.y_inverted)
        } else {
            self.horizontal(self.x_scale, x, self.x_inverted)
        }
    }

    fn point_to_pixel_y(&self, x: f64, y: f64) -> f64 {
        if self.transposed {
            self.vertical(self.x_scale, x, self.x_inverted)
        } else {
            self.vertical(self.y_scale, y, self.y_inverted)
        }
    }

    fn visible_range_minimum(&self) -> f64 {
        self.x_scale.minimum()
    }

    fn is_transposed(&self) -> bool {
        self.transposed
    }
}
