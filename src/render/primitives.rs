use serde::{Deserialize, Serialize};

use crate::core::{AreaPath, PathCommand};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// How a path primitive is painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathPaint {
    Fill {
        color: Color,
    },
    Stroke {
        color: Color,
        width: f64,
        /// Alternating on/off lengths in pixels; empty means solid.
        dash: Vec<f64>,
    },
}

/// Draw command for one path in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub path: AreaPath,
    pub paint: PathPaint,
}

impl PathPrimitive {
    #[must_use]
    pub fn fill(path: AreaPath, color: Color) -> Self {
        Self {
            path,
            paint: PathPaint::Fill { color },
        }
    }

    #[must_use]
    pub fn stroke(path: AreaPath, color: Color, width: f64, dash: Vec<f64>) -> Self {
        Self {
            path,
            paint: PathPaint::Stroke { color, width, dash },
        }
    }

    #[must_use]
    pub fn is_fill(&self) -> bool {
        matches!(self.paint, PathPaint::Fill { .. })
    }

    pub fn validate(&self) -> ChartResult<()> {
        let finite = self.path.commands().all(|command| match command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => {
                point.x.is_finite() && point.y.is_finite()
            }
            PathCommand::Close => true,
        });
        if !finite {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }

        match &self.paint {
            PathPaint::Fill { color } => color.validate(),
            PathPaint::Stroke { color, width, dash } => {
                if !width.is_finite() || *width <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "path stroke width must be finite and > 0".to_owned(),
                    ));
                }
                if dash.iter().any(|length| !length.is_finite() || *length < 0.0) {
                    return Err(ChartError::InvalidData(
                        "dash lengths must be finite and >= 0".to_owned(),
                    ));
                }
                color.validate()
            }
        }
    }
}

/// Keeps a dash pattern only when it can be drawn; otherwise the stroke is solid.
#[must_use]
pub fn sanitize_dash(dash: &[f64]) -> Vec<f64> {
    let drawable = dash.iter().all(|length| length.is_finite() && *length >= 0.0)
        && dash.iter().any(|length| *length > 0.0);
    if drawable { dash.to_vec() } else { Vec::new() }
}
