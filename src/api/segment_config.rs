use serde::{Deserialize, Serialize};

use crate::core::{BorderDrawMode, EmptyPointMode};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DEFAULT_HIT_TEST_PADDING_PX, DEFAULT_POINT_DISTANCE_PX};
use crate::render::Color;

/// Paint, empty-point and hit-test settings of one stacked area segment.
///
/// Missing JSON fields take their defaults, so a host can store only the
/// settings it overrides next to its series definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    #[serde(default)]
    pub empty_point_mode: EmptyPointMode,
    #[serde(default)]
    pub border_draw_mode: BorderDrawMode,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
    /// Widths that are not finite or `<= 0` disable the stroke.
    #[serde(default)]
    pub border_width: f64,
    #[serde(default)]
    pub dash_array: Vec<f64>,
    /// Zero disables cross-frame interpolation.
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    #[serde(default = "default_hit_test_padding_px")]
    pub hit_test_padding_px: f64,
    #[serde(default = "default_point_distance_px")]
    pub point_distance_px: f64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            empty_point_mode: EmptyPointMode::default(),
            border_draw_mode: BorderDrawMode::default(),
            fill_color: default_fill_color(),
            border_color: default_border_color(),
            border_width: 0.0,
            dash_array: Vec::new(),
            animation_duration_ms: default_animation_duration_ms(),
            hit_test_padding_px: default_hit_test_padding_px(),
            point_distance_px: default_point_distance_px(),
        }
    }
}

impl SegmentConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_empty_point_mode(mut self, mode: EmptyPointMode) -> Self {
        self.empty_point_mode = mode;
        self
    }

    #[must_use]
    pub fn with_border_draw_mode(mut self, mode: BorderDrawMode) -> Self {
        self.border_draw_mode = mode;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Sets border color and width together.
    #[must_use]
    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn with_dash_array(mut self, dash_array: Vec<f64>) -> Self {
        self.dash_array = dash_array;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_hit_test_padding_px(mut self, padding_px: f64) -> Self {
        self.hit_test_padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_point_distance_px(mut self, distance_px: f64) -> Self {
        self.point_distance_px = distance_px;
        self
    }

    #[must_use]
    pub fn animation_enabled(&self) -> bool {
        self.animation_duration_ms > 0
    }

    #[must_use]
    pub fn stroke_enabled(&self) -> bool {
        self.border_width.is_finite() && self.border_width > 0.0 && !self.border_color.is_transparent()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.fill_color.validate()?;
        self.border_color.validate()?;
        for (name, value) in [
            ("hit_test_padding_px", self.hit_test_padding_px),
            ("point_distance_px", self.point_distance_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse segment config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize segment config: {e}"))
        })
    }
}

fn default_fill_color() -> Color {
    Color::rgba(0.20, 0.47, 0.85, 0.75)
}

fn default_border_color() -> Color {
    Color::rgb(0.12, 0.30, 0.60)
}

fn default_animation_duration_ms() -> u64 {
    1500
}

fn default_hit_test_padding_px() -> f64 {
    DEFAULT_HIT_TEST_PADDING_PX
}

fn default_point_distance_px() -> f64 {
    DEFAULT_POINT_DISTANCE_PX
}
