use serde::{Deserialize, Serialize};

/// Policy applied to data points whose raw value is missing (NaN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPointMode {
    /// Missing points split the area into separate runs.
    #[default]
    Gap,
    /// Missing points collapse onto the stack baseline.
    Zero,
    /// Missing points are interpolated before stacking.
    Average,
    /// Missing points are omitted from the geometry altogether.
    Drop,
}

impl EmptyPointMode {
    #[must_use]
    pub fn is_drop(self) -> bool {
        matches!(self, Self::Drop)
    }
}

/// Read-only, index-aligned view over one stacked series for one frame.
///
/// The owning series keeps the columns; a segment borrows them for the
/// duration of a single `transform_values` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesValues<'a> {
    pub x_values: &'a [f64],
    /// Cumulative stack top.
    pub top_values: &'a [f64],
    /// Cumulative stack bottom (previous series' top or the baseline).
    pub bottom_values: &'a [f64],
    /// Un-stacked value, only consulted to detect missing data.
    pub raw_y_values: &'a [f64],
    /// Previous stacked series' raw value, used for drop-mode alignment.
    pub prev_series_y_values: &'a [f64],
}

impl<'a> SeriesValues<'a> {
    #[must_use]
    pub fn new(
        x_values: &'a [f64],
        top_values: &'a [f64],
        bottom_values: &'a [f64],
        raw_y_values: &'a [f64],
        prev_series_y_values: &'a [f64],
    ) -> Self {
        Self {
            x_values,
            top_values,
            bottom_values,
            raw_y_values,
            prev_series_y_values,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(&[], &[], &[], &[], &[])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// `true` when every column shares the x column's length.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        let len = self.len();
        self.top_values.len() == len
            && self.bottom_values.len() == len
            && self.raw_y_values.len() == len
            && self.prev_series_y_values.len() == len
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        self.raw_y_values.iter().filter(|v| v.is_nan()).count()
    }
}
