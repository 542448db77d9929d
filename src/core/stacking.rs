use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EmptyPointMode, SeriesValues};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingMode {
    /// Values accumulate as given.
    #[default]
    Normal,
    /// Every x column is normalised so the full stack spans 0..100.
    Percent,
}

/// Several series sharing one x column, stacked in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedSeriesSet {
    x_values: Vec<f64>,
    series: IndexMap<String, Vec<f64>>,
    stacking_mode: StackingMode,
}

/// Owned, stacked columns for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedColumns {
    pub name: String,
    pub x_values: Vec<f64>,
    pub top_values: Vec<f64>,
    pub bottom_values: Vec<f64>,
    pub raw_y_values: Vec<f64>,
    pub prev_series_y_values: Vec<f64>,
}

impl StackedColumns {
    #[must_use]
    pub fn values(&self) -> SeriesValues<'_> {
        SeriesValues::new(
            &self.x_values,
            &self.top_values,
            &self.bottom_values,
            &self.raw_y_values,
            &self.prev_series_y_values,
        )
    }
}

impl StackedSeriesSet {
    pub fn new(x_values: Vec<f64>) -> ChartResult<Self> {
        if x_values.iter().any(|x| !x.is_finite()) {
            return Err(ChartError::InvalidData(
                "x values must be finite".to_owned(),
            ));
        }

        Ok(Self {
            x_values,
            series: IndexMap::new(),
            stacking_mode: StackingMode::Normal,
        })
    }

    /// Uses unix seconds of each timestamp as the x column.
    pub fn from_times(times: &[DateTime<Utc>]) -> ChartResult<Self> {
        Self::new(
            times
                .iter()
                .map(|time| time.timestamp_millis() as f64 / 1000.0)
                .collect(),
        )
    }

    #[must_use]
    pub fn with_stacking_mode(mut self, mode: StackingMode) -> Self {
        self.stacking_mode = mode;
        self
    }

    #[must_use]
    pub fn stacking_mode(&self) -> StackingMode {
        self.stacking_mode
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Inserts or replaces a series. Replacing keeps its stacking position.
    ///
    /// NaN marks a missing value.
    pub fn insert_series(&mut self, name: impl Into<String>, values: Vec<f64>) -> ChartResult<()> {
        let name = name.into();
        if values.len() != self.x_values.len() {
            return Err(ChartError::MismatchedLength {
                field: name,
                expected: self.x_values.len(),
                actual: values.len(),
            });
        }

        debug!(series = %name, len = values.len(), "insert stacked series");
        self.series.insert(name, values);
        Ok(())
    }

    /// Inserts a series of decimal values; `None` marks a missing value.
    pub fn insert_decimal_series(
        &mut self,
        name: impl Into<String>,
        values: &[Option<Decimal>],
    ) -> ChartResult<()> {
        let mut converted = Vec::with_capacity(values.len());
        for value in values {
            converted.push(match value {
                Some(value) => value.to_f64().ok_or_else(|| {
                    ChartError::InvalidData(format!("value {value} cannot be represented as f64"))
                })?,
                None => f64::NAN,
            });
        }
        self.insert_series(name, converted)
    }

    pub fn remove_series(&mut self, name: &str) -> Option<Vec<f64>> {
        self.series.shift_remove(name)
    }

    /// Stacks every series bottom-up under `mode`.
    ///
    /// Missing values contribute nothing to the stack. Under `Zero` and
    /// `Average` they are replaced before stacking, so the raw column handed to
    /// segments only keeps NaN for `Gap` and `Drop`.
    #[must_use]
    pub fn stack(&self, mode: EmptyPointMode) -> Vec<StackedColumns> {
        let len = self.x_values.len();
        let processed: Vec<Vec<f64>> = self
            .series
            .values()
            .map(|values| fill_missing(values, mode))
            .collect();

        let totals = match self.stacking_mode {
            StackingMode::Normal => None,
            StackingMode::Percent => Some(column_totals(&processed, len)),
        };

        let mut cumulative = vec![0.0; len];
        let mut stacked = Vec::with_capacity(processed.len());
        for (position, (name, raw)) in self.series.keys().zip(&processed).enumerate() {
            let bottom_values = cumulative.clone();
            for (index, value) in raw.iter().enumerate() {
                let contribution = if value.is_nan() { 0.0 } else { *value };
                cumulative[index] += match &totals {
                    Some(totals) if totals[index] != 0.0 => contribution / totals[index] * 100.0,
                    Some(_) => 0.0,
                    None => contribution,
                };
            }

            let prev_series_y_values = match position {
                0 => vec![0.0; len],
                _ => processed[position - 1].clone(),
            };

            stacked.push(StackedColumns {
                name: name.clone(),
                x_values: self.x_values.clone(),
                top_values: cumulative.clone(),
                bottom_values,
                raw_y_values: raw.clone(),
                prev_series_y_values,
            });
        }

        debug!(
            series = stacked.len(),
            points = len,
            ?mode,
            stacking_mode = ?self.stacking_mode,
            "stacked series set"
        );
        stacked
    }
}

/// Range covering every finite bottom and top value, for axis fitting.
#[must_use]
pub fn value_bounds(stacked: &[StackedColumns]) -> Option<(f64, f64)> {
    let finite = || {
        stacked
            .iter()
            .flat_map(|columns| columns.bottom_values.iter().chain(&columns.top_values))
            .copied()
            .filter(|value| value.is_finite())
            .map(OrderedFloat)
    };
    let min = finite().min()?;
    let max = finite().max()?;
    Some((min.0, max.0))
}

fn fill_missing(values: &[f64], mode: EmptyPointMode) -> Vec<f64> {
    match mode {
        EmptyPointMode::Gap | EmptyPointMode::Drop => values.to_vec(),
        EmptyPointMode::Zero => values
            .iter()
            .map(|value| if value.is_nan() { 0.0 } else { *value })
            .collect(),
        EmptyPointMode::Average => (0..values.len())
            .map(|index| {
                if !values[index].is_nan() {
                    return values[index];
                }
                let neighbour = |value: Option<&f64>| value.map(|v| if v.is_nan() { 0.0 } else { *v });
                let left = index.checked_sub(1).and_then(|i| neighbour(values.get(i)));
                let right = neighbour(values.get(index + 1));
                match (left, right) {
                    (Some(left), Some(right)) => (left + right) / 2.0,
                    (Some(single), None) | (None, Some(single)) => single,
                    (None, None) => 0.0,
                }
            })
            .collect(),
    }
}

fn column_totals(processed: &[Vec<f64>], len: usize) -> Vec<f64> {
    let mut totals = vec![0.0; len];
    for raw in processed {
        for (total, value) in totals.iter_mut().zip(raw) {
            if !value.is_nan() {
                *total += *value;
            }
        }
    }
    totals
}
