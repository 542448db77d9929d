use serde::{Deserialize, Serialize};

use crate::core::{AreaPath, CoordinateMapper, EmptyPointMode, PixelPoint, SeriesValues};

/// Which edges of the stacked area receive the border stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderDrawMode {
    /// Stroke follows the whole fill outline.
    #[default]
    All,
    /// Stroke follows the top edge only.
    Top,
    /// Stroke follows the top edge and both side edges.
    ExcludeBottom,
}

/// Pixel-space point sequences of one segment.
///
/// Outside drop mode `high`, `low` and `high_indices` always share the input
/// length. In drop mode `high_indices[i]` is the data index of `high[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequences {
    pub high: Vec<PixelPoint>,
    pub low: Vec<PixelPoint>,
    pub high_indices: Vec<usize>,
}

impl PointSequences {
    pub fn clear(&mut self) {
        self.high.clear();
        self.low.clear();
        self.high_indices.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }
}

fn project<M: CoordinateMapper + ?Sized>(mapper: &M, x: f64, y: f64) -> PixelPoint {
    PixelPoint::new(mapper.point_to_pixel_x(x, y), mapper.point_to_pixel_y(x, y))
}

/// Projects stacked values into high (top) and low (bottom) pixel points.
///
/// Misaligned columns produce no points.
pub fn generate_points<M: CoordinateMapper + ?Sized>(
    values: &SeriesValues<'_>,
    mode: EmptyPointMode,
    mapper: &M,
    out: &mut PointSequences,
) {
    out.clear();
    if values.is_empty() || !values.is_aligned() {
        return;
    }

    let len = values.len();
    if mode.is_drop() {
        for i in 0..len {
            let x = values.x_values[i];
            if !values.raw_y_values[i].is_nan() {
                out.high.push(project(mapper, x, values.top_values[i]));
                out.high_indices.push(i);
            }
            if !values.prev_series_y_values[i].is_nan() {
                out.low.push(project(mapper, x, values.bottom_values[i]));
            }
        }
        return;
    }

    out.high.reserve(len);
    out.low.reserve(len);
    out.high_indices.reserve(len);
    for i in 0..len {
        if mode == EmptyPointMode::Gap && values.raw_y_values[i].is_nan() {
            out.high.push(PixelPoint::MISSING);
            out.low.push(PixelPoint::MISSING);
        } else {
            let x = values.x_values[i];
            out.high.push(project(mapper, x, values.top_values[i]));
            out.low.push(project(mapper, x, values.bottom_values[i]));
        }
        out.high_indices.push(i);
    }
}

/// Walks contiguous runs of `high`/`low`.
///
/// A run opens at an index whose low point is present and extends until a
/// missing high point (exclusive) or the end of the sequence. The callback
/// receives `start..end` for each run.
fn for_each_run(high: &[PixelPoint], low: &[PixelPoint], mut visit: impl FnMut(usize, usize)) {
    let len = high.len().min(low.len());
    let mut start = 0;
    while start < len {
        if low[start].is_missing() {
            start += 1;
            continue;
        }

        let end = (start..len)
            .find(|&index| high[index].is_missing())
            .unwrap_or(len);
        visit(start, end);
        start = end + 1;
    }
}

/// Builds the fill outline as one closed sub-path per contiguous run.
///
/// Each run goes up from its first low point, along the high points, then
/// back along its own low points in reverse.
pub fn build_fill_path(high: &[PixelPoint], low: &[PixelPoint], path: &mut AreaPath) {
    for_each_run(high, low, |start, end| {
        path.move_to(low[start]);
        for point in &high[start..end] {
            path.line_to(*point);
        }
        for point in low[start..end].iter().rev() {
            if !point.is_missing() {
                path.line_to(*point);
            }
        }
        path.close();
    });
}

/// Builds the drop-mode fill: high points forward, low points backward, closed.
pub fn build_drop_fill_path(high: &[PixelPoint], low: &[PixelPoint], path: &mut AreaPath) {
    let mut outline = high
        .iter()
        .chain(low.iter().rev())
        .filter(|point| !point.is_missing());
    let Some(first) = outline.next() else {
        return;
    };

    path.move_to(*first);
    for point in outline {
        path.line_to(*point);
    }
    path.close();
}

/// Builds an open polyline through the high points, broken at missing ones.
pub fn build_top_stroke_path(high: &[PixelPoint], path: &mut AreaPath) {
    let mut open = false;
    for point in high {
        if point.is_missing() {
            open = false;
        } else if open {
            path.line_to(*point);
        } else {
            path.move_to(*point);
            open = true;
        }
    }
}

/// Builds the top edge plus the two side edges of every run.
pub fn build_exclude_bottom_stroke_path(
    high: &[PixelPoint],
    low: &[PixelPoint],
    path: &mut AreaPath,
) {
    for_each_run(high, low, |start, end| {
        path.move_to(low[start]);
        for point in &high[start..end] {
            path.line_to(*point);
        }
        if end > start && !low[end - 1].is_missing() {
            path.line_to(low[end - 1]);
        }
    });
}

/// Drop-mode variant: first low point, every high point, last low point.
pub fn build_drop_exclude_bottom_stroke_path(
    high: &[PixelPoint],
    low: &[PixelPoint],
    path: &mut AreaPath,
) {
    let outline = low
        .first()
        .into_iter()
        .chain(high.iter())
        .chain(low.last())
        .filter(|point| !point.is_missing());
    for (index, point) in outline.enumerate() {
        if index == 0 {
            path.move_to(*point);
        } else {
            path.line_to(*point);
        }
    }
}

/// Rebuilds fill and stroke paths from point sequences.
///
/// Both paths are reset first. An empty high sequence leaves both empty.
pub fn build_paths(
    high: &[PixelPoint],
    low: &[PixelPoint],
    empty_point_mode: EmptyPointMode,
    border_draw_mode: BorderDrawMode,
    fill: &mut AreaPath,
    stroke: &mut AreaPath,
) {
    fill.reset();
    stroke.reset();
    if high.is_empty() {
        return;
    }

    let drop = empty_point_mode.is_drop();
    if drop {
        build_drop_fill_path(high, low, fill);
    } else {
        build_fill_path(high, low, fill);
    }

    match border_draw_mode {
        BorderDrawMode::All => stroke.clone_from(fill),
        BorderDrawMode::Top => build_top_stroke_path(high, stroke),
        BorderDrawMode::ExcludeBottom if drop => {
            build_drop_exclude_bottom_stroke_path(high, low, stroke);
        }
        BorderDrawMode::ExcludeBottom => build_exclude_bottom_stroke_path(high, low, stroke),
    }
}
