use tracing::{debug, trace, warn};

use crate::core::animation::animate_in_place;
use crate::core::path_builder::{PointSequences, build_paths, generate_points};
use crate::core::{
    AnimationFrame, AreaPath, BorderDrawMode, CoordinateMapper, EmptyPointMode, PixelPoint,
    SeriesValues,
};

/// Geometry owned by one segment across frames.
///
/// The previous-frame buffers are only written by the animation step of
/// `rebuild`; nothing else mutates them. They hold the shape a transition
/// starts from: the points drawn last when the transition began.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryState {
    fill_path: AreaPath,
    stroke_path: AreaPath,
    current: PointSequences,
    previous_high: Vec<PixelPoint>,
    previous_low: Vec<PixelPoint>,
    transposed: bool,
    primary_anchor: f64,
    last_factor: f64,
}

/// Policies and animation inputs for one rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RebuildOptions {
    pub empty_point_mode: EmptyPointMode,
    pub border_draw_mode: BorderDrawMode,
    pub animation: AnimationFrame,
    pub animation_enabled: bool,
}

impl GeometryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one full recompute: points, interpolation, then paths.
    pub fn rebuild<M: CoordinateMapper + ?Sized>(
        &mut self,
        values: &SeriesValues<'_>,
        mapper: &M,
        options: RebuildOptions,
    ) {
        if !values.is_aligned() {
            warn!(
                x_len = values.x_values.len(),
                top_len = values.top_values.len(),
                bottom_len = values.bottom_values.len(),
                raw_len = values.raw_y_values.len(),
                prev_len = values.prev_series_y_values.len(),
                "misaligned series columns, producing empty geometry"
            );
        }

        self.transposed = mapper.is_transposed();
        self.primary_anchor = mapper.primary_pixel(mapper.visible_range_minimum());

        let animate = !options.animation.loading && options.animation_enabled;
        let factor = options.animation.clamped_factor();
        if animate && (options.animation.restart || factor < self.last_factor) {
            // `current` still holds the points drawn by the previous frame.
            self.previous_high.clone_from(&self.current.high);
            self.previous_low.clone_from(&self.current.low);
            trace!(factor, points = self.previous_high.len(), "started transition from drawn shape");
        }
        self.last_factor = factor;

        generate_points(values, options.empty_point_mode, mapper, &mut self.current);

        if animate {
            animate_in_place(&mut self.previous_high, &mut self.current.high, factor);
            animate_in_place(&mut self.previous_low, &mut self.current.low, factor);
        } else {
            self.previous_high.clear();
            self.previous_low.clear();
        }

        build_paths(
            &self.current.high,
            &self.current.low,
            options.empty_point_mode,
            options.border_draw_mode,
            &mut self.fill_path,
            &mut self.stroke_path,
        );

        debug!(
            points = values.len(),
            high_points = self.current.high.len(),
            low_points = self.current.low.len(),
            fill_sub_paths = self.fill_path.sub_path_count(),
            stroke_sub_paths = self.stroke_path.sub_path_count(),
            "rebuilt stacked area geometry"
        );
    }

    /// Releases every retained buffer.
    pub fn clear(&mut self) {
        self.fill_path.reset();
        self.stroke_path.reset();
        self.current.clear();
        self.previous_high.clear();
        self.previous_low.clear();
        self.current.high.shrink_to_fit();
        self.current.low.shrink_to_fit();
        self.current.high_indices.shrink_to_fit();
        self.previous_high.shrink_to_fit();
        self.previous_low.shrink_to_fit();
        self.transposed = false;
        self.primary_anchor = 0.0;
        self.last_factor = 0.0;
    }

    #[must_use]
    pub fn fill_path(&self) -> &AreaPath {
        &self.fill_path
    }

    #[must_use]
    pub fn stroke_path(&self) -> &AreaPath {
        &self.stroke_path
    }

    #[must_use]
    pub fn high_points(&self) -> &[PixelPoint] {
        &self.current.high
    }

    #[must_use]
    pub fn low_points(&self) -> &[PixelPoint] {
        &self.current.low
    }

    /// Data index of every high point.
    #[must_use]
    pub fn high_indices(&self) -> &[usize] {
        &self.current.high_indices
    }

    #[must_use]
    pub fn previous_high_points(&self) -> &[PixelPoint] {
        &self.previous_high
    }

    #[must_use]
    pub fn previous_low_points(&self) -> &[PixelPoint] {
        &self.previous_low
    }

    #[must_use]
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Primary-axis pixel of the visible range minimum at the last rebuild.
    #[must_use]
    pub fn primary_anchor(&self) -> f64 {
        self.primary_anchor
    }
}
