use tracing::debug;

use crate::core::{
    AnimationFrame, AreaPath, CoordinateMapper, GeometryState, PixelPoint, RebuildOptions,
    SeriesValues,
};
use crate::error::ChartResult;
use crate::interaction::{
    TooltipPayload, TrackballPayload, contains_point, nearest_point_index,
};
use crate::render::{PathPrimitive, RenderFrame, Renderer, sanitize_dash};

use super::SegmentConfig;

/// Renderable geometry for one stacked area series.
///
/// The segment is recomputed through `transform_values` once per data
/// update, resize or animation tick, and queried/painted between recomputes.
/// Callers serialize those calls; the segment never shares its buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedAreaSegment {
    config: SegmentConfig,
    geometry: GeometryState,
    x_values: Vec<f64>,
    top_values: Vec<f64>,
    bottom_values: Vec<f64>,
}

impl StackedAreaSegment {
    pub fn new(config: SegmentConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            geometry: GeometryState::new(),
            x_values: Vec::new(),
            top_values: Vec::new(),
            bottom_values: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SegmentConfig {
        &self.config
    }

    /// Replaces the configuration. Geometry picks it up on the next recompute.
    pub fn set_config(&mut self, config: SegmentConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Recomputes points, interpolation and paths for the current frame.
    ///
    /// Idempotent for unchanged inputs once the animation has settled.
    pub fn transform_values<M: CoordinateMapper + ?Sized>(
        &mut self,
        values: SeriesValues<'_>,
        mapper: &M,
        animation: AnimationFrame,
    ) {
        self.x_values.clear();
        self.top_values.clear();
        self.bottom_values.clear();
        if values.is_aligned() {
            self.x_values.extend_from_slice(values.x_values);
            self.top_values.extend_from_slice(values.top_values);
            self.bottom_values.extend_from_slice(values.bottom_values);
        }

        self.geometry.rebuild(
            &values,
            mapper,
            RebuildOptions {
                empty_point_mode: self.config.empty_point_mode,
                border_draw_mode: self.config.border_draw_mode,
                animation,
                animation_enabled: self.config.animation_enabled(),
            },
        );
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    #[must_use]
    pub fn fill_path(&self) -> &AreaPath {
        self.geometry.fill_path()
    }

    #[must_use]
    pub fn stroke_path(&self) -> &AreaPath {
        self.geometry.stroke_path()
    }

    #[must_use]
    pub fn high_points(&self) -> &[PixelPoint] {
        self.geometry.high_points()
    }

    #[must_use]
    pub fn low_points(&self) -> &[PixelPoint] {
        self.geometry.low_points()
    }

    #[must_use]
    pub fn previous_high_points(&self) -> &[PixelPoint] {
        self.geometry.previous_high_points()
    }

    #[must_use]
    pub fn previous_low_points(&self) -> &[PixelPoint] {
        self.geometry.previous_low_points()
    }

    #[must_use]
    pub fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    #[must_use]
    pub fn top_values(&self) -> &[f64] {
        &self.top_values
    }

    #[must_use]
    pub fn bottom_values(&self) -> &[f64] {
        &self.bottom_values
    }

    /// `true` when `position` falls in the hit square of any rendered point.
    #[must_use]
    pub fn contains(&self, position: PixelPoint) -> bool {
        contains_point(
            self.geometry.high_points(),
            position,
            self.config.hit_test_padding_px,
        )
    }

    /// Data index of the point nearest to `position` along the primary axis.
    #[must_use]
    pub fn nearest_point_index(&self, position: PixelPoint) -> Option<usize> {
        let slot = self.nearest_slot(position)?;
        self.geometry.high_indices().get(slot).copied()
    }

    /// Tooltip for the nearest point, if it lies within the point distance.
    #[must_use]
    pub fn tooltip_info(&self, position: PixelPoint) -> Option<TooltipPayload> {
        let slot = self.nearest_slot(position)?;
        let point = *self.geometry.high_points().get(slot)?;
        if point.is_missing() || point.distance_to(position) > self.config.point_distance_px {
            return None;
        }
        self.tooltip_for_slot(slot)
    }

    /// Tooltip for the data point at `index`, regardless of pointer position.
    #[must_use]
    pub fn tooltip_info_at(&self, index: usize) -> Option<TooltipPayload> {
        let slot = self.geometry.high_indices().binary_search(&index).ok()?;
        if self.geometry.high_points().get(slot)?.is_missing() {
            return None;
        }
        self.tooltip_for_slot(slot)
    }

    /// Trackball payload for the nearest point along the primary axis.
    #[must_use]
    pub fn trackball_info(&self, position: PixelPoint) -> Option<TrackballPayload> {
        let slot = self.nearest_slot(position)?;
        let tooltip = self.tooltip_for_slot(slot)?;
        Some(TrackballPayload {
            index: tooltip.index,
            x_value: tooltip.x_value,
            y_value: tooltip.y_value,
            position: tooltip.position,
        })
    }

    fn nearest_slot(&self, position: PixelPoint) -> Option<usize> {
        nearest_point_index(
            self.geometry.high_points(),
            position,
            self.geometry.is_transposed(),
            self.geometry.primary_anchor(),
        )
    }

    fn tooltip_for_slot(&self, slot: usize) -> Option<TooltipPayload> {
        let index = *self.geometry.high_indices().get(slot)?;
        let position = *self.geometry.high_points().get(slot)?;
        let x_value = *self.x_values.get(index)?;
        let top_value = *self.top_values.get(index)?;
        let bottom_value = *self.bottom_values.get(index)?;
        Some(TooltipPayload {
            index,
            x_value,
            top_value,
            bottom_value,
            y_value: top_value - bottom_value,
            position,
        })
    }

    /// Materializes the draw calls for the current geometry: fill, then stroke.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new();
        let fill = self.geometry.fill_path();
        if !fill.is_empty() && !self.config.fill_color.is_transparent() {
            frame = frame.with_path(PathPrimitive::fill(fill.clone(), self.config.fill_color));
        }

        let stroke = self.geometry.stroke_path();
        if !stroke.is_empty() && self.config.stroke_enabled() {
            frame = frame.with_path(PathPrimitive::stroke(
                stroke.clone(),
                self.config.border_color,
                self.config.border_width,
                sanitize_dash(&self.config.dash_array),
            ));
        }
        frame
    }

    /// Issues the segment's draw calls on `renderer`.
    pub fn on_paint<R: Renderer + ?Sized>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_render_frame();
        if frame.is_empty() {
            return Ok(());
        }
        renderer.render(&frame)
    }

    /// Releases all geometry and value buffers.
    pub fn dispose(&mut self) {
        self.geometry.clear();
        self.x_values = Vec::new();
        self.top_values = Vec::new();
        self.bottom_values = Vec::new();
        debug!("disposed stacked area segment");
    }
}
