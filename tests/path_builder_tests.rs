use stacked_area::core::{
    AreaPath, BorderDrawMode, CoordinateMapper, EmptyPointMode, PathCommand, PixelPoint,
    PointSequences, SeriesValues, build_paths, generate_points,
};

struct IdentityMapper;

impl CoordinateMapper for IdentityMapper {
    fn point_to_pixel_x(&self, x: f64, _y: f64) -> f64 {
        x
    }

    fn point_to_pixel_y(&self, _x: f64, y: f64) -> f64 {
        y
    }

    fn visible_range_minimum(&self) -> f64 {
        0.0
    }

    fn is_transposed(&self) -> bool {
        false
    }
}

struct Columns {
    x: Vec<f64>,
    top: Vec<f64>,
    bottom: Vec<f64>,
    raw: Vec<f64>,
    prev: Vec<f64>,
}

impl Columns {
    fn new(raw: &[f64], prev: &[f64]) -> Self {
        let x = (0..raw.len()).map(|i| i as f64 * 10.0).collect();
        let bottom = vec![100.0; raw.len()];
        let top = raw
            .iter()
            .map(|v| if v.is_nan() { 100.0 } else { 100.0 - v })
            .collect();
        Self {
            x,
            top,
            bottom,
            raw: raw.to_vec(),
            prev: prev.to_vec(),
        }
    }

    fn values(&self) -> SeriesValues<'_> {
        SeriesValues::new(&self.x, &self.top, &self.bottom, &self.raw, &self.prev)
    }
}

fn project(columns: &Columns, mode: EmptyPointMode) -> PointSequences {
    let mut points = PointSequences::default();
    generate_points(&columns.values(), mode, &IdentityMapper, &mut points);
    points
}

fn paths(points: &PointSequences, mode: EmptyPointMode, border: BorderDrawMode) -> (AreaPath, AreaPath) {
    let mut fill = AreaPath::new();
    let mut stroke = AreaPath::new();
    build_paths(&points.high, &points.low, mode, border, &mut fill, &mut stroke);
    (fill, stroke)
}

fn pt(x: f64, y: f64) -> PixelPoint {
    PixelPoint::new(x, y)
}

const NAN: f64 = f64::NAN;

#[test]
fn non_drop_modes_keep_one_high_and_low_point_per_index() {
    let columns = Columns::new(&[10.0, NAN, 30.0, 40.0], &[0.0; 4]);
    for mode in [EmptyPointMode::Gap, EmptyPointMode::Zero, EmptyPointMode::Average] {
        let points = project(&columns, mode);
        assert_eq!(points.high.len(), 4);
        assert_eq!(points.low.len(), 4);
        assert_eq!(points.high_indices, vec![0, 1, 2, 3]);
    }
}

#[test]
fn gap_mode_forces_missing_points() {
    let columns = Columns::new(&[10.0, NAN, 30.0], &[0.0; 3]);
    let points = project(&columns, EmptyPointMode::Gap);
    assert!(points.high[1].is_missing());
    assert!(points.low[1].is_missing());

    let zero = project(&columns, EmptyPointMode::Zero);
    assert_eq!(zero.high[1], pt(10.0, 100.0));
}

#[test]
fn drop_mode_skips_missing_sources_independently() {
    let columns = Columns::new(&[10.0, 20.0, NAN, 40.0, 50.0], &[0.0, 0.0, 0.0, NAN, 0.0]);
    let points = project(&columns, EmptyPointMode::Drop);

    assert_eq!(points.high.len(), 4);
    assert_eq!(points.low.len(), 4);
    assert_eq!(points.high_indices, vec![0, 1, 3, 4]);
    assert_eq!(points.high[2], pt(30.0, 60.0));
    assert_eq!(points.low[2], pt(20.0, 100.0));
}

#[test]
fn gap_fill_splits_into_one_closed_sub_path_per_run() {
    let columns = Columns::new(&[10.0, 20.0, NAN, 40.0, 50.0], &[0.0; 5]);
    let points = project(&columns, EmptyPointMode::Gap);
    let (fill, _) = paths(&points, EmptyPointMode::Gap, BorderDrawMode::All);

    assert_eq!(fill.sub_path_count(), 2);
    assert_eq!(
        fill.sub_paths()[0].commands(),
        &[
            PathCommand::MoveTo(pt(0.0, 100.0)),
            PathCommand::LineTo(pt(0.0, 90.0)),
            PathCommand::LineTo(pt(10.0, 80.0)),
            PathCommand::LineTo(pt(10.0, 100.0)),
            PathCommand::LineTo(pt(0.0, 100.0)),
            PathCommand::Close,
        ]
    );
    assert_eq!(fill.sub_paths()[1].start(), Some(pt(30.0, 100.0)));
    assert_eq!(fill.sub_paths()[1].end(), Some(pt(30.0, 100.0)));
    assert!(fill.sub_paths().iter().all(|sub_path| sub_path.is_closed()));
}

#[test]
fn fill_without_missing_points_is_single_sub_path() {
    let columns = Columns::new(&[10.0, 20.0, 30.0], &[0.0; 3]);
    let points = project(&columns, EmptyPointMode::Gap);
    let (fill, _) = paths(&points, EmptyPointMode::Gap, BorderDrawMode::All);

    assert_eq!(fill.sub_path_count(), 1);
    // Three high points up, three low points back.
    assert_eq!(fill.sub_paths()[0].segment_count(), 6);
}

#[test]
fn leading_and_trailing_gaps_do_not_open_runs() {
    let columns = Columns::new(&[NAN, 20.0, 30.0, NAN], &[0.0; 4]);
    let points = project(&columns, EmptyPointMode::Gap);
    let (fill, stroke) = paths(&points, EmptyPointMode::Gap, BorderDrawMode::Top);

    assert_eq!(fill.sub_path_count(), 1);
    assert_eq!(fill.sub_paths()[0].start(), Some(pt(10.0, 100.0)));
    assert_eq!(stroke.sub_path_count(), 1);
}

#[test]
fn top_stroke_traces_high_points_only() {
    let columns = Columns::new(&[10.0, 20.0, NAN, 40.0, 50.0], &[0.0; 5]);
    let points = project(&columns, EmptyPointMode::Gap);
    let (_, stroke) = paths(&points, EmptyPointMode::Gap, BorderDrawMode::Top);

    assert_eq!(stroke.sub_path_count(), 2);
    assert_eq!(stroke.sub_paths()[0].points(), vec![pt(0.0, 90.0), pt(10.0, 80.0)]);
    assert_eq!(stroke.sub_paths()[1].points(), vec![pt(30.0, 60.0), pt(40.0, 50.0)]);
    assert!(!stroke.sub_paths()[0].is_closed());
}

#[test]
fn exclude_bottom_stroke_draws_sides_but_not_bottom_edge() {
    let columns = Columns::new(&[10.0, 20.0, NAN, 40.0, 50.0], &[0.0; 5]);
    let points = project(&columns, EmptyPointMode::Gap);
    let (_, stroke) = paths(&points, EmptyPointMode::Gap, BorderDrawMode::ExcludeBottom);

    assert_eq!(stroke.sub_path_count(), 2);
    assert_eq!(
        stroke.sub_paths()[0].points(),
        vec![pt(0.0, 100.0), pt(0.0, 90.0), pt(10.0, 80.0), pt(10.0, 100.0)]
    );
    assert_eq!(
        stroke.sub_paths()[1].points(),
        vec![pt(30.0, 100.0), pt(30.0, 60.0), pt(40.0, 50.0), pt(40.0, 100.0)]
    );
    assert!(stroke.sub_paths().iter().all(|sub_path| !sub_path.is_closed()));
}

#[test]
fn drop_fill_walks_high_forward_and_low_backward() {
    let columns = Columns::new(&[10.0, 20.0, NAN, 40.0, 50.0], &[0.0, 0.0, 0.0, NAN, 0.0]);
    let points = project(&columns, EmptyPointMode::Drop);
    let (fill, _) = paths(&points, EmptyPointMode::Drop, BorderDrawMode::All);

    assert_eq!(fill.sub_path_count(), 1);
    let sub_path = &fill.sub_paths()[0];
    assert!(sub_path.is_closed());
    assert_eq!(sub_path.start(), Some(pt(0.0, 90.0)));
    assert_eq!(sub_path.segment_count(), 7);
    assert_eq!(sub_path.end(), Some(pt(0.0, 100.0)));
}

#[test]
fn drop_exclude_bottom_runs_from_first_to_last_low_point() {
    let columns = Columns::new(&[10.0, 20.0, NAN, 40.0, 50.0], &[0.0, 0.0, 0.0, NAN, 0.0]);
    let points = project(&columns, EmptyPointMode::Drop);
    let (_, stroke) = paths(&points, EmptyPointMode::Drop, BorderDrawMode::ExcludeBottom);

    assert_eq!(stroke.sub_path_count(), 1);
    let sub_path = &stroke.sub_paths()[0];
    assert_eq!(sub_path.start(), Some(pt(0.0, 100.0)));
    assert_eq!(sub_path.end(), Some(pt(40.0, 100.0)));
    assert_eq!(sub_path.segment_count(), 5);
}

#[test]
fn border_mode_all_reuses_fill_outline() {
    let columns = Columns::new(&[10.0, NAN, 30.0, 40.0], &[0.0; 4]);
    let points = project(&columns, EmptyPointMode::Gap);
    let (fill, stroke) = paths(&points, EmptyPointMode::Gap, BorderDrawMode::All);

    assert_eq!(stroke, fill);
    assert_eq!(stroke.sub_path_count(), fill.sub_path_count());
    for (stroke_sub, fill_sub) in stroke.sub_paths().iter().zip(fill.sub_paths()) {
        assert_eq!(stroke_sub.start(), fill_sub.start());
        assert_eq!(stroke_sub.end(), fill_sub.end());
    }
}

#[test]
fn empty_input_produces_empty_paths() {
    let columns = Columns::new(&[], &[]);
    for mode in [EmptyPointMode::Gap, EmptyPointMode::Drop] {
        let points = project(&columns, mode);
        assert!(points.is_empty());
        let (fill, stroke) = paths(&points, mode, BorderDrawMode::ExcludeBottom);
        assert!(fill.is_empty());
        assert!(stroke.is_empty());
    }
}

#[test]
fn misaligned_columns_produce_no_points() {
    let columns = Columns::new(&[10.0, 20.0, 30.0], &[0.0; 2]);
    let points = project(&columns, EmptyPointMode::Gap);
    assert!(points.is_empty());
}

#[test]
fn all_missing_gap_series_has_no_geometry() {
    let columns = Columns::new(&[NAN, NAN, NAN], &[0.0; 3]);
    let points = project(&columns, EmptyPointMode::Gap);
    let (fill, stroke) = paths(&points, EmptyPointMode::Gap, BorderDrawMode::ExcludeBottom);
    assert_eq!(points.high.len(), 3);
    assert!(fill.is_empty());
    assert!(stroke.is_empty());
}
