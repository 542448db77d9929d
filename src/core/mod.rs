pub mod animation;
pub mod geometry;
pub mod mapper;
pub mod path;
pub mod path_builder;
pub mod scale;
pub mod series_values;
pub mod stacking;
pub mod types;

pub use animation::{AnimationFrame, lerp_point, lerp_points, reconcile_previous};
pub use geometry::{GeometryState, RebuildOptions};
pub use mapper::{CartesianMapper, CoordinateMapper};
pub use path::{AreaPath, PathCommand, SubPath};
pub use path_builder::{
    BorderDrawMode, PointSequences, build_drop_exclude_bottom_stroke_path, build_drop_fill_path,
    build_exclude_bottom_stroke_path, build_fill_path, build_paths, build_top_stroke_path,
    generate_points,
};
pub use scale::LinearScale;
pub use series_values::{EmptyPointMode, SeriesValues};
pub use stacking::{StackedColumns, StackedSeriesSet, StackingMode, value_bounds};
pub use types::{PixelPoint, Viewport};
