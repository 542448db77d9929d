//! stacked-area-rs: stacked area segment geometry for charting hosts.
//!
//! The crate turns stacked `(x, top, bottom)` columns into pixel-space fill
//! and stroke paths, animates them across frames and answers pointer queries.
//! Axis projection, animation clocks and event routing stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SegmentConfig, StackedAreaSegment};
pub use error::{ChartError, ChartResult};
