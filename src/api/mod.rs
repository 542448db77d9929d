//! Host-facing surface: segment lifecycle, configuration and snapshots.

mod json_contract;
mod segment;
mod segment_config;

pub use json_contract::{
    SEGMENT_SNAPSHOT_JSON_SCHEMA_V1, SegmentSnapshot, SegmentSnapshotJsonContractV1,
};
pub use segment::StackedAreaSegment;
pub use segment_config::SegmentConfig;
