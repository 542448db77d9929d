use serde::{Deserialize, Serialize};

use crate::core::{BorderDrawMode, EmptyPointMode, PixelPoint};
use crate::error::{ChartError, ChartResult};

use super::StackedAreaSegment;

pub const SEGMENT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of a segment's geometry.
///
/// Missing points are stored as `None` because JSON has no NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSnapshot {
    pub empty_point_mode: EmptyPointMode,
    pub border_draw_mode: BorderDrawMode,
    pub high_points: Vec<Option<PixelPoint>>,
    pub low_points: Vec<Option<PixelPoint>>,
    pub previous_high_points: Vec<Option<PixelPoint>>,
    pub previous_low_points: Vec<Option<PixelPoint>>,
    pub fill_sub_paths: usize,
    pub stroke_sub_paths: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SegmentSnapshot,
}

fn encode(points: &[PixelPoint]) -> Vec<Option<PixelPoint>> {
    points
        .iter()
        .map(|point| (!point.is_missing()).then_some(*point))
        .collect()
}

impl SegmentSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SegmentSnapshotJsonContractV1 {
            schema_version: SEGMENT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SegmentSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SegmentSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SEGMENT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl StackedAreaSegment {
    #[must_use]
    pub fn snapshot(&self) -> SegmentSnapshot {
        SegmentSnapshot {
            empty_point_mode: self.config().empty_point_mode,
            border_draw_mode: self.config().border_draw_mode,
            high_points: encode(self.high_points()),
            low_points: encode(self.low_points()),
            previous_high_points: encode(self.previous_high_points()),
            previous_low_points: encode(self.previous_low_points()),
            fill_sub_paths: self.fill_path().sub_path_count(),
            stroke_sub_paths: self.stroke_path().sub_path_count(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
