use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PixelPoint;

/// Animation inputs for one recompute, supplied by the host's clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Progress of the running transition in `0..=1`.
    pub factor: f64,
    /// `true` while the whole chart is being reset; retained state is discarded.
    pub loading: bool,
    /// Marks the first frame of a new transition. The shape drawn last
    /// becomes the starting shape. A factor lower than the previous frame's
    /// starts a transition as well.
    #[serde(default)]
    pub restart: bool,
}

impl AnimationFrame {
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            loading: false,
            restart: false,
        }
    }

    /// Frame with no transition in flight.
    #[must_use]
    pub fn settled() -> Self {
        Self::new(1.0)
    }

    #[must_use]
    pub fn loading() -> Self {
        Self {
            factor: 1.0,
            loading: true,
            restart: false,
        }
    }

    /// Same frame, flagged as the start of a new transition.
    #[must_use]
    pub fn restarted(self) -> Self {
        Self {
            restart: true,
            ..self
        }
    }

    /// Factor clamped to `0..=1`; non-finite factors count as settled.
    #[must_use]
    pub fn clamped_factor(self) -> f64 {
        if self.factor.is_finite() {
            self.factor.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.clamped_factor() >= 1.0
    }
}

impl Default for AnimationFrame {
    fn default() -> Self {
        Self::settled()
    }
}

fn lerp(old: f64, new: f64, factor: f64) -> f64 {
    // A missing old coordinate anchors on the new one.
    if old.is_nan() || factor >= 1.0 {
        new
    } else {
        old + (new - old) * factor
    }
}

/// Blends one point from `old` toward `new`.
#[must_use]
pub fn lerp_point(old: PixelPoint, new: PixelPoint, factor: f64) -> PixelPoint {
    if new.is_missing() {
        return new;
    }
    PixelPoint::new(lerp(old.x, new.x, factor), lerp(old.y, new.y, factor))
}

/// Blends two point sequences.
///
/// The output always has the length of `new_points`: the shared prefix is
/// interpolated and any points beyond `old_points` are copied unanimated.
#[must_use]
pub fn lerp_points(old_points: &[PixelPoint], new_points: &[PixelPoint], factor: f64) -> Vec<PixelPoint> {
    new_points
        .iter()
        .enumerate()
        .map(|(index, new)| match old_points.get(index) {
            Some(old) => lerp_point(*old, *new, factor),
            None => *new,
        })
        .collect()
}

/// Brings the retained previous sequence to the length of `current`.
///
/// Growth appends the tail of `current`; shrinkage truncates the excess tail.
pub fn reconcile_previous(previous: &mut Vec<PixelPoint>, current: &[PixelPoint]) {
    let previous_len = previous.len();
    if previous_len < current.len() {
        previous.extend_from_slice(&current[previous_len..]);
    } else if previous_len > current.len() {
        previous.truncate(current.len());
    }
    if previous_len != current.len() {
        trace!(
            previous_len,
            current_len = current.len(),
            "reconciled retained point buffer"
        );
    }
}

/// Blends `current` in place from the reconciled `previous` sequence.
///
/// `previous` is seeded from `current` when empty and replaced by it once the
/// transition completes, so the next data update animates from the settled shape.
pub fn animate_in_place(previous: &mut Vec<PixelPoint>, current: &mut [PixelPoint], factor: f64) {
    if previous.is_empty() {
        previous.extend_from_slice(current);
        return;
    }

    reconcile_previous(previous, current);
    for (target, old) in current.iter_mut().zip(previous.iter()) {
        *target = lerp_point(*old, *target, factor);
    }

    if factor >= 1.0 {
        previous.copy_from_slice(current);
    }
}
