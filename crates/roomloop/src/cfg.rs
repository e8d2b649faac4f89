//! Drafting tolerances (snap thresholds and minimum lengths).
//!
//! Policy
//! - All knobs are expressed in the same linear unit as room coordinates.
//! - Defaults are fixed constants; `DraftCfg` exists so a host (CLI, UI) can
//!   override them from a file without touching call sites.
//! - Predicate-internal epsilons (cross-product sign, parallel test) are not
//!   knobs and stay crate-private.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length of a user-placed wall.
pub const MIN_WALL_LENGTH: f64 = 0.1;
/// Minimum length of an auto-generated segment on loop closure.
pub const MIN_SEGMENT_LENGTH: f64 = 0.01;
/// Vectors shorter than this are never normalized.
pub const MIN_VECTOR_LENGTH: f64 = 0.001;
/// Cursor-to-loop-start distance that triggers a closure snap.
pub const CLOSURE_SNAP_THRESHOLD: f64 = 0.5;
/// Angular band (degrees) for parallel/perpendicular snapping.
pub const PARALLEL_ANGLE_THRESHOLD_DEG: f64 = 5.0;

/// Sign threshold for 2D cross products in the convexity test.
pub(crate) const CROSS_EPS: f64 = 1e-10;
/// Denominator threshold below which two directions count as parallel.
pub(crate) const PARALLEL_EPS: f64 = 1e-10;

/// Drafting configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftCfg {
    pub min_wall_length: f64,
    pub min_segment_length: f64,
    pub min_vector_length: f64,
    pub closure_threshold: f64,
    pub angle_threshold_deg: f64,
}

impl Default for DraftCfg {
    fn default() -> Self {
        Self {
            min_wall_length: MIN_WALL_LENGTH,
            min_segment_length: MIN_SEGMENT_LENGTH,
            min_vector_length: MIN_VECTOR_LENGTH,
            closure_threshold: CLOSURE_SNAP_THRESHOLD,
            angle_threshold_deg: PARALLEL_ANGLE_THRESHOLD_DEG,
        }
    }
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CfgError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    /// Above 45° the parallel and perpendicular bands overlap.
    #[error("angle threshold must lie in (0, 45] degrees, got {0}")]
    AngleOutOfRange(f64),
}

impl DraftCfg {
    /// Check every knob; the angle band must keep parallel and perpendicular disjoint.
    pub fn validate(&self) -> Result<(), CfgError> {
        let knobs = [
            ("min_wall_length", self.min_wall_length),
            ("min_segment_length", self.min_segment_length),
            ("min_vector_length", self.min_vector_length),
            ("closure_threshold", self.closure_threshold),
        ];
        for (name, value) in knobs {
            if !value.is_finite() || value <= 0.0 {
                return Err(CfgError::NotPositive { name, value });
            }
        }
        let a = self.angle_threshold_deg;
        if !a.is_finite() || a <= 0.0 || a > 45.0 {
            return Err(CfgError::AngleOutOfRange(a));
        }
        Ok(())
    }

    #[inline]
    pub fn angle_threshold_rad(&self) -> f64 {
        self.angle_threshold_deg.to_radians()
    }
}
