//! Angle-constraint snapping for the wall currently being drawn.
//!
//! Priority order
//! 1. closure: cursor near the loop start wins over everything.
//! 2. parallel: direction within the angle band of the previous wall.
//! 3. perpendicular: direction within the angle band of its normal.
//!
//! With the default 5° band the parallel (`|cos| > cos θ`) and perpendicular
//! (`|cos| < sin θ`) bands are disjoint; that only holds for θ ≤ 45°, which
//! `DraftCfg::validate` enforces.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::DraftCfg;
use crate::geom2::{distance, perpendicular, safe_normalize};

/// Which constraint produced a snapped position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapType {
    Parallel,
    Perpendicular,
    Closure,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    pub snapped_pos: Vector2<f64>,
    pub snap_type: SnapType,
}

impl SnapResult {
    #[inline]
    fn free(pos: Vector2<f64>) -> Self {
        Self {
            snapped_pos: pos,
            snap_type: SnapType::None,
        }
    }
}

/// Best-fit snapped cursor position.
///
/// - `prev_dir`: unit direction of the previous wall, `None` for the first one.
/// - `loop_start`: offered only once closing is allowed.
/// - `anchor`: the last placed vertex.
pub fn snap_to_constraint(
    prev_dir: Option<Vector2<f64>>,
    cursor: Vector2<f64>,
    loop_start: Option<Vector2<f64>>,
    anchor: Vector2<f64>,
    cfg: &DraftCfg,
) -> SnapResult {
    if let Some(start) = loop_start {
        if distance(cursor, start) < cfg.closure_threshold {
            tracing::trace!(x = start.x, y = start.y, "closure snap");
            return SnapResult {
                snapped_pos: start,
                snap_type: SnapType::Closure,
            };
        }
    }

    let to_mouse = cursor - anchor;
    let Some(dir) = safe_normalize(to_mouse, cfg.min_vector_length) else {
        return SnapResult::free(cursor);
    };
    let Some(prev) = prev_dir else {
        return SnapResult::free(cursor);
    };

    let theta = cfg.angle_threshold_rad();
    let dot = prev.dot(&dir).abs();
    if dot > theta.cos() {
        let along = prev * to_mouse.dot(&prev);
        tracing::trace!(dot, "parallel snap");
        return SnapResult {
            snapped_pos: anchor + along,
            snap_type: SnapType::Parallel,
        };
    }
    if dot < theta.sin() {
        let normal = perpendicular(prev);
        let along = normal * to_mouse.dot(&normal);
        tracing::trace!(dot, "perpendicular snap");
        return SnapResult {
            snapped_pos: anchor + along,
            snap_type: SnapType::Perpendicular,
        };
    }
    SnapResult::free(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn snap(
        prev: Option<Vector2<f64>>,
        cursor: Vector2<f64>,
        start: Option<Vector2<f64>>,
        anchor: Vector2<f64>,
    ) -> SnapResult {
        snap_to_constraint(prev, cursor, start, anchor, &DraftCfg::default())
    }

    #[test]
    fn parallel_projects_onto_previous_direction() {
        let r = snap(Some(vector![1.0, 0.0]), vector![10.0, 0.5], None, Vector2::zeros());
        assert_eq!(r.snap_type, SnapType::Parallel);
        assert!(r.snapped_pos.y.abs() < 1e-12);
        assert!((r.snapped_pos.x - 10.0).abs() < 1e-12);
    }

    #[test]
    fn antiparallel_also_counts_as_parallel() {
        let r = snap(Some(vector![1.0, 0.0]), vector![-8.0, 0.3], None, Vector2::zeros());
        assert_eq!(r.snap_type, SnapType::Parallel);
        assert!((r.snapped_pos - vector![-8.0, 0.0]).norm() < 1e-12);
    }

    #[test]
    fn perpendicular_projects_onto_normal() {
        let r = snap(Some(vector![1.0, 0.0]), vector![0.5, 10.0], None, Vector2::zeros());
        assert_eq!(r.snap_type, SnapType::Perpendicular);
        assert!(r.snapped_pos.x.abs() < 1e-12);
        assert!((r.snapped_pos.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn closure_beats_parallel() {
        // Cursor is both near the start and within the parallel band.
        let start = vector![0.0, 0.0];
        let anchor = vector![10.0, 0.0];
        let r = snap(Some(vector![1.0, 0.0]), vector![0.2, 0.1], Some(start), anchor);
        assert_eq!(r.snap_type, SnapType::Closure);
        assert_eq!(r.snapped_pos, start);
    }

    #[test]
    fn free_direction_and_degenerate_cursor() {
        let r = snap(Some(vector![1.0, 0.0]), vector![5.0, 5.0], None, Vector2::zeros());
        assert_eq!(r.snap_type, SnapType::None);
        assert_eq!(r.snapped_pos, vector![5.0, 5.0]);

        let tiny = vector![0.0001, 0.0];
        let r = snap(Some(vector![1.0, 0.0]), tiny, None, Vector2::zeros());
        assert_eq!(r.snap_type, SnapType::None);
        assert_eq!(r.snapped_pos, tiny);
    }

    #[test]
    fn first_segment_is_unconstrained() {
        let r = snap(None, vector![10.0, 0.2], None, Vector2::zeros());
        assert_eq!(r.snap_type, SnapType::None);
    }

    #[test]
    fn snap_type_serializes_lowercase() {
        let s = serde_json::to_string(&SnapType::Perpendicular).unwrap();
        assert_eq!(s, "\"perpendicular\"");
    }
}
