//! Segment predicates: intersection, ray casting, projection.
//!
//! Parametrization: a segment `a→b` is `a + t·(b − a)`, `t ∈ [0, 1]`.
//! Pairs whose direction cross product is below `PARALLEL_EPS` are treated as
//! parallel and never intersect (collinear overlap included).

use nalgebra::Vector2;

use super::vector::cross;
use crate::cfg::PARALLEL_EPS;

/// Parameters `(t, u)` of the supporting-line intersection of `p1→p2` and `p3→p4`.
#[inline]
fn line_params(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> Option<(f64, f64)> {
    let r = p2 - p1;
    let s = p4 - p3;
    let denom = cross(r, s);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }
    let qp = p3 - p1;
    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;
    Some((t, u))
}

/// Intersection point of two closed segments, if any.
pub fn segment_intersection(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> Option<Vector2<f64>> {
    let (t, u) = line_params(p1, p2, p3, p4)?;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p1 + (p2 - p1) * t)
    } else {
        None
    }
}

/// Strict crossing test: both parameters in the open interval `(0, 1)`.
///
/// Shared endpoints never count, which is what keeps adjacent walls of a loop
/// from registering as crossings.
pub fn segments_cross_strict(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> bool {
    match line_params(p1, p2, p3, p4) {
        Some((t, u)) => t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0,
        None => false,
    }
}

/// Ray `origin + t·dir` (`t ≥ 0`) against the closed segment `a→b`.
///
/// Returns the ray parameter and the hit point. `dir` need not be unit length;
/// `t` is in units of `|dir|`.
pub fn ray_segment_intersection(
    origin: Vector2<f64>,
    dir: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
) -> Option<(f64, Vector2<f64>)> {
    let s = b - a;
    let denom = cross(dir, s);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }
    let qp = a - origin;
    let t = cross(qp, s) / denom;
    let u = cross(qp, dir) / denom;
    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some((t, origin + dir * t))
    } else {
        None
    }
}

/// Unclamped parameter of the orthogonal projection of `p` onto line `a→b`.
/// A degenerate segment yields `0`.
#[inline]
pub fn segment_param(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= 0.0 {
        return 0.0;
    }
    (p - a).dot(&ab) / len_sq
}

/// Closest point to `p` on the closed segment `a→b`.
pub fn project_onto_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    let t = segment_param(p, a, b).clamp(0.0, 1.0);
    a + (b - a) * t
}

/// Projection used to pick a split point on a wall.
///
/// The result stays at least `margin` away from both endpoints so both halves
/// of the split remain walls in their own right. `None` if the segment is too
/// short to fit two margins.
pub fn project_for_insertion(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    margin: f64,
) -> Option<Vector2<f64>> {
    let len = (b - a).norm();
    let margin = margin.max(0.0);
    if len <= 0.0 || len < 2.0 * margin {
        return None;
    }
    let lo = margin / len;
    let t = segment_param(p, a, b).clamp(lo, 1.0 - lo);
    Some(a + (b - a) * t)
}
