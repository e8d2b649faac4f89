//! Stateless predicates over a finished wall loop.
//!
//! Vertices are read as `walls[i].start`; the loop is assumed closed.
//!
//! Boundary rule for `is_point_inside`
//! - Half-open crossing test: an edge counts when exactly one endpoint lies
//!   strictly above the point, and the crossing lies strictly to the right.
//!   For an axis-aligned rectangle this makes left and bottom edges inside,
//!   right and top edges outside. Deterministic, not floating-point chance.

use nalgebra::Vector2;

use crate::cfg::CROSS_EPS;
use crate::geom2::{cross, segments_cross_strict};
use crate::room::{ring, WallSegment};

/// Two walls are adjacent when they share a ring neighbor slot.
#[inline]
fn adjacent(n: usize, i: usize, j: usize) -> bool {
    match ring(n, i) {
        Some(r) => r.prev == j || r.next == j || i == j,
        None => false,
    }
}

/// Any two non-adjacent walls crossing in their interiors.
pub fn is_self_intersecting(walls: &[WallSegment]) -> bool {
    let n = walls.len();
    if n < 4 {
        return false;
    }
    for i in 0..n {
        for j in (i + 2)..n {
            // (0, n-1) share the closing vertex.
            if adjacent(n, i, j) {
                continue;
            }
            let (a, b) = (walls[i], walls[j]);
            if segments_cross_strict(a.start, a.end, b.start, b.end) {
                tracing::trace!(i, j, "walls cross");
                return true;
            }
        }
    }
    false
}

pub fn is_valid(walls: &[WallSegment]) -> bool {
    walls.len() >= 3 && !is_self_intersecting(walls)
}

/// All non-negligible turns have the same sign. Collinear runs are allowed.
pub fn is_convex(walls: &[WallSegment]) -> bool {
    let n = walls.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f64;
    for i in 0..n {
        let p0 = walls[i].start;
        let p1 = walls[(i + 1) % n].start;
        let p2 = walls[(i + 2) % n].start;
        let c = cross(p1 - p0, p2 - p1);
        if c.abs() <= CROSS_EPS {
            continue;
        }
        if sign == 0.0 {
            sign = c.signum();
        } else if c.signum() != sign {
            return false;
        }
    }
    true
}

/// Signed shoelace area, positive for counterclockwise loops.
pub fn signed_area(walls: &[WallSegment]) -> f64 {
    let n = walls.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = walls[i].start;
        let q = walls[(i + 1) % n].start;
        sum += p.x * q.y - q.x * p.y;
    }
    sum / 2.0
}

/// Enclosed area, orientation-independent.
pub fn area(walls: &[WallSegment]) -> f64 {
    signed_area(walls).abs()
}

/// Even-odd ray casting along +x. See the module docs for boundary points.
pub fn is_point_inside(point: Vector2<f64>, walls: &[WallSegment]) -> bool {
    let n = walls.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = walls[i].start;
        let vj = walls[j].start;
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
