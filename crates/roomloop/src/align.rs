//! Alignment snapping for drag operations (grid and vertex alignment).
//!
//! This is the drag-time counterpart of `snap`: instead of angle constraints
//! against the previous wall, a dragged point (or a whole wall) aligns its x
//! and/or y coordinate with other vertices. Each snapped axis reports a guide
//! line the host can draw.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned guide line through `through`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "axis", rename_all = "lowercase")]
pub enum Guide {
    /// Vertical line `x = value`, spanning from the snapped point to `through`.
    Vertical { x: f64, through: Vector2<f64> },
    /// Horizontal line `y = value`.
    Horizontal { y: f64, through: Vector2<f64> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlignResult {
    pub snapped_pos: Vector2<f64>,
    pub guides: Vec<Guide>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WallAlignResult {
    pub snapped_start: Vector2<f64>,
    pub snapped_end: Vector2<f64>,
    pub guides: Vec<Guide>,
}

/// Nearest grid point. Non-positive or non-finite grid sizes disable snapping.
pub fn snap_to_grid(pos: Vector2<f64>, grid_size: f64) -> Vector2<f64> {
    if !grid_size.is_finite() || grid_size <= 0.0 {
        return pos;
    }
    pos.map(|c| (c / grid_size).round() * grid_size)
}

/// Best per-axis alignment candidate: `(offset, target vertex)`.
#[derive(Clone, Copy, Debug)]
struct AxisHit {
    offset: f64,
    target: Vector2<f64>,
}

fn closer(best: Option<AxisHit>, cand: AxisHit) -> Option<AxisHit> {
    match best {
        Some(b) if b.offset.abs() <= cand.offset.abs() => Some(b),
        _ => Some(cand),
    }
}

/// Closest x- and y-alignment of `p` to any vertex within `threshold`.
fn best_axis_hits<'a>(
    p: Vector2<f64>,
    candidates: impl Iterator<Item = &'a Vector2<f64>>,
    threshold: f64,
) -> (Option<AxisHit>, Option<AxisHit>) {
    let mut bx = None;
    let mut by = None;
    for v in candidates {
        let dx = v.x - p.x;
        if dx.abs() < threshold {
            bx = closer(bx, AxisHit { offset: dx, target: *v });
        }
        let dy = v.y - p.y;
        if dy.abs() < threshold {
            by = closer(by, AxisHit { offset: dy, target: *v });
        }
    }
    (bx, by)
}

fn pool<'a>(
    vertices: &'a [Vector2<f64>],
    exclude: &'a [usize],
) -> impl Iterator<Item = &'a Vector2<f64>> + 'a {
    vertices
        .iter()
        .enumerate()
        .filter(move |(i, _)| !exclude.contains(i))
        .map(|(_, v)| v)
}

/// Align `pos` with the x and/or y coordinate of nearby vertices.
///
/// `exclude_index` skips the vertex being dragged.
pub fn snap_to_vertices(
    pos: Vector2<f64>,
    vertices: &[Vector2<f64>],
    exclude_index: Option<usize>,
    threshold: f64,
) -> AlignResult {
    let candidates = vertices
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != exclude_index)
        .map(|(_, v)| v);
    let (bx, by) = best_axis_hits(pos, candidates, threshold);

    let mut snapped = pos;
    let mut guides = Vec::new();
    if let Some(h) = bx {
        snapped.x = h.target.x;
        guides.push(Guide::Vertical {
            x: h.target.x,
            through: h.target,
        });
    }
    if let Some(h) = by {
        snapped.y = h.target.y;
        guides.push(Guide::Horizontal {
            y: h.target.y,
            through: h.target,
        });
    }
    AlignResult {
        snapped_pos: snapped,
        guides,
    }
}

/// Translate a dragged wall so one of its endpoints aligns per axis.
///
/// For each axis the smallest offset over both endpoints wins and is applied
/// to both, so the wall keeps its direction and length.
pub fn snap_wall_to_vertices(
    start: Vector2<f64>,
    end: Vector2<f64>,
    vertices: &[Vector2<f64>],
    exclude_indices: &[usize],
    threshold: f64,
) -> WallAlignResult {
    let (sx, sy) = best_axis_hits(start, pool(vertices, exclude_indices), threshold);
    let (ex, ey) = best_axis_hits(end, pool(vertices, exclude_indices), threshold);
    let bx = [sx, ex].into_iter().flatten().fold(None, closer);
    let by = [sy, ey].into_iter().flatten().fold(None, closer);

    let mut delta = Vector2::zeros();
    let mut guides = Vec::new();
    if let Some(h) = bx {
        delta.x = h.offset;
        guides.push(Guide::Vertical {
            x: h.target.x,
            through: h.target,
        });
    }
    if let Some(h) = by {
        delta.y = h.offset;
        guides.push(Guide::Horizontal {
            y: h.target.y,
            through: h.target,
        });
    }
    WallAlignResult {
        snapped_start: start + delta,
        snapped_end: end + delta,
        guides,
    }
}
