//! Wall Builder: the drawing session that turns clicks into a closed wall loop.
//!
//! States
//! - `Idle` → `start_drawing` → `Drawing` → (`close_loop` | `cancel`) → `Idle`.
//! - `start_drawing` while already drawing restarts the session and drops the
//!   in-progress vertices.
//!
//! Rules
//! - Live cursor guidance goes through `snap::snap_to_constraint`; the loop
//!   start is only offered once three vertices exist.
//! - `place_vertex` rejects non-finite points and walls shorter than
//!   `min_wall_length`, so near-zero walls never enter the model.
//! - `close_loop` drops auto-generated edges shorter than `min_segment_length`
//!   by merging their endpoints, which keeps the result chained.
//!
//! Code cross-refs: `snap`, `room::Room::from_walls`.

use nalgebra::Vector2;
use thiserror::Error;

use crate::cfg::DraftCfg;
use crate::geom2::{distance, safe_normalize};
use crate::room::{WallId, WallSegment};
use crate::snap::{snap_to_constraint, SnapResult, SnapType};

/// Why a builder call was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("no drawing session is active")]
    NotDrawing,
    #[error("wall of length {length} is shorter than the minimum {min}")]
    TooShort { length: f64, min: f64 },
    #[error("vertex coordinates must be finite")]
    NonFinite,
    #[error("a loop needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
}

/// In-progress drawing data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Drawing {
    pub vertices: Vec<Vector2<f64>>,
    pub manual_length: Option<f64>,
    pub last_snap: Option<SnapResult>,
}

impl Drawing {
    fn seeded(point: Vector2<f64>) -> Self {
        Self {
            vertices: vec![point],
            ..Self::default()
        }
    }

    /// Unit direction of the last placed wall.
    fn prev_dir(&self, min_len: f64) -> Option<Vector2<f64>> {
        match self.vertices.as_slice() {
            [.., a, b] => safe_normalize(b - a, min_len),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    Idle,
    Drawing(Drawing),
}

/// Single drawing session plus the id counter for the walls it emits.
#[derive(Clone, Debug, Default)]
pub struct WallBuilder {
    session: Session,
    cfg: DraftCfg,
    next_id: u64,
}

impl WallBuilder {
    pub fn new(cfg: DraftCfg) -> Self {
        Self {
            session: Session::Idle,
            cfg,
            next_id: 0,
        }
    }

    #[inline]
    pub fn cfg(&self) -> &DraftCfg {
        &self.cfg
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        matches!(self.session, Session::Drawing(_))
    }

    pub fn vertices(&self) -> &[Vector2<f64>] {
        match &self.session {
            Session::Drawing(d) => &d.vertices,
            Session::Idle => &[],
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    pub fn manual_length(&self) -> Option<f64> {
        match &self.session {
            Session::Drawing(d) => d.manual_length,
            Session::Idle => None,
        }
    }

    pub fn last_snap(&self) -> Option<SnapResult> {
        match &self.session {
            Session::Drawing(d) => d.last_snap,
            Session::Idle => None,
        }
    }

    /// Begin a new loop at `point`, discarding any session in progress.
    pub fn start_drawing(&mut self, point: Vector2<f64>) {
        if let Session::Drawing(d) = &self.session {
            tracing::debug!(discarded = d.vertices.len(), "restarting drawing session");
        }
        self.session = Session::Drawing(Drawing::seeded(point));
    }

    /// Snapped preview position for `cursor`; `cursor` unchanged when idle.
    pub fn continue_drawing(&mut self, cursor: Vector2<f64>) -> Vector2<f64> {
        let cfg = self.cfg;
        let Session::Drawing(d) = &mut self.session else {
            return cursor;
        };
        let Some(&anchor) = d.vertices.last() else {
            return cursor;
        };
        let prev_dir = d.prev_dir(cfg.min_vector_length);
        let loop_start = if d.vertices.len() >= 3 {
            d.vertices.first().copied()
        } else {
            None
        };
        let snap = snap_to_constraint(prev_dir, cursor, loop_start, anchor, &cfg);
        d.last_snap = Some(snap);

        match d.manual_length {
            Some(len) if snap.snap_type != SnapType::Closure => {
                match safe_normalize(snap.snapped_pos - anchor, cfg.min_vector_length) {
                    Some(dir) => anchor + dir * len,
                    None => snap.snapped_pos,
                }
            }
            _ => snap.snapped_pos,
        }
    }

    /// Commit `point` as the next vertex and return the wall it completes.
    pub fn place_vertex(&mut self, point: Vector2<f64>) -> Result<WallSegment, BuildError> {
        let min = self.cfg.min_wall_length;
        let Session::Drawing(d) = &mut self.session else {
            tracing::debug!("place_vertex while idle");
            return Err(BuildError::NotDrawing);
        };
        let Some(&last) = d.vertices.last() else {
            return Err(BuildError::NotDrawing);
        };
        if !point.iter().all(|c| c.is_finite()) {
            tracing::debug!(x = point.x, y = point.y, "non-finite vertex");
            return Err(BuildError::NonFinite);
        }
        let length = distance(last, point);
        if length < min {
            tracing::debug!(length, min, "wall too short");
            return Err(BuildError::TooShort { length, min });
        }
        d.vertices.push(point);
        d.manual_length = None;
        let id = self.fresh_id();
        Ok(WallSegment::new(id, last, point))
    }

    /// Finish the loop. The session returns to `Idle` whatever the outcome.
    pub fn close_loop(&mut self) -> Result<Vec<WallSegment>, BuildError> {
        let session = std::mem::take(&mut self.session);
        let Session::Drawing(d) = session else {
            return Err(BuildError::NotDrawing);
        };
        if d.vertices.len() < 3 {
            tracing::debug!(count = d.vertices.len(), "close_loop with too few vertices");
            return Err(BuildError::TooFewVertices {
                count: d.vertices.len(),
            });
        }

        let kept = merge_short_edges(&d.vertices, self.cfg.min_segment_length);
        if kept.len() < 3 {
            tracing::debug!(count = kept.len(), "loop degenerate after dropping short edges");
            return Err(BuildError::TooFewVertices { count: kept.len() });
        }
        let dropped = d.vertices.len() - kept.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped short closing segments");
        }

        let n = kept.len();
        let walls = (0..n)
            .map(|i| {
                let id = self.fresh_id();
                WallSegment::new(id, kept[i], kept[(i + 1) % n])
            })
            .collect();
        Ok(walls)
    }

    /// Abandon the session. Idempotent.
    pub fn cancel(&mut self) {
        self.session = Session::Idle;
    }

    /// Fix the length of the next wall. Non-positive or non-finite values clear it.
    pub fn set_manual_length(&mut self, length: f64) {
        if let Session::Drawing(d) = &mut self.session {
            d.manual_length = (length.is_finite() && length > 0.0).then_some(length);
        }
    }

    pub fn clear_manual_length(&mut self) {
        if let Session::Drawing(d) = &mut self.session {
            d.manual_length = None;
        }
    }

    #[inline]
    fn fresh_id(&mut self) -> WallId {
        let id = WallId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Cyclic vertex list with every edge shorter than `min_len` collapsed.
///
/// A vertex closer than `min_len` to the last kept one is dropped; the closing
/// edge is checked last, dropping the final vertex rather than the loop start.
fn merge_short_edges(vertices: &[Vector2<f64>], min_len: f64) -> Vec<Vector2<f64>> {
    let mut kept: Vec<Vector2<f64>> = Vec::with_capacity(vertices.len());
    for &v in vertices {
        match kept.last() {
            Some(&last) if distance(last, v) < min_len => {}
            _ => kept.push(v),
        }
    }
    while kept.len() > 1 {
        let (first, last) = (kept[0], kept[kept.len() - 1]);
        if distance(last, first) < min_len {
            kept.pop();
        } else {
            break;
        }
    }
    kept
}

#[cfg(test)]
mod tests;
