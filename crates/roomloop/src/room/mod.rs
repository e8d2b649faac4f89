//! Room state: a cyclic loop of wall segments, and the edits that keep it closed.
//!
//! Purpose
//! - `Room` is the persisted representation. Vertices are not stored; vertex
//!   `i` is `walls[i].start`, which must equal `walls[i-1 mod n].end`.
//! - `edit` holds the topology-preserving operations (insert, delete, move
//!   vertex, move wall). Each takes `&Room` and returns a fresh `Room`, O(n)
//!   per edit since the wall vector is rebuilt.
//!
//! Invariants
//! - Closed rooms have `n >= 3` walls and chain exactly:
//!   `walls[i].end == walls[(i+1) % n].start`.
//! - `WallSegment::length` is the cached distance `|end - start|`, refreshed
//!   on every endpoint update.
//! - Edits find neighboring walls only through `Room::neighbors` (`Ring`).
//!
//! Code cross-refs: `builder::WallBuilder::close_loop`, `validate`.

mod edit;
mod error;

pub use edit::{delete_vertex, insert_vertex_on_wall, move_wall, update_vertex_position};
pub use error::EditError;

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Opaque wall identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallId(pub u64);

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Directed wall `start → end` with cached length.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub id: WallId,
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    pub length: f64,
}

impl WallSegment {
    #[inline]
    pub fn new(id: WallId, start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self {
            id,
            start,
            end,
            length: (end - start).norm(),
        }
    }

    #[inline]
    pub fn set_start(&mut self, p: Vector2<f64>) {
        self.start = p;
        self.length = (self.end - p).norm();
    }

    #[inline]
    pub fn set_end(&mut self, p: Vector2<f64>) {
        self.end = p;
        self.length = (p - self.start).norm();
    }
}

/// Previous/current/next wall indices around one position in the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    pub prev: usize,
    pub cur: usize,
    pub next: usize,
}

/// Persisted room: walls in loop order plus the fresh-id counter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomRepr", into = "RoomRepr")]
pub struct Room {
    walls: Vec<WallSegment>,
    closed: bool,
    next_id: u64,
}

/// On-disk shape; the id counter is derived on load.
#[derive(Serialize, Deserialize)]
struct RoomRepr {
    walls: Vec<WallSegment>,
    closed: bool,
}

impl TryFrom<RoomRepr> for Room {
    type Error = EditError;

    fn try_from(repr: RoomRepr) -> Result<Self, Self::Error> {
        // Cached lengths are never trusted from disk.
        let walls: Vec<WallSegment> = repr
            .walls
            .into_iter()
            .map(|w| WallSegment::new(w.id, w.start, w.end))
            .collect();
        if repr.closed {
            Room::from_walls(walls)
        } else {
            let next_id = next_free_id(&walls);
            Ok(Room {
                walls,
                closed: false,
                next_id,
            })
        }
    }
}

impl From<Room> for RoomRepr {
    fn from(room: Room) -> Self {
        RoomRepr {
            walls: room.walls,
            closed: room.closed,
        }
    }
}

fn next_free_id(walls: &[WallSegment]) -> u64 {
    walls.iter().map(|w| w.id.0 + 1).max().unwrap_or(0)
}

impl Default for Room {
    fn default() -> Self {
        Self::open()
    }
}

impl Room {
    /// Empty room that has not been drawn yet.
    pub fn open() -> Self {
        Self {
            walls: Vec::new(),
            closed: false,
            next_id: 0,
        }
    }

    /// Closed room from a finished wall loop (e.g. `WallBuilder::close_loop`).
    pub fn from_walls(walls: Vec<WallSegment>) -> Result<Self, EditError> {
        if walls.len() < 3 {
            return Err(EditError::MinimumPolygon { len: walls.len() });
        }
        if let Some(at) = first_unchained(&walls) {
            return Err(EditError::NotChained {
                at,
                next: (at + 1) % walls.len(),
            });
        }
        let next_id = next_free_id(&walls);
        Ok(Self {
            walls,
            closed: true,
            next_id,
        })
    }

    #[inline]
    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Vertex `i` is the start of wall `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Option<Vector2<f64>> {
        self.walls.get(i).map(|w| w.start)
    }

    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        self.walls.iter().map(|w| w.start).collect()
    }

    pub fn wall_by_id(&self, id: WallId) -> Option<&WallSegment> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn wall_index(&self, id: WallId) -> Option<usize> {
        self.walls.iter().position(|w| w.id == id)
    }

    pub fn perimeter(&self) -> f64 {
        self.walls.iter().map(|w| w.length).sum()
    }

    /// Neighbors of wall/vertex `i` in the loop.
    pub fn neighbors(&self, i: usize) -> Option<Ring> {
        ring(self.walls.len(), i)
    }

    /// Panics if a closed room's walls do not chain.
    ///
    /// A failure here is a bug in an edit, never a user-input error.
    #[track_caller]
    pub fn assert_chained(&self) {
        if !self.closed {
            return;
        }
        if let Some(at) = first_unchained(&self.walls) {
            panic!(
                "room loop broken: wall {} ends at {:?}, wall {} starts at {:?}",
                at,
                self.walls[at].end,
                (at + 1) % self.walls.len(),
                self.walls[(at + 1) % self.walls.len()].start
            );
        }
    }

    #[inline]
    fn fresh_id(&mut self) -> WallId {
        let id = WallId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Guard shared by edits: closed and non-empty.
    fn ensure_editable(&self) -> Result<(), EditError> {
        if !self.closed {
            return Err(EditError::NotClosed);
        }
        if self.walls.is_empty() {
            return Err(EditError::Empty);
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn ring(n: usize, i: usize) -> Option<Ring> {
    if i >= n {
        return None;
    }
    Some(Ring {
        prev: (i + n - 1) % n,
        cur: i,
        next: (i + 1) % n,
    })
}

fn first_unchained(walls: &[WallSegment]) -> Option<usize> {
    let n = walls.len();
    (0..n).find(|&i| walls[i].end != walls[(i + 1) % n].start)
}
