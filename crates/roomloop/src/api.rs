//! Accessors the interaction layer reads persisted room state through.
//!
//! Thin wrappers so callers that only hold a `Room` do not need to know that
//! vertices are derived from wall starts.

use nalgebra::Vector2;
use serde::Serialize;

use crate::room::{Room, WallId, WallSegment};
use crate::validate;

/// All vertices in loop order (`walls[i].start`).
pub fn get_vertices(room: &Room) -> Vec<Vector2<f64>> {
    room.vertices()
}

pub fn get_wall_by_id(room: &Room, id: WallId) -> Option<&WallSegment> {
    room.wall_by_id(id)
}

/// Validator outputs for one room, in one pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoomReport {
    pub walls: usize,
    pub closed: bool,
    pub valid: bool,
    pub self_intersecting: bool,
    pub convex: bool,
    pub area: f64,
    pub perimeter: f64,
}

pub fn report(room: &Room) -> RoomReport {
    let walls = room.walls();
    RoomReport {
        walls: walls.len(),
        closed: room.is_closed(),
        valid: validate::is_valid(walls),
        self_intersecting: validate::is_self_intersecting(walls),
        convex: validate::is_convex(walls),
        area: validate::area(walls),
        perimeter: room.perimeter(),
    }
}
