//! Topology-preserving edits on a closed room.
//!
//! Every edit validates first and only then builds the new wall vector, so a
//! rejection leaves nothing half-done. The result is re-checked with
//! `Room::assert_chained` before it is returned.

use nalgebra::Vector2;

use super::{EditError, Room, WallId, WallSegment};

fn reject(op: &'static str, err: EditError) -> EditError {
    tracing::debug!(op, reason = %err, "edit rejected");
    err
}

fn ensure_finite(op: &'static str, points: &[Vector2<f64>]) -> Result<(), EditError> {
    if points.iter().all(|p| p.iter().all(|c| c.is_finite())) {
        Ok(())
    } else {
        Err(reject(op, EditError::NonFinite))
    }
}

/// Move vertex `i`; touches exactly the two walls that share it.
pub fn update_vertex_position(
    room: &Room,
    i: usize,
    new_pos: Vector2<f64>,
) -> Result<Room, EditError> {
    room.ensure_editable()
        .map_err(|e| reject("update_vertex_position", e))?;
    ensure_finite("update_vertex_position", &[new_pos])?;
    let ring = room.neighbors(i).ok_or_else(|| {
        reject(
            "update_vertex_position",
            EditError::IndexOutOfRange {
                index: i,
                len: room.len(),
            },
        )
    })?;

    let mut out = room.clone();
    out.walls[ring.cur].set_start(new_pos);
    out.walls[ring.prev].set_end(new_pos);
    out.assert_chained();
    Ok(out)
}

/// Split wall `wall_id` at `position`; returns the new room and the new vertex index.
///
/// `position` is taken as given. Use `geom2::project_for_insertion` to keep it
/// on the wall and away from its endpoints.
pub fn insert_vertex_on_wall(
    room: &Room,
    wall_id: WallId,
    position: Vector2<f64>,
) -> Result<(Room, usize), EditError> {
    room.ensure_editable()
        .map_err(|e| reject("insert_vertex_on_wall", e))?;
    ensure_finite("insert_vertex_on_wall", &[position])?;
    let k = room
        .wall_index(wall_id)
        .ok_or_else(|| reject("insert_vertex_on_wall", EditError::WallNotFound(wall_id)))?;

    let mut out = room.clone();
    let old = out.walls[k];
    let first = WallSegment::new(out.fresh_id(), old.start, position);
    let second = WallSegment::new(out.fresh_id(), position, old.end);
    out.walls[k] = first;
    out.walls.insert(k + 1, second);
    out.assert_chained();
    Ok((out, k + 1))
}

/// Remove vertex `i` by merging the wall before it with the wall after it.
///
/// The merged wall keeps the id of the previous wall. Rooms never drop below
/// three walls.
pub fn delete_vertex(room: &Room, i: usize) -> Result<Room, EditError> {
    room.ensure_editable()
        .map_err(|e| reject("delete_vertex", e))?;
    if room.len() <= 3 {
        return Err(reject(
            "delete_vertex",
            EditError::MinimumPolygon { len: room.len() },
        ));
    }
    let ring = room.neighbors(i).ok_or_else(|| {
        reject(
            "delete_vertex",
            EditError::IndexOutOfRange {
                index: i,
                len: room.len(),
            },
        )
    })?;

    let mut out = room.clone();
    let prev = out.walls[ring.prev];
    let cur = out.walls[ring.cur];
    let merged = WallSegment::new(prev.id, prev.start, cur.end);
    // The merged wall takes the previous wall's slot; for i == 0 that slot is
    // the last one, so removing `cur` first keeps `ring.prev - 1` valid.
    out.walls.remove(ring.cur);
    let slot = if ring.prev > ring.cur {
        ring.prev - 1
    } else {
        ring.prev
    };
    out.walls[slot] = merged;
    out.assert_chained();
    Ok(out)
}

/// Set a wall's endpoints and drag the two neighboring walls along.
///
/// The moved wall's length follows its new endpoints, so it is unchanged for
/// a pure translation.
pub fn move_wall(
    room: &Room,
    wall_id: WallId,
    new_start: Vector2<f64>,
    new_end: Vector2<f64>,
) -> Result<Room, EditError> {
    room.ensure_editable()
        .map_err(|e| reject("move_wall", e))?;
    ensure_finite("move_wall", &[new_start, new_end])?;
    let ring = room
        .wall_index(wall_id)
        .and_then(|k| room.neighbors(k))
        .ok_or_else(|| reject("move_wall", EditError::WallNotFound(wall_id)))?;

    let mut out = room.clone();
    out.walls[ring.cur] = WallSegment::new(wall_id, new_start, new_end);
    out.walls[ring.prev].set_end(new_start);
    out.walls[ring.next].set_start(new_end);
    out.assert_chained();
    Ok(out)
}
