//! Room polygon kernel: drawing, snapping, validation and topology-preserving edits.
//!
//! Layers, leaves first
//! - `geom2`: vector primitives and segment predicates over `Vec2`.
//! - `snap`: angle-constraint snapping (parallel, perpendicular, closure).
//! - `builder`: the drawing session that turns clicks into a wall loop.
//! - `validate`: self-intersection, convexity, area, point containment.
//! - `room`: persisted room state and the edits that keep it closed.
//! - `align`: grid/vertex alignment used while dragging.
//! - `sample`: seeded random rooms for tests and benches.
//!
//! Everything is synchronous and allocation-light; nothing here does I/O.
//! Rejected operations return typed errors and leave their input untouched.

pub mod align;
pub mod api;
pub mod builder;
pub mod cfg;
pub mod geom2;
pub mod room;
pub mod sample;
pub mod snap;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::DraftCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::builder::{BuildError, Session, WallBuilder};
    pub use crate::cfg::DraftCfg;
    pub use crate::room::{
        delete_vertex, insert_vertex_on_wall, move_wall, update_vertex_position, EditError, Room,
        WallId, WallSegment,
    };
    pub use crate::snap::{snap_to_constraint, SnapResult, SnapType};
    pub use crate::validate::{area, is_convex, is_point_inside, is_self_intersecting, is_valid};
    pub use nalgebra::Vector2 as Vec2;
}
