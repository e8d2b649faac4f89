//! 2D vector primitives over `nalgebra::Vector2<f64>`.
//!
//! Purpose
//! - Everything the kernel needs beyond nalgebra's built-in algebra: cross
//!   product, perpendicular, guarded normalize, angle and scalar helpers, and
//!   the segment predicates (intersection, ray casting, projection).
//! - Pure functions only; no allocation.
//!
//! Code cross-refs: `snap::snap_to_constraint`, `validate`, `room::edit`.

mod segment;
mod vector;

pub use segment::{
    project_for_insertion, project_onto_segment, ray_segment_intersection, segment_intersection,
    segment_param, segments_cross_strict,
};
pub use vector::{
    angle_between, clamp, cross, deg_to_rad, distance, perpendicular, rad_to_deg, safe_normalize,
    smoothstep,
};
