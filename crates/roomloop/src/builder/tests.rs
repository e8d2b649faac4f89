use super::*;
use crate::room::Room;
use crate::sample::{draw_vertices, ReplayToken, RoomSampleCfg};
use crate::validate::{area, is_valid};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

const MIN_WALL: f64 = crate::cfg::MIN_WALL_LENGTH;

fn builder() -> WallBuilder {
    WallBuilder::new(DraftCfg::default())
}

fn assert_loop_chained(walls: &[WallSegment]) {
    let n = walls.len();
    for i in 0..n {
        assert_eq!(walls[i].end, walls[(i + 1) % n].start, "break at wall {i}");
    }
}

#[test]
fn starts_idle() {
    let b = builder();
    assert!(!b.is_drawing());
    assert_eq!(b.session(), &Session::Idle);
    assert_eq!(b.vertex_count(), 0);
    assert_eq!(b.manual_length(), None);
}

#[test]
fn idle_builder_passes_cursor_through() {
    let mut b = builder();
    let c = vector![3.0, 4.0];
    assert_eq!(b.continue_drawing(c), c);
    assert_eq!(b.place_vertex(c), Err(BuildError::NotDrawing));
    assert_eq!(b.close_loop(), Err(BuildError::NotDrawing));
}

#[test]
fn rectangle_round_trip() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    let w0 = b.place_vertex(vector![10.0, 0.0]).unwrap();
    assert_eq!(w0.length, 10.0);
    assert_eq!(w0.start, vector![0.0, 0.0]);
    b.place_vertex(vector![10.0, 12.0]).unwrap();
    b.place_vertex(vector![0.0, 12.0]).unwrap();
    assert_eq!(b.vertex_count(), 4);

    let walls = b.close_loop().unwrap();
    assert!(!b.is_drawing());
    assert_eq!(walls.len(), 4);
    assert_loop_chained(&walls);
    assert_eq!(walls[3].end, vector![0.0, 0.0]);
    assert_eq!(area(&walls), 120.0);

    let room = Room::from_walls(walls).unwrap();
    assert!(is_valid(room.walls()));
}

#[test]
fn short_wall_is_rejected_without_mutation() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    let err = b.place_vertex(vector![0.05, 0.0]).unwrap_err();
    assert!(matches!(err, BuildError::TooShort { min, .. } if min == MIN_WALL));
    assert_eq!(b.vertex_count(), 1);
}

#[test]
fn non_finite_point_is_rejected() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    assert_eq!(
        b.place_vertex(vector![f64::NAN, 1.0]),
        Err(BuildError::NonFinite)
    );
    assert_eq!(
        b.place_vertex(vector![f64::INFINITY, 1.0]),
        Err(BuildError::NonFinite)
    );
    assert_eq!(b.vertex_count(), 1);
    b.place_vertex(vector![4.0, 0.0]).unwrap();
    b.place_vertex(vector![4.0, 4.0]).unwrap();
    assert_eq!(b.close_loop().map(|w| w.len()), Ok(3));
}

#[test]
fn close_with_too_few_vertices_resets() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.place_vertex(vector![5.0, 0.0]).unwrap();
    assert_eq!(b.close_loop(), Err(BuildError::TooFewVertices { count: 2 }));
    assert!(!b.is_drawing());
}

#[test]
fn placing_on_loop_start_drops_zero_closing_edge() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.place_vertex(vector![10.0, 0.0]).unwrap();
    b.place_vertex(vector![10.0, 10.0]).unwrap();
    b.place_vertex(vector![0.0, 10.0]).unwrap();
    let snapped = b.continue_drawing(vector![0.1, 0.2]);
    assert_eq!(snapped, vector![0.0, 0.0]);
    assert_eq!(b.last_snap().map(|s| s.snap_type), Some(SnapType::Closure));
    b.place_vertex(snapped).unwrap();

    let walls = b.close_loop().unwrap();
    assert_eq!(walls.len(), 4);
    assert_loop_chained(&walls);
    assert!(walls.iter().all(|w| w.length >= MIN_WALL));
}

#[test]
fn near_zero_closing_edge_is_merged() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.place_vertex(vector![10.0, 0.0]).unwrap();
    b.place_vertex(vector![10.0, 10.0]).unwrap();
    b.place_vertex(vector![0.005, 0.0]).unwrap();
    let walls = b.close_loop().unwrap();
    assert_eq!(walls.len(), 3);
    assert_loop_chained(&walls);
}

#[test]
fn closure_only_offered_from_third_vertex() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.place_vertex(vector![10.0, 0.0]).unwrap();
    // two vertices: the start is not a snap target yet
    let p = b.continue_drawing(vector![0.2, 0.3]);
    assert_ne!(b.last_snap().map(|s| s.snap_type), Some(SnapType::Closure));
    assert_ne!(p, vector![0.0, 0.0]);
}

#[test]
fn continue_drawing_snaps_against_previous_wall() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.place_vertex(vector![10.0, 0.0]).unwrap();
    let p = b.continue_drawing(vector![10.5, 8.0]);
    assert_eq!(b.last_snap().map(|s| s.snap_type), Some(SnapType::Perpendicular));
    assert!((p - vector![10.0, 8.0]).norm() < 1e-12);
    // preview never commits
    assert_eq!(b.vertex_count(), 2);
}

#[test]
fn manual_length_overrides_distance_but_not_closure() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.set_manual_length(4.0);
    assert_eq!(b.manual_length(), Some(4.0));
    let p = b.continue_drawing(vector![10.0, 0.0]);
    assert!((p - vector![4.0, 0.0]).norm() < 1e-12);

    // placing clears it
    b.place_vertex(p).unwrap();
    assert_eq!(b.manual_length(), None);

    b.place_vertex(vector![4.0, 4.0]).unwrap();
    b.set_manual_length(100.0);
    let q = b.continue_drawing(vector![0.1, 0.1]);
    assert_eq!(q, vector![0.0, 0.0]);
}

#[test]
fn non_positive_manual_length_clears() {
    let mut b = builder();
    b.start_drawing(Vector2::zeros());
    b.set_manual_length(3.0);
    b.set_manual_length(-1.0);
    assert_eq!(b.manual_length(), None);
    b.set_manual_length(3.0);
    b.clear_manual_length();
    assert_eq!(b.manual_length(), None);
    b.set_manual_length(f64::NAN);
    assert_eq!(b.manual_length(), None);
}

#[test]
fn restart_discards_in_progress_vertices() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.place_vertex(vector![5.0, 0.0]).unwrap();
    b.start_drawing(vector![1.0, 1.0]);
    assert_eq!(b.vertices(), &[vector![1.0, 1.0]]);
}

#[test]
fn cancel_is_idempotent() {
    let mut b = builder();
    b.start_drawing(vector![0.0, 0.0]);
    b.place_vertex(vector![5.0, 0.0]).unwrap();
    b.cancel();
    assert!(!b.is_drawing());
    b.cancel();
    assert_eq!(b.session(), &Session::Idle);
}

#[test]
fn wall_ids_are_unique_across_sessions() {
    let mut b = builder();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2 {
        b.start_drawing(vector![0.0, 0.0]);
        for p in [vector![3.0, 0.0], vector![3.0, 3.0]] {
            assert!(seen.insert(b.place_vertex(p).unwrap().id));
        }
        for w in b.close_loop().unwrap() {
            assert!(seen.insert(w.id));
        }
    }
}

proptest! {
    #[test]
    fn closed_loops_always_chain(seed in 0u64..1000) {
        let pts = draw_vertices(RoomSampleCfg::default(), ReplayToken { seed, index: 2 });
        let mut b = builder();
        b.start_drawing(pts[0]);
        for &p in &pts[1..] {
            b.place_vertex(p).unwrap();
        }
        let walls = b.close_loop().unwrap();
        prop_assert!(walls.len() <= pts.len());
        prop_assert!(walls.len() >= 3);
        let n = walls.len();
        for i in 0..n {
            prop_assert_eq!(walls[i].end, walls[(i + 1) % n].start);
        }
        prop_assert!(!b.is_drawing());
    }

    #[test]
    fn too_close_placement_never_adds_a_vertex(dx in -0.07f64..0.07, dy in -0.07f64..0.07) {
        let mut b = builder();
        b.start_drawing(vector![1.0, 1.0]);
        b.place_vertex(vector![5.0, 1.0]).unwrap();
        prop_assert!(b.place_vertex(vector![5.0 + dx, 1.0 + dy]).is_err());
        prop_assert_eq!(b.vertex_count(), 2);
    }
}
