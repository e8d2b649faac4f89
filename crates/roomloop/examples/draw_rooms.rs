//! Draw a few rooms through the wall builder and print their validator report.
//!
//! Usage:
//!   cargo run -p roomloop --example draw_rooms -- [count]
//!
//! Each room is sampled, then replayed click by click through `WallBuilder`
//! so the snapping path is exercised the same way an editor would drive it.

use roomloop::api::report;
use roomloop::builder::WallBuilder;
use roomloop::room::Room;
use roomloop::sample::{draw_vertices, ReplayToken, RoomSampleCfg};
use roomloop::DraftCfg;

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let mut builder = WallBuilder::new(DraftCfg::default());
    for index in 0..count {
        let pts = draw_vertices(RoomSampleCfg::default(), ReplayToken { seed: 2025, index });
        builder.start_drawing(pts[0]);
        for &p in &pts[1..] {
            let snapped = builder.continue_drawing(p);
            if let Err(e) = builder.place_vertex(snapped) {
                eprintln!("room {index}: skipped click: {e}");
            }
        }
        match builder.close_loop().map_err(|e| e.to_string()).and_then(|walls| {
            Room::from_walls(walls).map_err(|e| e.to_string())
        }) {
            Ok(room) => {
                let r = report(&room);
                println!(
                    "room {index}: walls={} valid={} convex={} area={:.2} perimeter={:.2}",
                    r.walls, r.valid, r.convex, r.area, r.perimeter
                );
            }
            Err(e) => eprintln!("room {index}: {e}"),
        }
    }
}
