//! Criterion benchmarks for the validator and the room edits.
//! Focus sizes: n in {4, 16, 64, 256} walls.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use roomloop::room::{delete_vertex, insert_vertex_on_wall, move_wall, Room};
use roomloop::sample::{draw_room, ReplayToken, RoomSampleCfg, VertexCount};
use roomloop::validate::{area, is_convex, is_point_inside, is_self_intersecting};
use roomloop::Vec2;

fn random_room(n: usize, seed: u64) -> Room {
    let cfg = RoomSampleCfg {
        vertex_count: VertexCount::Fixed(n),
        base_radius: 50.0,
        ..RoomSampleCfg::default()
    };
    draw_room(cfg, ReplayToken { seed, index: 0 })
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for &n in &[4usize, 16, 64, 256] {
        let room = random_room(n, 43);
        group.bench_with_input(BenchmarkId::new("is_self_intersecting", n), &room, |b, r| {
            b.iter(|| is_self_intersecting(r.walls()))
        });
        group.bench_with_input(BenchmarkId::new("convex_and_area", n), &room, |b, r| {
            b.iter(|| (is_convex(r.walls()), area(r.walls())))
        });
        group.bench_with_input(BenchmarkId::new("is_point_inside", n), &room, |b, r| {
            b.iter(|| is_point_inside(Vec2::new(0.5, -0.25), r.walls()))
        });
    }
    group.finish();
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("insert_then_delete", n), &n, |b, &n| {
            b.iter_batched(
                || random_room(n, 44),
                |room| {
                    let w = room.walls()[n / 2];
                    let mid = (w.start + w.end) * 0.5;
                    if let Ok((grown, idx)) = insert_vertex_on_wall(&room, w.id, mid) {
                        let _back = delete_vertex(&grown, idx);
                    }
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("move_wall", n), &n, |b, &n| {
            let d = Vec2::new(0.3, -0.2);
            b.iter_batched(
                || random_room(n, 45),
                |room| {
                    let w = room.walls()[0];
                    let _moved = move_wall(&room, w.id, w.start + d, w.end + d);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate, bench_edit);
criterion_main!(benches);
