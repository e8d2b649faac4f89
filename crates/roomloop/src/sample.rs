//! Random star-shaped rooms (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic source of simple room loops for property tests and benches.
//!
//! Model
//! - `n` equally spaced angles with bounded angular jitter, each at a jittered
//!   radius. Each angle moves by less than half the spacing, so the angles stay
//!   strictly increasing and the polygon is star-shaped around the center,
//!   hence simple and counterclockwise.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::room::{Room, WallId, WallSegment};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RoomSampleCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.45],
    /// tighter for triangles so no gap reaches π.
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.9].
    pub radial_jitter: f64,
    /// Base radius in room units (feet by convention).
    pub base_radius: f64,
    pub center: Vector2<f64>,
}

impl Default for RoomSampleCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.3,
            base_radius: 10.0,
            center: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Vertices of a random star-shaped loop, counterclockwise.
pub fn draw_vertices(cfg: RoomSampleCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let delta = std::f64::consts::TAU / (n as f64);
    // Gaps stay in (0, π): angles strictly increase and the loop is star-shaped
    // around `center`, hence simple and counterclockwise.
    let max_jitter = ((std::f64::consts::PI / delta - 1.0) / 2.0 - 1e-3).min(0.45);
    let aj = cfg.angle_jitter_frac.clamp(0.0, max_jitter);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1.0);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Closed room over `draw_vertices`, wall ids `0..n`.
pub fn draw_room(cfg: RoomSampleCfg, tok: ReplayToken) -> Room {
    let verts = draw_vertices(cfg, tok);
    let n = verts.len();
    let walls = (0..n)
        .map(|i| WallSegment::new(WallId(i as u64), verts[i], verts[(i + 1) % n]))
        .collect();
    match Room::from_walls(walls) {
        Ok(room) => room,
        // n >= 3 and the walls are chained by construction.
        Err(e) => unreachable!("sampled loop rejected: {e}"),
    }
}
