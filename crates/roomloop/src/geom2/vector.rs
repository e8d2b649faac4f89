//! Scalar helpers on `Vec2` that nalgebra does not provide directly.
//!
//! Add, subtract, scale, length, dot and normalize are the nalgebra
//! operators/methods; everything here returns fresh values.

use nalgebra::Vector2;

/// 2D cross product (z-component of the 3D cross product).
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Counterclockwise 90° rotation: `(x, y) ↦ (-y, x)`.
#[inline]
pub fn perpendicular(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Unit vector in the direction of `v`, or `None` when `|v| < min_len`.
#[inline]
pub fn safe_normalize(v: Vector2<f64>, min_len: f64) -> Option<Vector2<f64>> {
    let len = v.norm();
    if !len.is_finite() || len < min_len {
        return None;
    }
    Some(v / len)
}

/// Unsigned angle in radians between `a` and `b`, in `[0, π]`.
/// Zero-length inputs give `0`.
pub fn angle_between(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let denom = a.norm() * b.norm();
    if denom <= 0.0 {
        return 0.0;
    }
    (a.dot(&b) / denom).clamp(-1.0, 1.0).acos()
}

#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Hermite smoothstep of `x` between `edge0` and `edge1`, in `[0, 1]`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 == edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}
