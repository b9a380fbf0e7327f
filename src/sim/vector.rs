//! 2D vector primitive
//!
//! `Vector` is a plain `Copy` value; every operation returns a new vector, so
//! a particle spawned at an emitter's position can never move the emitter.

use glam::DVec2;

/// Double precision 2D vector
pub type Vector = DVec2;

/// Component-wise sum
#[inline]
pub fn add(a: Vector, b: Vector) -> Vector {
    a + b
}

/// Euclidean length, `sqrt(x² + y²)`
#[inline]
pub fn magnitude(v: Vector) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Direction of `v` in radians, `atan2(y, x)`; the zero vector yields 0
#[inline]
pub fn angle(v: Vector) -> f64 {
    v.y.atan2(v.x)
}

/// Build a vector from polar form
#[inline]
pub fn from_angle(angle: f64, magnitude: f64) -> Vector {
    Vector::new(magnitude * angle.cos(), magnitude * angle.sin())
}

/// True when both components are finite
#[inline]
pub fn is_finite(v: Vector) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
