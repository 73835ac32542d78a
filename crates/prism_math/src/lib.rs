//! Math types for the prism ray tracer.
//!
//! `Vec3` (from glam) is the single vector type used for positions,
//! directions, normals, and colors. The operations the tracer relies on:
//!
//! - `a + b`, `a - b`
//! - `a.dot(b)`
//! - `s * v` and `v * s` (scalar multiply, both orders)
//! - `v.normalize()` and `v.length()`
//! - `v.to_array()` for serializers that want `[x, y, z]` in order
//!
//! `normalize` requires a non-zero vector. A zero vector produces NaN
//! components; callers never pass one (camera directions always have
//! `z = -1`, light directions come from distinct points).

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;
