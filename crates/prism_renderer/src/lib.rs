//! Prism Renderer - Whitted-style recursive ray tracing.
//!
//! Primary rays are cast per pixel, intersected against a linear list of
//! objects plus a procedural checkerboard floor, and shaded with diffuse
//! and specular terms, hard shadows, and recursive reflection and
//! refraction up to a fixed depth.

mod camera;
mod intersectable;
mod optics;
mod renderer;
mod scene;
mod sphere;

pub mod demo;

pub use camera::Camera;
pub use intersectable::{Intersectable, SceneHit};
pub use optics::{offset_origin, reflect, refract, SURFACE_EPSILON};
pub use renderer::{cast_ray, render, render_with_stats, RenderConfig, RenderStats};
pub use scene::{Checkerboard, Scene};
pub use sphere::Sphere;

/// Re-export the scene description and math types used in the public API
pub use prism_core::{Color, ImageBuffer, Light, Material};
pub use prism_math::{Interval, Ray, Vec3};
