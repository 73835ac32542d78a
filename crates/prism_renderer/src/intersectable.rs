//! Intersectable trait and SceneHit for ray-object intersection.

use std::borrow::Cow;

use prism_core::Material;
use prism_math::{Ray, Vec3};

/// Record of the nearest intersection found by a scene query.
#[derive(Clone, Debug)]
pub struct SceneHit<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal. Spheres report the outward normal and the floor
    /// always reports +Y, whichever side the ray came from.
    pub normal: Vec3,
    /// Borrowed from the object, or synthesized for the checkerboard floor
    pub material: Cow<'a, Material>,
    /// Distance along the ray
    pub distance: f32,
}

/// Trait for objects that can be hit by rays.
pub trait Intersectable: Send + Sync {
    /// Distance along `ray` to the nearest intersection in front of its
    /// origin, or `None` on a miss. `ray.direction` must be unit length.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    fn material(&self) -> &Material;
}
