//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::intersectable::Intersectable;
use prism_core::Material;
use prism_math::{Ray, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Project the center onto the ray to find the closest approach
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        // Origin inside the sphere: the near root is behind us
        let t = if t0 < 0.0 { t1 } else { t0 };
        if t < 0.0 {
            return None;
        }

        Some(t)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
