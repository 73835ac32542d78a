//! Scene container and the nearest-hit query.
//!
//! Objects are scanned linearly. The checkerboard floor is not an object:
//! it is a fixed rule evaluated after the scan, competing on distance with
//! whatever the scan found.

use std::borrow::Cow;

use crate::intersectable::{Intersectable, SceneHit};
use prism_core::{Color, Light, Material};
use prism_math::{Interval, Ray, Vec3};

/// Rays flatter than this against the floor are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Horizontal checkerboard floor of finite extent.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkerboard {
    /// Height of the floor plane (y)
    pub height: f32,
    /// Open x range covered by the floor
    pub x_extent: Interval,
    /// Open z range covered by the floor
    pub z_extent: Interval,
    /// Colors for odd and even cells
    pub colors: [Color; 2],
    pub specular_exponent: f32,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            height: -4.0,
            x_extent: Interval::new(-10.0, 10.0),
            z_extent: Interval::new(-30.0, -10.0),
            colors: [Color::new(0.3, 0.3, 0.3), Color::new(0.3, 0.2, 0.1)],
            specular_exponent: 50.0,
        }
    }
}

impl Checkerboard {
    /// Distance to the floor along `ray`, if it lands inside the extent.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let dir = ray.direction();
        if dir.y.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = -(ray.origin().y - self.height) / dir.y;
        if t <= 0.0 {
            return None;
        }

        let p = ray.at(t);
        if self.x_extent.surrounds(p.x) && self.z_extent.surrounds(p.z) {
            Some(t)
        } else {
            None
        }
    }

    /// Material at a point on the floor. Cells are two units wide; the
    /// color is picked by the parity of the truncated cell coordinates.
    pub fn material_at(&self, point: Vec3) -> Material {
        let cell_x = (0.5 * point.x + 1000.0) as i32;
        let cell_z = (0.5 + point.z) as i32;
        let color = if (cell_x + cell_z) & 1 == 1 {
            self.colors[0]
        } else {
            self.colors[1]
        };
        Material::new(color, self.specular_exponent)
    }
}

/// Objects, lights, and an optional checkerboard floor.
pub struct Scene {
    objects: Vec<Box<dyn Intersectable>>,
    lights: Vec<Light>,
    floor: Option<Checkerboard>,
}

impl Scene {
    /// Create an empty scene with the default checkerboard floor.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            floor: Some(Checkerboard::default()),
        }
    }

    /// Remove the floor.
    pub fn without_floor(mut self) -> Self {
        self.floor = None;
        self
    }

    /// Replace the floor.
    pub fn with_floor(mut self, floor: Checkerboard) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Intersectable>) {
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn floor(&self) -> Option<&Checkerboard> {
        self.floor.as_ref()
    }

    /// Get the number of objects (the floor is not counted).
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest surface along `ray`.
    ///
    /// `ray.direction` must be unit length.
    pub fn intersect(&self, ray: &Ray) -> Option<SceneHit<'_>> {
        let mut closest: Option<(f32, &dyn Intersectable)> = None;

        for object in &self.objects {
            if let Some(t) = object.intersect(ray) {
                if closest.map_or(true, |(best, _)| t < best) {
                    closest = Some((t, &**object));
                }
            }
        }

        let object_distance = closest.map_or(f32::INFINITY, |(t, _)| t);

        if let Some(floor) = &self.floor {
            if let Some(t) = floor.intersect(ray) {
                if t < object_distance {
                    let point = ray.at(t);
                    return Some(SceneHit {
                        point,
                        normal: Vec3::Y,
                        material: Cow::Owned(floor.material_at(point)),
                        distance: t,
                    });
                }
            }
        }

        closest.map(|(t, object)| {
            let point = ray.at(t);
            SceneHit {
                point,
                normal: object.normal_at(point),
                material: Cow::Borrowed(object.material()),
                distance: t,
            }
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
