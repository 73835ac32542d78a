//! The reference scene: four spheres over a checkerboard, four lights.

use std::sync::Arc;

use crate::{Scene, Sphere};
use prism_core::{Light, Material};
use prism_math::Vec3;

/// Ivory, glass, red rubber and mirror spheres lit by four point lights.
pub fn four_spheres() -> Scene {
    let ivory = Arc::new(Material::ivory());
    let glass = Arc::new(Material::glass());
    let red_rubber = Arc::new(Material::red_rubber());
    let mirror = Arc::new(Material::mirror());

    let mut scene = Scene::new();
    scene.add(Box::new(Sphere::new(Vec3::new(-3.0, 0.0, -16.0), 2.0, ivory)));
    scene.add(Box::new(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass)));
    scene.add(Box::new(Sphere::new(Vec3::new(1.5, -0.5, -18.0), 3.0, red_rubber)));
    scene.add(Box::new(Sphere::new(Vec3::new(7.0, 5.0, -18.0), 4.0, mirror)));

    scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));
    scene.add_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 1.8));
    scene.add_light(Light::new(Vec3::new(30.0, 20.0, 30.0), 1.7));
    scene.add_light(Light::new(Vec3::new(0.0, 0.0, 1.0), 2.0));

    log::debug!(
        "Built demo scene: {} spheres, {} lights",
        scene.len(),
        scene.lights().len()
    );
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_spheres_contents() {
        let scene = four_spheres();

        assert_eq!(scene.len(), 4);
        assert_eq!(scene.lights().len(), 4);
        assert!(scene.floor().is_some());
    }
}
