//! Camera for primary ray generation.
//!
//! The camera sits at the world origin looking down -Z with +Y up. Only
//! the resolution and horizontal field of view are configurable.

use prism_core::RenderSettings;
use prism_math::{Ray, Vec3};

/// Pinhole camera fixed at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    /// Horizontal field of view in radians
    fov: f32,
}

impl Camera {
    /// Create a new camera with default settings (1000x1000, 1 radian).
    pub fn new() -> Self {
        Self {
            image_width: 1000,
            image_height: 1000,
            fov: 1.0,
        }
    }

    /// Build a camera from render settings.
    pub fn from_settings(settings: &RenderSettings) -> Self {
        Self::new()
            .with_resolution(settings.width, settings.height)
            .with_fov(settings.fov)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the horizontal field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// tan(fov / 2), the half-width of the image plane at z = -1.
    pub fn fov_tangent(&self) -> f32 {
        (self.fov / 2.0).tan()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Primary ray for column `x` and sample row `y`.
    ///
    /// Sample rows count upward: `y = 0` is the bottom of the image plane.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let tan = self.fov_tangent();
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        let dir_x = (2.0 * x as f32 / width - 1.0) * tan * self.aspect_ratio();
        let dir_y = (2.0 * y as f32 / height - 1.0) * tan;

        Ray::new(Vec3::ZERO, Vec3::new(dir_x, dir_y, -1.0).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults() {
        let camera = Camera::new();

        assert_eq!(camera.image_width, 1000);
        assert_eq!(camera.image_height, 1000);
        assert!((camera.fov_tangent() - 0.5f32.tan()).abs() < 1e-6);
    }

    #[test]
    fn test_camera_center_ray_points_down_neg_z() {
        let camera = Camera::new().with_resolution(100, 100);
        let ray = camera.primary_ray(50, 50);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_camera_corner_rays() {
        let camera = Camera::new().with_resolution(200, 100).with_fov(1.0);
        let tan = camera.fov_tangent();

        let ray = camera.primary_ray(0, 0);
        let d = ray.direction();
        assert!((d.length() - 1.0).abs() < 1e-6);

        // Unnormalized (-tan * aspect, -tan, -1)
        assert!((d.x / d.z - tan * 2.0).abs() < 1e-5);
        assert!((d.y / d.z - tan).abs() < 1e-5);
        assert!(d.x < 0.0 && d.y < 0.0 && d.z < 0.0);
    }

    #[test]
    fn test_camera_from_settings() {
        let settings = RenderSettings {
            width: 64,
            height: 32,
            fov: 0.8,
            ..Default::default()
        };
        let camera = Camera::from_settings(&settings);

        assert_eq!(camera.image_width, 64);
        assert_eq!(camera.image_height, 32);
        assert_eq!(camera.fov(), 0.8);
        assert_eq!(camera.aspect_ratio(), 2.0);
    }
}
