//! Core Whitted ray tracing renderer.
//!
//! Implements:
//! - Recursive reflection and refraction up to a fixed depth
//! - Phong diffuse + specular lighting with hard shadows
//! - A single-threaded framebuffer fill

use std::time::Instant;

use crate::optics::{offset_origin, reflect, refract};
use crate::{Camera, Scene, SceneHit};
use prism_core::{Color, ImageBuffer, RenderSettings};
use prism_math::{Ray, Vec3};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Deepest recursion level that still shades a hit. Calls past this
    /// return the background.
    pub max_depth: u32,
    /// Color returned when a ray hits nothing or the depth limit is passed
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            background: Color::new(0.2, 0.7, 0.8),
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            background: Color::from_array(settings.background),
        }
    }
}

/// Ray counters gathered while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub primary_rays: u64,
    /// Reflection and refraction rays
    pub secondary_rays: u64,
    pub shadow_rays: u64,
    /// Deepest `depth` passed to [`cast_ray`]
    pub deepest_call: u32,
}

impl RenderStats {
    pub fn total_rays(&self) -> u64 {
        self.primary_rays + self.secondary_rays + self.shadow_rays
    }
}

/// Summed light intensities at a hit point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct LightSample {
    pub diffuse: f32,
    pub specular: f32,
}

/// Compute the color seen along a ray.
///
/// `ray.direction` must be unit length. `depth` is 0 for primary rays.
pub fn cast_ray(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    stats: &mut RenderStats,
) -> Color {
    stats.deepest_call = stats.deepest_call.max(depth);

    if depth > config.max_depth {
        return config.background;
    }

    let Some(hit) = scene.intersect(ray) else {
        return config.background;
    };
    let material = &*hit.material;

    let reflect_color = if material.reflection_weight() != 0.0 {
        let direction = reflect(ray.direction(), hit.normal);
        let origin = offset_origin(hit.point, hit.normal, direction);
        stats.secondary_rays += 1;
        cast_ray(&Ray::new(origin, direction), scene, depth + 1, config, stats)
    } else {
        Color::ZERO
    };

    let refract_color = if material.refraction_weight() != 0.0 {
        let direction = refract(ray.direction(), hit.normal, material.refractive_index);
        if direction == Vec3::ZERO {
            // Total internal reflection
            Color::ZERO
        } else {
            let origin = offset_origin(hit.point, hit.normal, direction);
            stats.secondary_rays += 1;
            cast_ray(&Ray::new(origin, direction), scene, depth + 1, config, stats)
        }
    } else {
        Color::ZERO
    };

    let light = direct_lighting(ray, &hit, scene, stats);

    material.diffuse_weight() * light.diffuse * material.diffuse_color
        + material.specular_weight() * light.specular * Color::ONE
        + material.reflection_weight() * reflect_color
        + material.refraction_weight() * refract_color
}

/// Sum diffuse and specular intensity from every light that is not
/// blocked from the hit point.
///
/// The specular term compares the reflected light direction with the
/// incoming ray direction rather than a separate view vector.
pub(crate) fn direct_lighting(
    ray: &Ray,
    hit: &SceneHit<'_>,
    scene: &Scene,
    stats: &mut RenderStats,
) -> LightSample {
    let mut sample = LightSample::default();

    for light in scene.lights() {
        let to_light = light.position - hit.point;
        let light_distance = to_light.length();
        let light_dir = to_light.normalize();

        let shadow_origin = offset_origin(hit.point, hit.normal, light_dir);
        stats.shadow_rays += 1;
        if let Some(blocker) = scene.intersect(&Ray::new(shadow_origin, light_dir)) {
            if (blocker.point - shadow_origin).length() < light_distance {
                continue;
            }
        }

        sample.diffuse += light.intensity * light_dir.dot(hit.normal).max(0.0);
        sample.specular += light.intensity
            * reflect(light_dir, hit.normal)
                .dot(ray.direction())
                .max(0.0)
                .powf(hit.material.specular_exponent);
    }

    sample
}

/// Render the scene to an image buffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    render_with_stats(camera, scene, config).0
}

/// Render the scene and report ray counts.
///
/// Row 0 of the returned image is the top of the picture.
pub fn render_with_stats(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> (ImageBuffer, RenderStats) {
    let width = camera.image_width;
    let height = camera.image_height;
    let mut image = ImageBuffer::new(width, height);
    let mut stats = RenderStats::default();

    log::debug!(
        "Rendering {}x{} with {} objects, {} lights, max depth {}",
        width,
        height,
        scene.len(),
        scene.lights().len(),
        config.max_depth
    );
    let start = Instant::now();

    for y in 0..height {
        for x in 0..width {
            let ray = camera.primary_ray(x, y);
            stats.primary_rays += 1;
            let color = cast_ray(&ray, scene, 0, config, &mut stats);
            image.set(x, height - 1 - y, color);
        }
    }

    log::info!(
        "Rendered {}x{} in {:.2?}: {} rays ({} primary, {} secondary, {} shadow), deepest call {}",
        width,
        height,
        start.elapsed(),
        stats.total_rays(),
        stats.primary_rays,
        stats.secondary_rays,
        stats.shadow_rays,
        stats.deepest_call
    );

    (image, stats)
}
