//! Reflection, refraction, and secondary-ray origin helpers.

use prism_math::Vec3;

/// Distance secondary ray origins are pushed off a surface so they do not
/// immediately re-hit it.
pub const SURFACE_EPSILON: f32 = 1e-4;

/// Reflect a vector about a normal.
///
/// `normal` must be unit length; reflecting twice returns the input.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Refract a unit direction through a surface with the given index,
/// using Snell's law.
///
/// The normal may face either way: a ray arriving from the back side
/// swaps the indices and flips the normal. Returns `Vec3::ZERO` on total
/// internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f32) -> Vec3 {
    let mut cos_i = -incident.dot(normal).clamp(-1.0, 1.0);
    let mut eta_i = 1.0;
    let mut eta_t = refractive_index;
    let mut n = normal;

    if cos_i < 0.0 {
        // Leaving the medium
        cos_i = -cos_i;
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * incident + (eta * cos_i - k.sqrt()) * n
    }
}

/// Offset `point` along `normal` onto the side `direction` travels toward.
#[inline]
pub fn offset_origin(point: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    if direction.dot(normal) < 0.0 {
        point - SURFACE_EPSILON * normal
    } else {
        point + SURFACE_EPSILON * normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unit direction leaving a surface at `degrees` from the +Y normal.
    fn at_angle(degrees: f32) -> Vec3 {
        let theta = degrees.to_radians();
        Vec3::new(theta.sin(), theta.cos(), 0.0)
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(d, Vec3::Y);
        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn test_reflect_twice_is_identity() {
        let n = Vec3::new(0.3, 0.9, -0.2).normalize();
        for d in [
            Vec3::new(1.0, -2.0, 0.5).normalize(),
            Vec3::NEG_Z,
            Vec3::new(-0.4, 0.1, 0.9).normalize(),
        ] {
            let back = reflect(reflect(d, n), n);
            assert!((back - d).length() < 1e-5, "{:?} -> {:?}", d, back);
        }
    }

    #[test]
    fn test_refract_index_one_passes_straight_through() {
        let d = Vec3::new(0.5, -1.0, 0.0).normalize();
        let t = refract(d, Vec3::Y, 1.0);
        assert!((t - d).length() < 1e-6);
    }

    #[test]
    fn test_refract_entering_glass_bends_toward_normal() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = refract(d, Vec3::Y, 1.5);

        assert!((t.length() - 1.0).abs() < 1e-5);
        assert!(t.y < 0.0);
        // sin(theta_t) = sin(45deg) / 1.5
        let expected_sin = std::f32::consts::FRAC_1_SQRT_2 / 1.5;
        assert!((t.x - expected_sin).abs() < 1e-5);
    }

    #[test]
    fn test_refract_mirrored_inputs_mirror_output() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let a = refract(d, Vec3::Y, 1.5);
        let b = refract(-d, -Vec3::Y, 1.5);
        assert!((a + b).length() < 1e-5);
    }

    #[test]
    fn test_refract_total_internal_reflection_at_critical_angle() {
        // Leaving glass: the ray travels along +Y normal side.
        // Critical angle for 1.5 is asin(1/1.5) ~ 41.81 degrees.
        let below = refract(at_angle(41.0), Vec3::Y, 1.5);
        let above = refract(at_angle(42.5), Vec3::Y, 1.5);

        assert_ne!(below, Vec3::ZERO);
        assert!((below.length() - 1.0).abs() < 1e-4);
        assert_eq!(above, Vec3::ZERO);
    }

    #[test]
    fn test_offset_origin_follows_direction_side() {
        let p = Vec3::new(0.0, -4.0, -20.0);

        let up = offset_origin(p, Vec3::Y, Vec3::new(0.2, 1.0, 0.0));
        let down = offset_origin(p, Vec3::Y, Vec3::new(0.2, -1.0, 0.0));

        assert!(up.y > p.y);
        assert!(down.y < p.y);
        assert!(((up - p).length() - SURFACE_EPSILON).abs() < 1e-5);
    }
}
