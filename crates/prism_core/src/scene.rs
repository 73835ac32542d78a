//! Scene description types for prism.
//!
//! Materials and lights are plain immutable data. Objects share a
//! material through `Arc<Material>`; the renderer never mutates them.

use prism_math::Vec3;

/// Color type alias (RGB values typically 0-1, may exceed 1 while shading)
pub type Color = Vec3;

/// Surface material for the Phong + reflection + refraction shading model.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Diffuse color (RGB, 0-1)
    pub diffuse_color: Color,

    /// Phong specular exponent
    pub specular_exponent: f32,

    /// Weights for the diffuse, specular, reflection and refraction terms.
    /// They need not sum to 1.
    pub albedo: [f32; 4],

    /// Index of refraction (1.0 = vacuum, no bend)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Color::new(0.5, 0.5, 0.5), // Grey default
            specular_exponent: 1.0,
            albedo: [1.0, 0.0, 0.0, 0.0],
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create a purely diffuse material with the given color and exponent.
    pub fn new(diffuse_color: Color, specular_exponent: f32) -> Self {
        Self {
            diffuse_color,
            specular_exponent,
            ..Default::default()
        }
    }

    /// Set the four shading weights.
    pub fn with_albedo(mut self, albedo: [f32; 4]) -> Self {
        self.albedo = albedo;
        self
    }

    /// Set the index of refraction.
    pub fn with_refractive_index(mut self, refractive_index: f32) -> Self {
        self.refractive_index = refractive_index;
        self
    }

    #[inline]
    pub fn diffuse_weight(&self) -> f32 {
        self.albedo[0]
    }

    #[inline]
    pub fn specular_weight(&self) -> f32 {
        self.albedo[1]
    }

    #[inline]
    pub fn reflection_weight(&self) -> f32 {
        self.albedo[2]
    }

    #[inline]
    pub fn refraction_weight(&self) -> f32 {
        self.albedo[3]
    }

    /// Off-white, mostly diffuse with a soft highlight.
    pub fn ivory() -> Self {
        Self::new(Color::new(0.4, 0.4, 0.3), 50.0).with_albedo([0.6, 0.3, 0.1, 0.0])
    }

    /// Clear glass (index 1.5), mostly refractive.
    pub fn glass() -> Self {
        Self::new(Color::new(0.6, 0.7, 0.8), 125.0)
            .with_albedo([0.0, 0.5, 0.1, 0.8])
            .with_refractive_index(1.5)
    }

    /// Dull red, almost no highlight.
    pub fn red_rubber() -> Self {
        Self::new(Color::new(0.3, 0.1, 0.1), 10.0).with_albedo([0.9, 0.1, 0.0, 0.0])
    }

    /// Near-perfect mirror with a very tight highlight.
    pub fn mirror() -> Self {
        Self::new(Color::new(1.0, 1.0, 1.0), 1425.0).with_albedo([0.0, 10.0, 0.8, 0.0])
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,

    /// Unitless multiplier applied to both diffuse and specular terms
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}
