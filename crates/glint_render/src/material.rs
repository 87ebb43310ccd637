//! Material coefficients for local illumination.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Reflection coefficients of a surface, passed by value into each shading
/// call. The shininess exponent is typically >= 1; larger values give a
/// tighter specular highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient coefficient (ka)
    pub ambient: f32,

    /// Diffuse coefficient (kd)
    pub diffuse: f32,

    /// Specular coefficient (ks)
    pub specular: f32,

    /// Specular exponent (s)
    pub shininess: f32,
}

impl Material {
    /// Create a material from its four coefficients.
    pub fn new(ambient: f32, diffuse: f32, specular: f32, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Purely diffuse material: no ambient or specular response.
    pub fn diffuse_only(diffuse: f32) -> Self {
        Self::new(0.0, diffuse, 0.0, 1.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 0.7,
            specular: 0.2,
            shininess: 10.0,
        }
    }
}
