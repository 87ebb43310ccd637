//! Scene lighting environment.
//!
//! A `LightSet` owns the light sources of a scene and evaluates the total
//! light intensity arriving at a surface point, under either of two local
//! illumination models. The two models intentionally differ (see the method
//! docs); they are kept as separate formulas rather than unified.

use glint_math::{try_normalize, GeometryError, GeometryResult, Vec3};

use crate::material::{Color, Material};

/// A light source in the scene.
///
/// Intensities must be finite but carry no sign constraint: a negative
/// intensity subtracts light. That is questionable but deliberate, and
/// callers relying on it should know what they are doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform contribution independent of position and orientation.
    Ambient { intensity: f32 },

    /// Light radiating from a 3D position; contributes based on the
    /// direction from the shaded point to the light.
    Point { position: Vec3, intensity: f32 },
}

/// An ordered collection of light sources.
///
/// Lights are appended and never removed; evaluation sums over all of them,
/// so insertion order does not affect the result beyond float rounding.
#[derive(Debug, Clone, Default)]
pub struct LightSet {
    lights: Vec<Light>,
}

impl LightSet {
    /// Create an empty light set.
    pub fn new() -> Self {
        Self { lights: Vec::new() }
    }

    /// Add an ambient light of the given intensity.
    pub fn add_ambient(&mut self, intensity: f32) {
        self.lights.push(Light::Ambient { intensity });
    }

    /// Add a point light at `position` with the given intensity.
    pub fn add_point(&mut self, position: Vec3, intensity: f32) {
        self.lights.push(Light::Point {
            position,
            intensity,
        });
    }

    /// Get the number of lights.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Check if the set has no lights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Get the stored lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Shade a surface point with the Gouraud-style illumination model.
    ///
    /// Per point light, with `e` the unit vector towards the camera, `l` the
    /// unit vector towards the light and `h = normalize(e + l)` the
    /// half-vector:
    ///
    /// ```text
    /// diffuse  = intensity * kd * (n . l)   / (|n| * |l|)
    /// specular = intensity * ks * (h . n)^s / (|n| * |h|)
    /// ```
    ///
    /// The `|l|` and `|h|` factors are 1 after normalization, so the divisor
    /// reduces to `|n|`; with a non-unit normal the specular term scales as
    /// `|n|^(s-1)`. Terms are not clamped, so back-facing lights subtract
    /// intensity. Both points are where this model diverges from
    /// [`shade_phong`](Self::shade_phong),
    /// which clamps at zero and never divides by the normal's norm. The
    /// formulas are preserved as-is rather than reconciled.
    ///
    /// The result is `base_color` scaled by the accumulated intensity,
    /// unclamped; display code is responsible for clamping.
    ///
    /// Fails with [`GeometryError::DegenerateNormal`] if a point light is
    /// present and `normal` has zero length, and with
    /// [`GeometryError::ZeroLengthVector`] if the camera or a light sits
    /// exactly on the shaded point.
    pub fn shade_gouraud(
        &self,
        point: Vec3,
        normal: Vec3,
        base_color: Color,
        camera_position: Vec3,
        material: Material,
    ) -> GeometryResult<Color> {
        // total light intensity
        let mut total = 0.0;

        for light in &self.lights {
            match *light {
                Light::Ambient { intensity } => {
                    total += intensity * material.ambient;
                }
                Light::Point {
                    position,
                    intensity,
                } => {
                    // unit vector from point to camera center
                    let e = try_normalize(camera_position - point)?;

                    // unit vector from point to light
                    let l = try_normalize(position - point)?;

                    // half-vector between e and l
                    let h = try_normalize(e + l)?;

                    let n_norm = normal.length();
                    if n_norm == 0.0 {
                        return Err(GeometryError::DegenerateNormal);
                    }

                    let diffuse =
                        intensity * material.diffuse * normal.dot(l) / (n_norm * l.length());
                    let specular = intensity
                        * material.specular
                        * h.dot(normal).powf(material.shininess)
                        / (n_norm * h.length());

                    total += diffuse + specular;
                }
            }
        }

        Ok(base_color * total)
    }

    /// Shade a surface point with the Phong-style illumination model.
    ///
    /// Ambient lights contribute `intensity * ka` as in
    /// [`shade_gouraud`](Self::shade_gouraud). Per point light, with `l` the
    /// unit vector towards the light, `v` the unit vector towards the camera
    /// and `r = normalize(2 (n . l) n - l)` the reflection of `l` about the
    /// normal:
    ///
    /// ```text
    /// diffuse  = intensity * kd * max(0, n . l)
    /// specular = intensity * ks * max(0, r . v)^s
    /// ```
    ///
    /// Both terms clamp at zero, so back-facing lights contribute nothing,
    /// and nothing divides by the normal's norm. The result is `base_color`
    /// scaled by the accumulated intensity, unclamped above.
    pub fn shade_phong(
        &self,
        point: Vec3,
        normal: Vec3,
        base_color: Color,
        camera_position: Vec3,
        material: Material,
    ) -> GeometryResult<Color> {
        let mut total = 0.0;

        // Ambient contributions first; a separate pass for clarity only,
        // the sum is order-independent.
        for light in &self.lights {
            if let Light::Ambient { intensity } = *light {
                total += intensity * material.ambient;
            }
        }

        for light in &self.lights {
            if let Light::Point {
                position,
                intensity,
            } = *light
            {
                // unit vector from point to light
                let l = try_normalize(position - point)?;

                // unit vector from point to camera center
                let v = try_normalize(camera_position - point)?;

                // reflection of l about the normal
                let r = try_normalize(2.0 * normal.dot(l) * normal - l)?;

                let diffuse = intensity * material.diffuse * normal.dot(l).max(0.0);
                let specular = intensity
                    * material.specular
                    * r.dot(v).max(0.0).powf(material.shininess);

                total += diffuse + specular;
            }
        }

        Ok(base_color * total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_color_eq(a: Color, b: Color) {
        assert!((a - b).length() < TOL, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_empty_set_is_dark() {
        let lights = LightSet::new();
        assert!(lights.is_empty());

        let color = lights
            .shade_phong(
                Vec3::ZERO,
                Vec3::Z,
                Color::ONE,
                Vec3::new(0.0, 0.0, 5.0),
                Material::default(),
            )
            .unwrap();
        assert_color_eq(color, Color::ZERO);
    }

    #[test]
    fn test_ambient_only_models_agree() {
        let mut lights = LightSet::new();
        lights.add_ambient(0.3);
        lights.add_ambient(0.5);

        let material = Material::new(0.5, 0.9, 0.9, 4.0);
        let base = Color::new(1.0, 0.5, 0.25);
        // Normal and camera must not matter for ambient light; a zero
        // normal is fine as long as no point light is present.
        let gouraud = lights
            .shade_gouraud(Vec3::X, Vec3::ZERO, base, Vec3::ZERO, material)
            .unwrap();
        let phong = lights
            .shade_phong(Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO, base, Vec3::Y, material)
            .unwrap();

        let expected = base * (0.8 * 0.5);
        assert_color_eq(gouraud, expected);
        assert_color_eq(phong, expected);
    }

    #[test]
    fn test_gouraud_front_lit_diffuse() {
        let mut lights = LightSet::new();
        lights.add_point(Vec3::new(0.0, 0.0, 1.0), 1.0);

        // Light, camera and normal all aligned on +Z: n.l = 1
        let color = lights
            .shade_gouraud(
                Vec3::ZERO,
                Vec3::Z,
                Color::ONE,
                Vec3::new(0.0, 0.0, 2.0),
                Material::diffuse_only(1.0),
            )
            .unwrap();
        assert_color_eq(color, Color::ONE);
    }

    #[test]
    fn test_gouraud_specular_aligned() {
        let mut lights = LightSet::new();
        lights.add_point(Vec3::new(0.0, 0.0, 1.0), 1.0);

        // h = n, so the specular term adds ks regardless of the exponent
        let color = lights
            .shade_gouraud(
                Vec3::ZERO,
                Vec3::Z,
                Color::ONE,
                Vec3::new(0.0, 0.0, 2.0),
                Material::new(0.0, 1.0, 1.0, 32.0),
            )
            .unwrap();
        assert_color_eq(color, Color::splat(2.0));
    }

    #[test]
    fn test_gouraud_scales_with_normal_norm() {
        let mut lights = LightSet::new();
        lights.add_point(Vec3::new(0.0, 0.0, 1.0), 1.0);

        // (h.n)^s / |n| with s = 2: a doubled normal doubles the specular
        // term. The diffuse term is scale-invariant, the dot cancels |n|.
        let material = Material::new(0.0, 0.0, 1.0, 2.0);
        let unit = lights
            .shade_gouraud(Vec3::ZERO, Vec3::Z, Color::ONE, Vec3::Z * 2.0, material)
            .unwrap();
        let doubled = lights
            .shade_gouraud(Vec3::ZERO, Vec3::Z * 2.0, Color::ONE, Vec3::Z * 2.0, material)
            .unwrap();
        assert_color_eq(doubled, unit * 2.0);
    }

    #[test]
    fn test_phong_back_facing_is_black_gouraud_goes_negative() {
        let mut lights = LightSet::new();
        // Light behind the surface
        lights.add_point(Vec3::new(0.0, 0.0, -1.0), 1.0);

        let material = Material::diffuse_only(1.0);
        let camera = Vec3::new(0.0, 0.0, 2.0);

        let phong = lights
            .shade_phong(Vec3::ZERO, Vec3::Z, Color::ONE, camera, material)
            .unwrap();
        assert_color_eq(phong, Color::ZERO);

        let gouraud = lights
            .shade_gouraud(Vec3::ZERO, Vec3::Z, Color::ONE, camera, material)
            .unwrap();
        assert_color_eq(gouraud, Color::splat(-1.0));
    }

    #[test]
    fn test_phong_mirror_specular() {
        let mut lights = LightSet::new();
        lights.add_point(Vec3::new(0.0, 0.0, 1.0), 1.0);

        // r = l = v on-axis, so max(0, r.v)^s = 1
        let color = lights
            .shade_phong(
                Vec3::ZERO,
                Vec3::Z,
                Color::ONE,
                Vec3::new(0.0, 0.0, 3.0),
                Material::new(0.0, 0.0, 1.0, 50.0),
            )
            .unwrap();
        assert_color_eq(color, Color::ONE);
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let point = Vec3::new(0.5, -0.25, 0.0);
        let normal = Vec3::new(0.0, 0.3, 1.0).normalize();
        let camera = Vec3::new(1.0, 2.0, 4.0);
        let material = Material::new(0.2, 0.6, 0.4, 12.0);
        let base = Color::new(0.9, 0.8, 0.2);

        let mut forward = LightSet::new();
        forward.add_ambient(0.25);
        forward.add_point(Vec3::new(2.0, 3.0, 1.0), 0.8);
        forward.add_point(Vec3::new(-1.0, 2.0, 2.0), 0.5);

        let mut shuffled = LightSet::new();
        shuffled.add_point(Vec3::new(-1.0, 2.0, 2.0), 0.5);
        shuffled.add_ambient(0.25);
        shuffled.add_point(Vec3::new(2.0, 3.0, 1.0), 0.8);

        let a = forward
            .shade_gouraud(point, normal, base, camera, material)
            .unwrap();
        let b = shuffled
            .shade_gouraud(point, normal, base, camera, material)
            .unwrap();
        assert_color_eq(a, b);

        let a = forward
            .shade_phong(point, normal, base, camera, material)
            .unwrap();
        let b = shuffled
            .shade_phong(point, normal, base, camera, material)
            .unwrap();
        assert_color_eq(a, b);
    }

    #[test]
    fn test_negative_intensity_subtracts() {
        let mut lights = LightSet::new();
        lights.add_ambient(1.0);
        lights.add_ambient(-0.4);

        let color = lights
            .shade_phong(
                Vec3::ZERO,
                Vec3::Z,
                Color::ONE,
                Vec3::Z,
                Material::new(1.0, 0.0, 0.0, 1.0),
            )
            .unwrap();
        assert_color_eq(color, Color::splat(0.6));
    }

    #[test]
    fn test_gouraud_zero_normal_fails() {
        let mut lights = LightSet::new();
        lights.add_point(Vec3::new(0.0, 0.0, 1.0), 1.0);

        let result = lights.shade_gouraud(
            Vec3::ZERO,
            Vec3::ZERO,
            Color::ONE,
            Vec3::new(0.0, 0.0, 2.0),
            Material::default(),
        );
        assert_eq!(result, Err(GeometryError::DegenerateNormal));
    }

    #[test]
    fn test_camera_on_point_fails() {
        let mut lights = LightSet::new();
        lights.add_point(Vec3::new(0.0, 0.0, 1.0), 1.0);

        let result = lights.shade_gouraud(
            Vec3::ZERO,
            Vec3::Z,
            Color::ONE,
            Vec3::ZERO,
            Material::default(),
        );
        assert_eq!(result, Err(GeometryError::ZeroLengthVector));
    }
}
