//! Lighting types for the renderer.

use crate::math::vec4::Vec4;

/// Brightest value a shade can take; matches an 8-bit color channel.
pub const MAX_BRIGHTNESS: f32 = 255.0;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like the sun,
/// where all rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// Normalized light direction.
    direction: Vec4,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec4::new(0.0, 0.0, -1.0))
    }
}

impl DirectionalLight {
    /// Create a new directional light along the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec4) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    pub fn direction(&self) -> Vec4 {
        self.direction
    }

    /// Flat-shading intensity for a unit face normal.
    ///
    /// The dot product in [-1, 1] is remapped to `0.0..=MAX_BRIGHTNESS`, so faces
    /// turned fully away from the light are black rather than discarded.
    pub fn intensity(&self, normal: Vec4) -> f32 {
        let dot = self.direction.dot(normal);
        ((dot + 1.0) / 2.0 * MAX_BRIGHTNESS).clamp(0.0, MAX_BRIGHTNESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        // Normal aligned with the light direction
        let light = DirectionalLight::new(Vec4::new(0.0, 0.0, -1.0));
        let normal = Vec4::new(0.0, 0.0, -1.0);
        assert_relative_eq!(light.intensity(normal), MAX_BRIGHTNESS);
    }

    #[test]
    fn test_opposed_illumination() {
        let light = DirectionalLight::new(Vec4::new(0.0, 0.0, -1.0));
        let normal = Vec4::new(0.0, 0.0, 1.0);
        assert_eq!(light.intensity(normal), 0.0);
    }

    #[test]
    fn test_perpendicular_is_half_bright() {
        let light = DirectionalLight::new(Vec4::new(0.0, -3.0, 0.0));
        let normal = Vec4::new(1.0, 0.0, 0.0);
        assert_relative_eq!(light.intensity(normal), MAX_BRIGHTNESS / 2.0);
    }

    #[test]
    fn intensity_stays_in_range() {
        let light = DirectionalLight::new(Vec4::new(0.3, -0.2, -1.0));
        for i in 0..64 {
            let theta = i as f32 * 0.37;
            let phi = i as f32 * 0.91;
            let normal = Vec4::new(
                theta.sin() * phi.cos(),
                theta.sin() * phi.sin(),
                theta.cos(),
            )
            .normalize();
            let intensity = light.intensity(normal);
            assert!((0.0..=MAX_BRIGHTNESS).contains(&intensity), "{intensity}");
        }
    }
}
