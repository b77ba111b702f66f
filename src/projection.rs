//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the session's
//! projection (near/far planes, field-of-view scale, aspect ratio). It is built
//! once and its matrix is reused for every frame.

use crate::error::{Error, Result};
use crate::math::mat4::Mat4;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Near plane distance.
    near: f32,
    /// Far plane distance.
    far: f32,
    /// `1 / tan(fov_y / 2)`; scales view-space x and y before the divide.
    fov_scale: f32,
    /// Surface height divided by surface width; applied to x only.
    aspect_ratio: f32,
}

impl Projection {
    /// Creates a projection from an already computed field-of-view scale.
    ///
    /// # Arguments
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > near)
    /// * `fov_scale` - `1 / tan(fov_y / 2)` (must be > 0)
    /// * `aspect_ratio` - Height divided by width (must be > 0)
    pub fn new(near: f32, far: f32, fov_scale: f32, aspect_ratio: f32) -> Result<Self> {
        if !(near > 0.0) {
            return Err(Error::InvalidProjection(format!(
                "near plane must be positive, got {near}"
            )));
        }
        if !(far > near) {
            return Err(Error::InvalidProjection(format!(
                "far plane ({far}) must lie beyond the near plane ({near})"
            )));
        }
        if !(fov_scale > 0.0 && fov_scale.is_finite()) {
            return Err(Error::InvalidProjection(format!(
                "field of view scale must be positive and finite, got {fov_scale}"
            )));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(Error::InvalidProjection(format!(
                "aspect ratio must be positive and finite, got {aspect_ratio}"
            )));
        }

        Ok(Self {
            near,
            far,
            fov_scale,
            aspect_ratio,
        })
    }

    /// Creates a projection from a vertical field of view in degrees and the
    /// output surface size.
    pub fn from_degrees(fov_y_degrees: f32, width: u32, height: u32, near: f32, far: f32) -> Result<Self> {
        if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
            return Err(Error::InvalidProjection(format!(
                "field of view must be between 0 and 180 degrees, got {fov_y_degrees}"
            )));
        }
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }

        let fov_scale = 1.0 / (fov_y_degrees.to_radians() / 2.0).tan();
        let aspect_ratio = height as f32 / width as f32;
        Self::new(near, far, fov_scale, aspect_ratio)
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn fov_scale(&self) -> f32 {
        self.fov_scale
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.near, self.far, self.fov_scale, self.aspect_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ninety_degrees_gives_unit_scale() {
        let proj = Projection::from_degrees(90.0, 800, 600, 0.1, 1000.0).unwrap();
        assert_relative_eq!(proj.fov_scale(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(proj.aspect_ratio(), 0.75);
    }

    #[test]
    fn narrower_fov_magnifies() {
        let wide = Projection::from_degrees(90.0, 100, 100, 0.1, 10.0).unwrap();
        let narrow = Projection::from_degrees(45.0, 100, 100, 0.1, 10.0).unwrap();
        assert!(narrow.fov_scale() > wide.fov_scale());
    }

    #[test]
    fn matrix_uses_stored_parameters() {
        let proj = Projection::new(1.0, 11.0, 2.0, 0.5).unwrap();
        let m = proj.matrix();
        assert_relative_eq!(m.get(0, 0), 1.0);
        assert_relative_eq!(m.get(1, 1), 2.0);
        assert_relative_eq!(m.get(2, 2), 1.1);
        assert_relative_eq!(m.get(3, 2), -1.1);
        assert_eq!(m.get(2, 3), 1.0);
    }

    #[test]
    fn rejects_inverted_planes() {
        assert!(Projection::new(10.0, 1.0, 1.0, 1.0).is_err());
        assert!(Projection::new(0.0, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn rejects_bad_fov_and_surface() {
        assert!(Projection::from_degrees(180.0, 10, 10, 0.1, 1.0).is_err());
        assert!(matches!(
            Projection::from_degrees(60.0, 0, 10, 0.1, 1.0),
            Err(Error::InvalidViewport { width: 0, height: 10 })
        ));
    }
}
