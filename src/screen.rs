//! Perspective divide and NDC -> pixel mapping.

use crate::error::{Error, Result};
use crate::math::vec4::Vec4;
use crate::triangle::{Clip, Screen, Triangle};

/// Smallest clip-space w that is still divided. Anything at or below this
/// is on or behind the camera's eye plane.
pub const W_EPSILON: f32 = 1e-5;

/// Pixel dimensions of the output surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps an NDC point to pixels: shift [-1, 1] to [0, 2], then scale each
    /// axis by half the surface size. z passes through unchanged.
    pub fn ndc_to_screen(&self, ndc: Vec4) -> Vec4 {
        Vec4::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (ndc.y + 1.0) * 0.5 * self.height as f32,
            ndc.z,
        )
    }
}

/// Divides x, y and z by w.
///
/// Returns `None` when w is at or below [`W_EPSILON`]; such a point cannot be
/// projected and would otherwise produce infinities or NaNs.
pub fn perspective_divide(clip: Vec4) -> Option<Vec4> {
    if clip.w <= W_EPSILON {
        return None;
    }
    Some(Vec4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w))
}

impl Triangle<Clip> {
    /// Clip space -> screen space.
    ///
    /// The whole triangle is dropped if any vertex fails the w guard.
    pub fn to_screen(&self, viewport: &Viewport) -> Option<Triangle<Screen>> {
        let [a, b, c] = *self.points();
        let points = [
            viewport.ndc_to_screen(perspective_divide(a)?),
            viewport.ndc_to_screen(perspective_divide(b)?),
            viewport.ndc_to_screen(perspective_divide(c)?),
        ];
        Some(Triangle::from_points(points, self.shade()))
    }
}
