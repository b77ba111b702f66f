//! Homogeneous 3D vector.
//!
//! A [`Vec4`] carries `x`, `y`, `z` plus a homogeneous `w`. Points have `w = 1`.
//! The arithmetic helpers operate on the spatial part only and always produce a
//! point, so `w` is only ever something other than 1 after a projection matrix
//! writes into it. Dividing by that `w` is [`crate::screen::perspective_divide`]'s job.

use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a point (w=1) from x, y, z coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// Create a vector with an explicit w component.
    pub const fn with_w(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product of two vectors.
    /// The resulting vector is perpendicular to both input vectors.
    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length of the spatial part.
    pub fn length(&self) -> f32 {
        self.dot(*self).sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// The caller must not pass a zero-length vector. Degenerate geometry is
    /// filtered when a [`crate::Mesh`] is built, so the pipeline never does.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        debug_assert!(length > 0.0, "normalize called on a zero-length vector");
        *self / length
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Scalar multiplication of a vector.
impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Scalar division of a vector.
impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn points_default_to_unit_w() {
        assert_eq!(Vec4::new(1.0, 2.0, 3.0).w, 1.0);
        assert_eq!((Vec4::new(1.0, 2.0, 3.0) * 4.0).w, 1.0);
    }

    #[test]
    fn operators_leave_operands_untouched() {
        let a = Vec4::new(1.0, 2.0, 3.0);
        let b = Vec4::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec4::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec4::new(3.0, 3.0, 3.0));
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5));
        assert_eq!(a, Vec4::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn cross_follows_axis_order() {
        let x = Vec4::new(1.0, 0.0, 0.0);
        let y = Vec4::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec4::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec4::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn dot_ignores_w() {
        let a = Vec4::with_w(1.0, 2.0, 3.0, 10.0);
        let b = Vec4::with_w(1.0, 1.0, 1.0, 10.0);
        assert_relative_eq!(a.dot(b), 6.0);
    }

    #[test]
    fn normalized_vectors_have_unit_length() {
        for v in [
            Vec4::new(3.0, 4.0, 0.0),
            Vec4::new(-0.001, 0.002, 0.0005),
            Vec4::new(120.0, -75.0, 33.0),
            Vec4::new(0.0, 0.0, -9.0),
        ] {
            assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-5);
        }
    }
}
