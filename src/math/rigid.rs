//! Rigid transforms (rotation + translation, no scale or projection).
//!
//! [`RigidTransform`] is the only type that exposes the quick inverse, so the
//! transpose trick can never be applied to a matrix it is wrong for.

use super::mat4::Mat4;
use super::vec4::Vec4;
use crate::error::{Error, Result};

/// Tolerance used when checking that a matrix is orthonormal.
const RIGID_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigidTransform {
    matrix: Mat4,
}

impl RigidTransform {
    pub const fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Mat4::translation(x, y, z),
        }
    }

    pub fn rotation_x(angle: f32) -> Self {
        Self {
            matrix: Mat4::rotation_x(angle),
        }
    }

    pub fn rotation_y(angle: f32) -> Self {
        Self {
            matrix: Mat4::rotation_y(angle),
        }
    }

    pub fn rotation_z(angle: f32) -> Self {
        Self {
            matrix: Mat4::rotation_z(angle),
        }
    }

    /// Camera placement matrix, see [`Mat4::point_at`].
    pub fn point_at(position: Vec4, target: Vec4, up: Vec4) -> Self {
        Self {
            matrix: Mat4::point_at(position, target, up),
        }
    }

    /// Composes two rigid transforms: `self` is applied first, then `next`.
    pub fn then(&self, next: &RigidTransform) -> Self {
        Self {
            matrix: self.matrix * next.matrix,
        }
    }

    /// Inverse via transposition of the rotation block.
    pub fn quick_inverse(&self) -> Self {
        Self {
            matrix: self.matrix.quick_inverse(),
        }
    }

    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn transform_point(&self, point: Vec4) -> Vec4 {
        point * self.matrix
    }
}

impl From<RigidTransform> for Mat4 {
    fn from(rigid: RigidTransform) -> Self {
        rigid.matrix
    }
}

impl TryFrom<Mat4> for RigidTransform {
    type Error = Error;

    /// Accepts a matrix whose 3x3 block is orthonormal and whose last column is (0, 0, 0, 1).
    fn try_from(matrix: Mat4) -> Result<Self> {
        let row = |r: usize| Vec4::new(matrix.get(r, 0), matrix.get(r, 1), matrix.get(r, 2));
        let near = |a: f32, b: f32| (a - b).abs() <= RIGID_EPSILON;

        let affine = (0..3).all(|r| near(matrix.get(r, 3), 0.0)) && near(matrix.get(3, 3), 1.0);
        let orthonormal = (0..3).all(|i| {
            (0..3).all(|j| {
                let expected = if i == j { 1.0 } else { 0.0 };
                near(row(i).dot(row(j)), expected)
            })
        });

        if affine && orthonormal {
            Ok(Self { matrix })
        } else {
            Err(Error::NotRigid)
        }
    }
}
