//! 4x4 transformation matrix using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `vec * Mat4`
//! - Translation is stored in the **last row**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B,
//!   so the composed matrix is `A * B`
//!
//! # Example
//! ```ignore
//! let world = Mat4::rotation_z(angle) * Mat4::translation(0.0, 0.0, 10.0);
//! let moved = vertex * world;  // rotate, then push into the screen
//! ```

use std::ops::Mul;

use super::vec4::Vec4;
use crate::error::{Error, Result};

/// 4x4 matrix stored as `data[row][col]`.
///
/// The fixed-size storage means every matrix in the pipeline is 4x4 by
/// construction. Dynamically shaped input goes through [`Mat4::try_from_rows`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    /// Builds a matrix from a runtime list of rows.
    ///
    /// Anything other than exactly four rows of four values is rejected;
    /// nothing is padded or truncated.
    pub fn try_from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        if rows.len() != 4 {
            return Err(Error::MatrixShape {
                rows: rows.len(),
                cols: rows.first().map_or(0, Vec::len),
            });
        }

        let mut data = [[0.0f32; 4]; 4];
        for (dst, src) in data.iter_mut().zip(rows) {
            if src.len() != 4 {
                return Err(Error::MatrixShape {
                    rows: rows.len(),
                    cols: src.len(),
                });
            }
            dst.copy_from_slice(src);
        }
        Ok(Mat4::new(data))
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last row (row-vector convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective projection matrix.
    ///
    /// # Arguments
    ///
    /// * `near` - Distance to the near plane.
    /// * `far` - Distance to the far plane.
    /// * `fov_scale` - `1 / tan(fov / 2)`, already computed from the vertical field of view.
    /// * `aspect_ratio` - Surface height divided by width; it scales x only.
    ///
    /// After dividing by the resulting `w` (which holds view-space z), x and y of
    /// points inside the frustum land in [-1, 1] and z maps from near..far to 0..1.
    pub fn perspective(near: f32, far: f32, fov_scale: f32, aspect_ratio: f32) -> Self {
        let q = far / (far - near);
        Mat4::new([
            [aspect_ratio * fov_scale, 0.0, 0.0, 0.0],
            [0.0, fov_scale, 0.0, 0.0],
            [0.0, 0.0, q, 1.0],
            [0.0, 0.0, -near * q, 0.0],
        ])
    }

    /// Builds the matrix that places a camera at `position` looking at `target`.
    ///
    /// Rows hold the camera's right, up and forward axes followed by its position,
    /// so this maps camera-local coordinates into world space. `up` is only a hint;
    /// its component along the forward axis is removed before use.
    pub fn point_at(position: Vec4, target: Vec4, up: Vec4) -> Self {
        let forward = (target - position).normalize();
        let up = (up - forward * up.dot(forward)).normalize();
        let right = up.cross(forward);

        Mat4::new([
            [right.x, right.y, right.z, 0.0],
            [up.x, up.y, up.z, 0.0],
            [forward.x, forward.y, forward.z, 0.0],
            [position.x, position.y, position.z, 1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut data = [[0.0f32; 4]; 4];
        for (row, values) in data.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[col][row];
            }
        }
        Mat4::new(data)
    }

    /// Inverse that is only correct for rotation + translation matrices.
    ///
    /// Transposes the 3x3 rotation block and rebuilds the translation row from it.
    /// Scale or projection terms give silently wrong results, which is why the
    /// public entry point is [`super::rigid::RigidTransform::quick_inverse`].
    pub(crate) fn quick_inverse(&self) -> Self {
        let m = &self.data;
        let mut inv = [[0.0f32; 4]; 4];
        for (row, values) in inv.iter_mut().enumerate().take(3) {
            for (col, value) in values.iter_mut().enumerate().take(3) {
                *value = m[col][row];
            }
        }
        for col in 0..3 {
            inv[3][col] = -(m[3][0] * inv[0][col] + m[3][1] * inv[1][col] + m[3][2] * inv[2][col]);
        }
        inv[3][3] = 1.0;
        Mat4::new(inv)
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    pub fn rows(&self) -> &[[f32; 4]; 4] {
        &self.data
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For the row-vector convention, `v * (A * B)` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for (row, values) in result.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a homogeneous vector: Vec4 * Mat4 (row vector).
///
/// The resulting `w` is whatever the matrix produced; no perspective divide happens here.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, m: Mat4) -> Self::Output {
        let d = &m.data;
        Vec4::with_w(
            self.x * d[0][0] + self.y * d[1][0] + self.z * d[2][0] + self.w * d[3][0],
            self.x * d[0][1] + self.y * d[1][1] + self.z * d[2][1] + self.w * d[3][1],
            self.x * d[0][2] + self.y * d[1][2] + self.z * d[2][2] + self.w * d[3][2],
            self.x * d[0][3] + self.y * d[1][3] + self.z * d[2][3] + self.w * d[3][3],
        )
    }
}
