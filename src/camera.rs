//! Camera state and per-frame input.
//!
//! # Coordinate System
//!
//! Uses a **left-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! The camera is mutated between frames by whatever handles navigation. The
//! pipeline only ever sees a copy of it inside a [`FrameInput`].

use crate::error::{Error, Result};
use crate::math::rigid::RigidTransform;
use crate::math::vec4::Vec4;
use crate::transform::Transform;

/// Camera with a position, a look direction and an up hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec4,
    look_dir: Vec4,
    up: Vec4,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec4::ZERO,
            look_dir: Vec4::FORWARD,
            up: Vec4::UP,
        }
    }
}

impl Camera {
    /// Creates a camera at `position` looking along `look_dir`, with world +Y as up.
    ///
    /// Fails with [`Error::DegenerateCamera`] when `look_dir` has no usable
    /// direction or points straight up or down.
    pub fn new(position: Vec4, look_dir: Vec4) -> Result<Self> {
        Self::oriented(position, look_dir, Vec4::UP)
    }

    /// Creates a camera at `position` looking toward `target`.
    pub fn looking_at(position: Vec4, target: Vec4) -> Result<Self> {
        Self::new(position, target - position)
    }

    /// Replaces the up hint. Fails if it is parallel to the look direction.
    pub fn with_up(self, up: Vec4) -> Result<Self> {
        Self::oriented(self.position, self.look_dir, up)
    }

    fn oriented(position: Vec4, look_dir: Vec4, up: Vec4) -> Result<Self> {
        let side = up.cross(look_dir);
        let usable = |v: Vec4| {
            let len_sq = v.dot(v);
            len_sq > 0.0 && len_sq.is_finite()
        };
        if !usable(look_dir) || !usable(side) {
            return Err(Error::DegenerateCamera { look_dir, up });
        }
        Ok(Self {
            position,
            look_dir: look_dir.normalize(),
            up,
        })
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Moves the camera along its look direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position = self.position + self.look_dir * distance;
    }

    /// Moves the camera sideways (strafe). Positive distance moves right.
    pub fn strafe(&mut self, distance: f32) {
        self.position = self.position + self.right() * distance;
    }

    /// Moves the camera along its up hint.
    pub fn move_up(&mut self, distance: f32) {
        self.position = self.position + self.up.normalize() * distance;
    }

    /// Turns the look direction around the world Y axis.
    pub fn turn(&mut self, yaw_delta: f32) {
        self.look_dir = RigidTransform::rotation_y(yaw_delta)
            .transform_point(self.look_dir)
            .normalize();
    }

    pub fn set_position(&mut self, position: Vec4) {
        self.position = position;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn position(&self) -> Vec4 {
        self.position
    }

    pub fn look_dir(&self) -> Vec4 {
        self.look_dir
    }

    pub fn up(&self) -> Vec4 {
        self.up
    }

    /// The point one unit ahead of the camera.
    pub fn target(&self) -> Vec4 {
        self.position + self.look_dir
    }

    pub fn right(&self) -> Vec4 {
        self.up.cross(self.look_dir).normalize()
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// Computes the view matrix: the quick inverse of the point-at matrix.
    pub fn view(&self) -> RigidTransform {
        RigidTransform::point_at(self.position, self.target(), self.up).quick_inverse()
    }
}

/// Everything that varies from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub camera: Camera,
    pub model: Transform,
}

impl FrameInput {
    pub fn new(camera: Camera, model: Transform) -> Self {
        Self { camera, model }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn camera_starts_looking_forward() {
        let camera = Camera::default();
        assert_relative_eq!(camera.look_dir().z, 1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.right().x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn turn_rotates_horizontally() {
        let mut camera = Camera::default();
        camera.turn(FRAC_PI_2);
        assert_relative_eq!(camera.look_dir().z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(camera.look_dir().x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(camera.look_dir().y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn move_forward_changes_position() {
        let mut camera = Camera::default();
        camera.move_forward(5.0);
        camera.strafe(2.0);
        camera.move_up(1.0);
        assert_relative_eq!(camera.position().z, 5.0, epsilon = 1e-6);
        assert_relative_eq!(camera.position().x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(camera.position().y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn default_view_is_identity() {
        let view = Camera::default().view();
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_relative_eq!(view.matrix().get(row, col), expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn view_matrix_puts_target_in_front() {
        let camera = Camera::looking_at(Vec4::new(0.0, 0.0, -5.0), Vec4::ZERO).unwrap();
        let origin = camera.view().transform_point(Vec4::ZERO);
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(origin.z, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn view_follows_sideways_camera() {
        let camera = Camera::looking_at(Vec4::new(-4.0, 0.0, 0.0), Vec4::ZERO).unwrap();
        let origin = camera.view().transform_point(Vec4::ZERO);
        assert_relative_eq!(origin.z, 4.0, epsilon = 1e-5);
        assert_relative_eq!(origin.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rejects_unorientable_look_directions() {
        let eye = Vec4::new(1.0, 2.0, 3.0);
        assert!(matches!(
            Camera::looking_at(eye, eye),
            Err(Error::DegenerateCamera { .. })
        ));
        assert!(matches!(
            Camera::new(eye, Vec4::new(0.0, -2.0, 0.0)),
            Err(Error::DegenerateCamera { .. })
        ));
        assert!(matches!(
            Camera::default().with_up(Vec4::FORWARD),
            Err(Error::DegenerateCamera { .. })
        ));
        assert!(Camera::default().with_up(Vec4::new(1.0, 1.0, 0.0)).is_ok());
    }
}
