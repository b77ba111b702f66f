//! Model placement.
//!
//! Provides a [`Transform`] struct with a fluent API for the position and
//! rotation (Euler angles) that place a mesh in the world. There is no scale:
//! the world matrix stays a [`RigidTransform`].

use crate::math::rigid::RigidTransform;
use crate::math::vec4::Vec4;

/// A 3D transform with position and rotation (Euler angles in radians).
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(0.0, 0.0, 10.0)
///     .rotate_z(0.01)
///     .rotate_x(0.005);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec4,
    rotation: Vec4, // x=pitch, y=yaw, z=roll
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec4::ZERO,
            rotation: Vec4::ZERO,
        }
    }
}

impl Transform {
    /// Create a new transform with default values (position=0, rotation=0).
    pub fn new() -> Self {
        Self::default()
    }

    /// The spinning-model setup: roll by `angle`, pitch by half of it, then
    /// push the model `distance` units in front of the origin.
    pub fn spinning(angle: f32, distance: f32) -> Self {
        let mut transform = Self::new();
        transform
            .set_rotation_xyz(angle * 0.5, 0.0, angle)
            .set_position_xyz(0.0, 0.0, distance);
        transform
    }

    // ============ Position ============

    pub fn position(&self) -> Vec4 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec4) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec4::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec4) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    // ============ Rotation ============

    pub fn rotation(&self) -> Vec4 {
        self.rotation
    }

    pub fn set_rotation_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.rotation = Vec4::new(x, y, z);
        self
    }

    /// Rotate around the X axis (pitch).
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.rotation.x += angle;
        self
    }

    /// Rotate around the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation.y += angle;
        self
    }

    /// Rotate around the Z axis (roll).
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.rotation.z += angle;
        self
    }

    // ============ Matrix Generation ============

    /// Generate the world matrix.
    ///
    /// Order: RotationZ, then RotationY, then RotationX, then Translation.
    pub fn to_rigid(&self) -> RigidTransform {
        RigidTransform::rotation_z(self.rotation.z)
            .then(&RigidTransform::rotation_y(self.rotation.y))
            .then(&RigidTransform::rotation_x(self.rotation.x))
            .then(&RigidTransform::translation(
                self.position.x,
                self.position.y,
                self.position.z,
            ))
    }
}
