//! Triangles tagged with the coordinate space their vertices live in.
//!
//! The space marker is a zero-sized type parameter. The only way to move a
//! triangle from one space to the next is through the stage methods below, which
//! transform all three vertices together, so a triangle can never end up holding
//! vertices from different pipeline stages.

use std::marker::PhantomData;

use crate::math::mat4::Mat4;
use crate::math::rigid::RigidTransform;
use crate::math::vec4::Vec4;

/// Marker for a coordinate space.
pub trait Space: Copy + std::fmt::Debug {}

/// Coordinates as authored in the mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Model;
/// After object placement and animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct World;
/// Relative to the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View;
/// After the projection matrix, before the perspective divide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clip;
/// Pixel coordinates; z keeps the normalized depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen;

impl Space for Model {}
impl Space for World {}
impl Space for View {}
impl Space for Clip {}
impl Space for Screen {}

/// An ordered triple of vertices plus an optional flat shade.
///
/// Winding order decides the normal direction and is preserved by every stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle<S: Space> {
    points: [Vec4; 3],
    shade: Option<f32>,
    space: PhantomData<S>,
}

impl<S: Space> Triangle<S> {
    pub(crate) fn from_points(points: [Vec4; 3], shade: Option<f32>) -> Self {
        Self {
            points,
            shade,
            space: PhantomData,
        }
    }

    pub fn points(&self) -> &[Vec4; 3] {
        &self.points
    }

    /// Light intensity in `0.0..=MAX_BRIGHTNESS`, once it has been computed.
    pub fn shade(&self) -> Option<f32> {
        self.shade
    }

    /// Attaches the shade. It travels with the triangle through later stages.
    pub fn with_shade(self, intensity: f32) -> Self {
        Self {
            shade: Some(intensity),
            ..self
        }
    }

    /// Mean z of the three vertices.
    pub fn avg_depth(&self) -> f32 {
        (self.points[0].z + self.points[1].z + self.points[2].z) / 3.0
    }

    fn map<T: Space>(&self, matrix: &Mat4) -> Triangle<T> {
        Triangle::from_points(self.points.map(|p| p * *matrix), self.shade)
    }
}

impl Triangle<Model> {
    pub fn new(p0: Vec4, p1: Vec4, p2: Vec4) -> Self {
        Self::from_points([p0, p1, p2], None)
    }

    /// Model space -> world space.
    pub fn to_world(&self, world: &RigidTransform) -> Triangle<World> {
        self.map(world.matrix())
    }
}

impl Triangle<World> {
    /// Unit face normal, `normalize((p1 - p0) x (p2 - p0))`.
    pub fn normal(&self) -> Vec4 {
        let [p0, p1, p2] = self.points;
        (p1 - p0).cross(p2 - p0).normalize()
    }

    /// World space -> view space.
    pub fn to_view(&self, view: &RigidTransform) -> Triangle<View> {
        self.map(view.matrix())
    }
}

impl Triangle<View> {
    /// View space -> clip space. The divide by w happens in [`crate::screen`].
    pub fn to_clip(&self, projection: &Mat4) -> Triangle<Clip> {
        self.map(projection)
    }
}
