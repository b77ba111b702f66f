//! Session configuration.
//!
//! [`RenderConfig`] gathers the values that stay fixed for a rendering session
//! and derives the validated pipeline pieces from them.

use crate::camera::Camera;
use crate::error::Result;
use crate::light::DirectionalLight;
use crate::math::vec4::Vec4;
use crate::pipeline::Pipeline;
use crate::projection::Projection;
use crate::screen::Viewport;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output surface width in pixels.
    pub width: u32,
    /// Output surface height in pixels.
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Direction of the single directional light; normalized on use.
    pub light_direction: Vec4,
    /// Initial camera; navigation may move it between frames.
    pub camera: Camera,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fov_degrees: 90.0,
            near: 0.1,
            far: 1000.0,
            light_direction: Vec4::new(0.0, 0.0, -1.0),
            camera: Camera::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn projection(&self) -> Result<Projection> {
        Projection::from_degrees(self.fov_degrees, self.width, self.height, self.near, self.far)
    }

    pub fn viewport(&self) -> Result<Viewport> {
        Viewport::new(self.width, self.height)
    }

    pub fn light(&self) -> DirectionalLight {
        DirectionalLight::new(self.light_direction)
    }

    pub fn pipeline(&self) -> Result<Pipeline> {
        Ok(Pipeline::new(self.projection()?, self.light(), self.viewport()?))
    }
}
