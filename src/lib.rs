//! A minimal CPU 3D rendering pipeline.
//!
//! Turns a triangle mesh into an ordered list of flat-shaded, screen-space
//! triangles: world transform, back-face culling and directional lighting in
//! world space, view and projection transforms, perspective divide, viewport
//! mapping and a painter's-algorithm depth sort. Filling those triangles is
//! left to a [`render::DrawSurface`].
//!
//! # Quick Start
//!
//! ```ignore
//! use flatshade::prelude::*;
//!
//! let config = RenderConfig::default();
//! let pipeline = config.pipeline()?;
//! let cube = Mesh::unit_cube().translated(Vec4::new(-0.5, -0.5, -0.5));
//!
//! let input = FrameInput::new(config.camera, Transform::spinning(angle, 3.0));
//! let frame = pipeline.render(&cube, &input);
//!
//! let mut fb = FrameBuffer::new(config.width, config.height);
//! draw_frame(&frame, &mut fb);
//! ```

pub mod camera;
pub mod colors;
pub mod config;
pub mod error;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod screen;
pub mod sorting;
pub mod transform;
pub mod triangle;
pub mod visibility;

// Re-export commonly needed types at crate root for convenience
pub use camera::{Camera, FrameInput};
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use mesh::Mesh;
pub use pipeline::{Frame, FrameStats, Pipeline};
pub use projection::Projection;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flatshade::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::{Camera, FrameInput};

    // Pipeline
    pub use crate::config::RenderConfig;
    pub use crate::light::DirectionalLight;
    pub use crate::pipeline::{Frame, FrameStats, Pipeline};
    pub use crate::projection::Projection;
    pub use crate::screen::Viewport;

    // Geometry
    pub use crate::mesh::{Face, Mesh};
    pub use crate::transform::Transform;
    pub use crate::triangle::{Screen, Triangle};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::rigid::RigidTransform;
    pub use crate::math::vec4::Vec4;

    // Drawing
    pub use crate::render::{draw_frame, DrawSurface, FrameBuffer};
}
