//! Per-frame rendering pipeline.
//!
//! The [`Pipeline`] holds the session-fixed state (projection matrix, light,
//! viewport). [`Pipeline::render`] runs one frame to completion:
//!
//! ```text
//! model --world--> world --cull + shade--> world --view--> view --projection--> clip
//!       --divide + viewport--> screen --depth sort--> Frame
//! ```
//!
//! Culling and lighting happen in world space, before any projective distortion.

use log::{debug, trace};

use crate::camera::FrameInput;
use crate::light::DirectionalLight;
use crate::math::mat4::Mat4;
use crate::mesh::Mesh;
use crate::projection::Projection;
use crate::screen::Viewport;
use crate::sorting;
use crate::triangle::{Screen, Triangle};
use crate::visibility;

/// Counters describing what happened to a mesh's triangles in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles in the source mesh.
    pub total: usize,
    /// Dropped by back-face culling.
    pub culled: usize,
    /// Dropped because a vertex reached the camera's eye plane (w ~ 0).
    pub behind_eye: usize,
    /// Handed to the drawing surface.
    pub drawn: usize,
}

/// Output of one frame: shaded screen-space triangles, farthest first.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    triangles: Vec<Triangle<Screen>>,
    stats: FrameStats,
}

impl Frame {
    pub(crate) fn new(triangles: Vec<Triangle<Screen>>, stats: FrameStats) -> Self {
        Self { triangles, stats }
    }

    pub fn triangles(&self) -> &[Triangle<Screen>] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle<Screen>> {
        self.triangles
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

pub struct Pipeline {
    projection: Projection,
    projection_matrix: Mat4,
    light: DirectionalLight,
    viewport: Viewport,
}

impl Pipeline {
    pub fn new(projection: Projection, light: DirectionalLight, viewport: Viewport) -> Self {
        Self {
            projection_matrix: projection.matrix(),
            projection,
            light,
            viewport,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Renders one frame of `mesh` as seen through `input`.
    pub fn render(&self, mesh: &Mesh, input: &FrameInput) -> Frame {
        let world = input.model.to_rigid();
        let view = input.camera.view();
        let camera_position = input.camera.position();

        let mut stats = FrameStats {
            total: mesh.len(),
            ..FrameStats::default()
        };
        let mut triangles = Vec::with_capacity(mesh.len());

        for (index, triangle) in mesh.triangles().enumerate() {
            // Model Space --> World Space
            let world_triangle = triangle.to_world(&world);

            let normal = world_triangle.normal();
            if !visibility::is_visible(normal, &world_triangle, camera_position) {
                stats.culled += 1;
                continue;
            }
            let shaded = world_triangle.with_shade(self.light.intensity(normal));

            // World Space --> View Space --> Clip Space
            let clip = shaded.to_view(&view).to_clip(&self.projection_matrix);

            match clip.to_screen(&self.viewport) {
                Some(screen) => triangles.push(screen),
                None => {
                    trace!("triangle {index} reaches the eye plane, skipped");
                    stats.behind_eye += 1;
                }
            }
        }

        sorting::sort_back_to_front(&mut triangles);
        stats.drawn = triangles.len();

        debug!(
            "frame: {} triangles, {} culled, {} behind eye, {} drawn",
            stats.total, stats.culled, stats.behind_eye, stats.drawn
        );

        Frame::new(triangles, stats)
    }
}
