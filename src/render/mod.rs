//! Drawing side of the renderer.
//!
//! The pipeline stops at an ordered list of shaded screen triangles. A
//! [`DrawSurface`] is anything that can fill one of those with a color; the
//! CPU [`FrameBuffer`] is the implementation this crate ships.

mod framebuffer;
mod rasterizer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::fill_triangle;

use crate::colors;
use crate::pipeline::Frame;
use crate::triangle::{Screen, Triangle};

/// Contract with whatever draws the output: fill this triangle with this color.
pub trait DrawSurface {
    fn fill_triangle(&mut self, triangle: &Triangle<Screen>, color: u32);
}

/// Issues one fill per triangle, in the frame's back-to-front order.
pub fn draw_frame<D: DrawSurface + ?Sized>(frame: &Frame, surface: &mut D) {
    for triangle in frame.triangles() {
        let color = colors::gray(triangle.shade().unwrap_or(0.0));
        surface.fill_triangle(triangle, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use crate::pipeline::FrameStats;

    #[derive(Default)]
    struct Recorder {
        fills: Vec<(f32, u32)>,
    }

    impl DrawSurface for Recorder {
        fn fill_triangle(&mut self, triangle: &Triangle<Screen>, color: u32) {
            self.fills.push((triangle.avg_depth(), color));
        }
    }

    #[test]
    fn draws_in_frame_order_with_gray_shades() {
        let tri = |z: f32, shade: f32| {
            Triangle::from_points([Vec4::new(0.0, 0.0, z); 3], Some(shade))
        };
        let frame = Frame::new(vec![tri(0.9, 255.0), tri(0.2, 0.0)], FrameStats::default());

        let mut recorder = Recorder::default();
        draw_frame(&frame, &mut recorder);

        assert_eq!(recorder.fills.len(), 2);
        assert_eq!(recorder.fills[0].1, 0xFFFFFFFF);
        assert_eq!(recorder.fills[1].1, 0xFF000000);
        assert!(recorder.fills[0].0 > recorder.fills[1].0);
    }
}
