//! Edge function triangle fill.
//!
//! For every pixel center in the triangle's bounding box, three edge functions
//! are evaluated. The pixel is inside when all three share the sign of the
//! triangle's signed area, which handles both windings.
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```

use super::framebuffer::FrameBuffer;
use crate::math::vec4::Vec4;
use crate::triangle::{Screen, Triangle};

#[inline]
fn edge_function(a: Vec4, b: Vec4, px: f32, py: f32) -> f32 {
    (px - a.x) * (b.y - a.y) - (py - a.y) * (b.x - a.x)
}

/// Fill a screen-space triangle with a flat color. Pixels outside the buffer are skipped.
pub fn fill_triangle(buffer: &mut FrameBuffer, triangle: &Triangle<Screen>, color: u32) {
    let [v0, v1, v2] = *triangle.points();

    let area = edge_function(v0, v1, v2.x, v2.y);
    if area.abs() < f32::EPSILON {
        return; // Degenerate on screen
    }

    // Bounding box, clipped to the buffer
    let min_x = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as i32;
    let max_x = v0.x.max(v1.x).max(v2.x).ceil().min(buffer.width() as f32 - 1.0) as i32;
    let min_y = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as i32;
    let max_y = v0.y.max(v1.y).max(v2.y).ceil().min(buffer.height() as f32 - 1.0) as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            // Sample at pixel center
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let w0 = edge_function(v1, v2, px, py);
            let w1 = edge_function(v2, v0, px, py);
            let w2 = edge_function(v0, v1, px, py);

            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };

            if inside {
                buffer.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    const RED: u32 = 0xFFFF0000;

    fn screen_triangle(points: [(f32, f32); 3]) -> Triangle<Screen> {
        Triangle::from_points(points.map(|(x, y)| Vec4::new(x, y, 0.5)), Some(255.0))
    }

    #[test]
    fn fills_interior_only() {
        let mut fb = FrameBuffer::new(10, 10);
        fill_triangle(&mut fb, &screen_triangle([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]), RED);

        assert_eq!(fb.get_pixel(1, 1), Some(RED));
        assert_eq!(fb.get_pixel(9, 9), Some(colors::BACKGROUND));
    }

    #[test]
    fn both_windings_fill() {
        let mut cw = FrameBuffer::new(10, 10);
        let mut ccw = FrameBuffer::new(10, 10);
        fill_triangle(&mut cw, &screen_triangle([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]), RED);
        fill_triangle(&mut ccw, &screen_triangle([(0.0, 0.0), (0.0, 10.0), (10.0, 0.0)]), RED);
        assert_eq!(cw.pixels(), ccw.pixels());
    }

    #[test]
    fn offscreen_triangles_do_not_panic() {
        let mut fb = FrameBuffer::new(10, 10);
        fill_triangle(&mut fb, &screen_triangle([(-50.0, -50.0), (-20.0, -50.0), (-30.0, -10.0)]), RED);
        fill_triangle(&mut fb, &screen_triangle([(5.0, 5.0), (500.0, 5.0), (5.0, 500.0)]), RED);
        assert_eq!(fb.get_pixel(0, 0), Some(colors::BACKGROUND));
        assert_eq!(fb.get_pixel(9, 9), Some(RED));
    }

    #[test]
    fn later_fills_paint_over_earlier_ones() {
        let mut fb = FrameBuffer::new(10, 10);
        let tri = screen_triangle([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        fill_triangle(&mut fb, &tri, RED);
        fill_triangle(&mut fb, &tri, colors::gray(128.0));
        assert_eq!(fb.get_pixel(1, 1), Some(colors::gray(128.0)));
    }
}
