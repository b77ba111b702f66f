//! CPU color buffer.
//!
//! Wraps a 1D ARGB8888 buffer with width/height metadata. There is no depth
//! buffer; occlusion comes entirely from the order triangles are filled in.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use super::rasterizer;
use super::DrawSurface;
use crate::colors;
use crate::error::Result;
use crate::triangle::{Screen, Triangle};

/// Row-major offset of (x, y); with `x = 0, y = height` it is the pixel count.
#[inline]
fn buffer_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; buffer_index(width, 0, height)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[buffer_index(self.width, x as u32, y as u32)] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[buffer_index(self.width, x as u32, y as u32)])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(colors::to_rgba(self.color_buffer[buffer_index(self.width, x, y)]))
        })
    }

    /// Write the buffer as an image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}

impl DrawSurface for FrameBuffer {
    fn fill_triangle(&mut self, triangle: &Triangle<Screen>, color: u32) {
        rasterizer::fill_triangle(self, triangle, color);
    }
}
