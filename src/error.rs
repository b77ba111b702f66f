//! Crate-wide error type.

use thiserror::Error;

use crate::math::vec4::Vec4;

#[derive(Debug, Error)]
pub enum Error {
    /// A row list handed to [`crate::math::mat4::Mat4::try_from_rows`] was not 4x4.
    #[error("expected a 4x4 matrix, got {rows} rows with {cols} columns")]
    MatrixShape { rows: usize, cols: usize },

    #[error("matrix is not a rigid transform (rotation + translation only)")]
    NotRigid,

    #[error("invalid projection: {0}")]
    InvalidProjection(String),

    /// The look direction is zero, non-finite, or parallel to the up hint.
    #[error("camera look direction {look_dir:?} cannot be oriented with up {up:?}")]
    DegenerateCamera { look_dir: Vec4, up: Vec4 },

    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndex {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("failed to load OBJ file: {0}")]
    ObjLoad(#[from] tobj::LoadError),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
