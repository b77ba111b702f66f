//! Model-space triangle meshes.
//!
//! A [`Mesh`] owns its vertices in one arena and stores faces as index
//! triples into it. Triangles handed to the pipeline are owned copies, so no
//! stage can observe another stage's edits through a shared vertex.

use std::io::BufRead;
use std::path::Path;

use log::{info, warn};

use crate::error::{Error, Result};
use crate::math::vec4::Vec4;
use crate::triangle::{Model, Triangle};

/// A triangle defined by three vertices.
/// The members a, b, and c are 0-based indices into the vertex arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Face {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }
}

pub const CUBE_VERTICES: [Vec4; 8] = [
    Vec4::new(0.0, 0.0, 0.0),
    Vec4::new(0.0, 1.0, 0.0),
    Vec4::new(1.0, 1.0, 0.0),
    Vec4::new(1.0, 0.0, 0.0),
    Vec4::new(1.0, 1.0, 1.0),
    Vec4::new(1.0, 0.0, 1.0),
    Vec4::new(0.0, 1.0, 1.0),
    Vec4::new(0.0, 0.0, 1.0),
];

// Every face is wound so that (p1 - p0) x (p2 - p0) points out of the cube.
pub const CUBE_FACES: [Face; 12] = [
    // South (z = 0)
    Face::new(0, 1, 2),
    Face::new(0, 2, 3),
    // East (x = 1)
    Face::new(3, 2, 4),
    Face::new(3, 4, 5),
    // North (z = 1)
    Face::new(5, 4, 6),
    Face::new(5, 6, 7),
    // West (x = 0)
    Face::new(7, 6, 1),
    Face::new(7, 1, 0),
    // Top (y = 1)
    Face::new(1, 6, 4),
    Face::new(1, 4, 2),
    // Bottom (y = 0)
    Face::new(5, 7, 0),
    Face::new(5, 0, 3),
];

fn obj_load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec4>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Builds a mesh from a vertex arena and faces indexing into it.
    ///
    /// Faces with an out-of-range index are rejected. Zero-area faces are
    /// dropped with a warning, since their normal is undefined.
    pub fn new(vertices: Vec<Vec4>, faces: Vec<Face>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            for index in [face.a, face.b, face.c] {
                if index as usize >= vertex_count {
                    return Err(Error::FaceIndex {
                        face: face_index,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        let total = faces.len();
        let faces: Vec<Face> = faces
            .into_iter()
            .filter(|face| {
                let p0 = vertices[face.a as usize];
                let p1 = vertices[face.b as usize];
                let p2 = vertices[face.c as usize];
                let cross = (p1 - p0).cross(p2 - p0);
                let len_sq = cross.dot(cross);
                len_sq > 0.0 && len_sq.is_finite()
            })
            .collect();

        if faces.len() < total {
            warn!("dropped {} degenerate faces", total - faces.len());
        }

        Ok(Self { vertices, faces })
    }

    /// Axis-aligned cube spanning 0..1 on every axis.
    pub fn unit_cube() -> Self {
        Self {
            vertices: CUBE_VERTICES.to_vec(),
            faces: CUBE_FACES.to_vec(),
        }
    }

    /// Loads every object and group of a Wavefront OBJ file into one mesh.
    ///
    /// Polygons are triangulated on load. Normals, texture coordinates and
    /// materials are ignored.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(path, &obj_load_options())?;

        let loaded = Self::from_models(models)?;
        info!(
            "loaded {} ({} vertices, {} triangles)",
            path.display(),
            loaded.vertices.len(),
            loaded.faces.len()
        );
        Ok(loaded)
    }

    /// Like [`Mesh::from_obj`], reading OBJ text from `reader`.
    ///
    /// `mtllib` references are not followed.
    pub fn from_obj_reader<R: BufRead>(reader: &mut R) -> Result<Self> {
        let (models, _materials) = tobj::load_obj_buf(reader, &obj_load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Self::from_models(models)
    }

    /// Appends each model to one vertex arena, offsetting its indices by the
    /// vertices already loaded.
    fn from_models(models: Vec<tobj::Model>) -> Result<Self> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in models {
            let base = vertices.len() as u32;
            let mesh = model.mesh;
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec4::new(p[0], p[1], p[2])),
            );
            faces.extend(
                mesh.indices
                    .chunks_exact(3)
                    .map(|f| Face::new(base + f[0], base + f[1], base + f[2])),
            );
        }

        Self::new(vertices, faces)
    }

    /// Returns a copy with every vertex shifted by `offset`.
    pub fn translated(&self, offset: Vec4) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| v + offset).collect(),
            faces: self.faces.clone(),
        }
    }

    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterates over the faces as owned model-space triangles, in face order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle<Model>> + '_ {
        self.faces.iter().map(|face| {
            Triangle::new(
                self.vertices[face.a as usize],
                self.vertices[face.b as usize],
                self.vertices[face.c as usize],
            )
        })
    }
}
