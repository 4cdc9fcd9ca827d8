//! The crate's sole typed error, raised only at [`crate::shape::ShapePool`]
//! construction.
//!
//! Everything past that boundary is a contract the host is trusted to uphold; the
//! simulation loop itself has no fallible operations.

use thiserror::Error;

/// Why a [`crate::shape::ShapePool`] could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapePoolError {
    /// A triangle referenced a vertex index outside the supplied vertex array.
    #[error("triangle {triangle} references vertex index {index}, but only {vertex_count} vertices were supplied")]
    VertexIndexOutOfBounds {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },

    /// The number of supplied face normals did not match the number of triangles.
    #[error("{triangle_count} triangles were supplied but {normal_count} face normals")]
    NormalCountMismatch {
        triangle_count: usize,
        normal_count: usize,
    },
}
