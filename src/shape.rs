//! Immutable, shareable polyhedron geometry.

use crate::error::ShapePoolError;
use crate::vector::Vector3;

/// A triangle's three vertex indices into a [`ShapePool`]'s vertex array.
pub type Triangle = [usize; 3];

/// Read-only, reference-counted geometry shared by any number of
/// [`crate::body::Body`] instances.
///
/// Constructed once via [`ShapePool::new`], which validates that every triangle's
/// vertex indices are in range and that a face normal was supplied per triangle.
/// Nothing past construction re-checks these invariants; the rest of the engine
/// trusts them completely.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePool {
    triangles: Vec<Triangle>,
    local_vertices: Vec<Vector3>,
    local_face_normals: Vec<Vector3>,
}

impl ShapePool {
    /// Builds a pool, validating that triangle indices are in bounds and that the
    /// face normal count matches the triangle count.
    pub fn new(
        triangles: Vec<Triangle>,
        local_vertices: Vec<Vector3>,
        local_face_normals: Vec<Vector3>,
    ) -> Result<ShapePool, ShapePoolError> {
        if triangles.len() != local_face_normals.len() {
            return Err(ShapePoolError::NormalCountMismatch {
                triangle_count: triangles.len(),
                normal_count: local_face_normals.len(),
            });
        }
        for (t, triangle) in triangles.iter().enumerate() {
            for &index in triangle {
                if index >= local_vertices.len() {
                    return Err(ShapePoolError::VertexIndexOutOfBounds {
                        triangle: t,
                        index,
                        vertex_count: local_vertices.len(),
                    });
                }
            }
        }
        Ok(ShapePool {
            triangles,
            local_vertices,
            local_face_normals,
        })
    }

    /// Number of triangles (and face normals).
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of local-frame vertices.
    pub fn vertex_count(&self) -> usize {
        self.local_vertices.len()
    }

    /// The triangles, as index triples into [`ShapePool::local_vertices`].
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Vertices in body-local coordinates.
    pub fn local_vertices(&self) -> &[Vector3] {
        &self.local_vertices
    }

    /// Outward unit face normals in body-local coordinates, one per triangle.
    pub fn local_face_normals(&self) -> &[Vector3] {
        &self.local_face_normals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron_vertices() -> Vec<Vector3> {
        vec![
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, -1.0, -1.0),
            Vector3::new(-1.0, 1.0, -1.0),
            Vector3::new(-1.0, -1.0, 1.0),
        ]
    }

    #[test]
    fn rejects_out_of_bounds_index() {
        let result = ShapePool::new(
            vec![[0, 1, 4]],
            tetrahedron_vertices(),
            vec![Vector3::new(0.0, 0.0, 1.0)],
        );
        assert_eq!(
            result,
            Err(ShapePoolError::VertexIndexOutOfBounds {
                triangle: 0,
                index: 4,
                vertex_count: 4,
            })
        );
    }

    #[test]
    fn rejects_normal_count_mismatch() {
        let result = ShapePool::new(vec![[0, 1, 2], [0, 1, 3]], tetrahedron_vertices(), vec![Vector3::new(0.0, 0.0, 1.0)]);
        assert_eq!(
            result,
            Err(ShapePoolError::NormalCountMismatch {
                triangle_count: 2,
                normal_count: 1,
            })
        );
    }

    #[test]
    fn accepts_well_formed_pool() {
        let pool = ShapePool::new(
            vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]],
            tetrahedron_vertices(),
            vec![
                Vector3::new(0.0, 0.0, 1.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(-1.0, -1.0, -1.0).unit(),
            ],
        );
        assert!(pool.is_ok());
    }
}
