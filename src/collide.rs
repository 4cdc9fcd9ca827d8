//! Triangle-pair intersection test: the detector at the heart of this engine.

use log::trace;

use crate::body::Body;
use crate::vector::Vector3;

/// A detected contact: a world-space point and a unit world-space normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub point: Vector3,
    pub normal: Vector3,
}

/// Tests two bodies for a collision, returning the first contact found.
///
/// Iterates triangle pairs A-major, B-minor, and returns as soon as one pair
/// overlaps — this is a first-hit-wins test, not an exhaustive contact manifold.
pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    for i in 0..a.shape().triangle_count() {
        for j in 0..b.shape().triangle_count() {
            if let Some(contact) = detect_triangle_pair(a, i, b, j) {
                trace!(
                    "collision detected: triangle {} of body A against triangle {} of body B at {:?}",
                    i, j, contact.point
                );
                return Some(contact);
            }
        }
    }
    None
}

fn triangle_vertices(body: &Body, triangle_index: usize) -> [Vector3; 3] {
    let indices = body.shape().triangles()[triangle_index];
    let vertices = body.world_vertices();
    [vertices[indices[0]], vertices[indices[1]], vertices[indices[2]]]
}

/// Finds the index of the triangle vertex separated from the other two by the other
/// triangle's plane, given the three signed distances to that plane.
///
/// Returns `None` when all three vertices lie on the same side (no collision).
fn separate_vertex(distance: [f32; 3]) -> Option<usize> {
    if distance[0] < 0.0 {
        if distance[1] < 0.0 {
            if distance[2] < 0.0 {
                None
            } else {
                Some(2)
            }
        } else if distance[2] < 0.0 {
            Some(1)
        } else {
            Some(0)
        }
    } else if distance[1] < 0.0 {
        if distance[2] < 0.0 {
            Some(0)
        } else {
            Some(1)
        }
    } else if distance[2] < 0.0 {
        Some(2)
    } else {
        None
    }
}

fn key_dimension(line_of_intersection: Vector3) -> usize {
    if line_of_intersection.x.abs() < line_of_intersection.y.abs() {
        if line_of_intersection.y.abs() < line_of_intersection.z.abs() {
            2
        } else {
            1
        }
    } else if line_of_intersection.x.abs() < line_of_intersection.z.abs() {
        2
    } else {
        0
    }
}

/// Interpolates the two edges leaving the lone vertex to find where a triangle's
/// boundary crosses the other triangle's plane.
fn line_segment(vertices: [Vector3; 3], distance: [f32; 3], separate: usize) -> [Vector3; 2] {
    let next = (separate + 1) % 3;
    let prev = (separate + 2) % 3;
    let d_sep = distance[separate].abs();
    let d_next = distance[next].abs();
    let d_prev = distance[prev].abs();
    [
        (vertices[separate] * d_next + vertices[next] * d_sep) / (d_sep + d_next),
        (vertices[separate] * d_prev + vertices[prev] * d_sep) / (d_sep + d_prev),
    ]
}

/// True iff `a` lies strictly between `p` and `q` on the key dimension, regardless of
/// the order of `p` and `q`.
fn strictly_between(a: f32, p: f32, q: f32) -> bool {
    (a <= p) ^ (a < q)
}

fn detect_triangle_pair(a: &Body, face_a: usize, b: &Body, face_b: usize) -> Option<Contact> {
    let verts_a = triangle_vertices(a, face_a);
    let verts_b = triangle_vertices(b, face_b);
    let normal_a = a.world_normals()[face_a];
    let normal_b = b.world_normals()[face_b];

    let distance_a = [
        (verts_b[0] - verts_a[0]).dot(normal_b),
        (verts_b[0] - verts_a[1]).dot(normal_b),
        (verts_b[0] - verts_a[2]).dot(normal_b),
    ];
    let separate_a = separate_vertex(distance_a)?;

    let distance_b = [
        (verts_a[0] - verts_b[0]).dot(normal_a),
        (verts_a[0] - verts_b[1]).dot(normal_a),
        (verts_a[0] - verts_b[2]).dot(normal_a),
    ];
    let separate_b = separate_vertex(distance_b)?;

    let line_of_intersection = normal_a.cross(normal_b);
    let key_dim = key_dimension(line_of_intersection);

    let segment_a = line_segment(verts_a, distance_a, separate_a);
    let segment_b = line_segment(verts_b, distance_b, separate_b);

    let k = |v: Vector3| v.component(key_dim);

    if strictly_between(k(segment_a[0]), k(segment_b[0]), k(segment_b[1])) {
        if strictly_between(k(segment_a[1]), k(segment_b[0]), k(segment_b[1])) {
            Some(Contact {
                point: verts_a[separate_a],
                normal: normal_b,
            })
        } else if strictly_between(k(segment_b[0]), k(segment_a[0]), k(segment_a[1])) {
            let next_a = (separate_a + 1) % 3;
            let next_b = (separate_b + 1) % 3;
            Some(Contact {
                point: segment_a[0],
                normal: (verts_a[separate_a] - verts_a[next_a])
                    .cross(verts_b[separate_b] - verts_b[next_b])
                    .unit(),
            })
        } else {
            let next_a = (separate_a + 1) % 3;
            let prev_b = (separate_b + 2) % 3;
            Some(Contact {
                point: segment_a[0],
                normal: (verts_a[separate_a] - verts_a[next_a])
                    .cross(verts_b[separate_b] - verts_b[prev_b])
                    .unit(),
            })
        }
    } else if strictly_between(k(segment_a[1]), k(segment_b[0]), k(segment_b[1])) {
        if strictly_between(k(segment_b[0]), k(segment_a[0]), k(segment_a[1])) {
            let prev_a = (separate_a + 2) % 3;
            let next_b = (separate_b + 1) % 3;
            Some(Contact {
                point: segment_a[1],
                normal: (verts_a[separate_a] - verts_a[prev_a])
                    .cross(verts_b[separate_b] - verts_b[next_b])
                    .unit(),
            })
        } else {
            let prev_a = (separate_a + 2) % 3;
            let prev_b = (separate_b + 2) % 3;
            Some(Contact {
                point: segment_a[1],
                normal: (verts_a[separate_a] - verts_a[prev_a])
                    .cross(verts_b[separate_b] - verts_b[prev_b])
                    .unit(),
            })
        }
    } else if strictly_between(k(segment_b[0]), k(segment_a[0]), k(segment_a[1])) {
        Some(Contact {
            point: verts_b[separate_b],
            normal: normal_a,
        })
    } else {
        None
    }
}
