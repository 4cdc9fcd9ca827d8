use std::sync::Arc;

use rigid3d::{AffineMatrix, Body, Scene, ShapePool, Vector3};

fn regular_tetrahedron(edge_length: f32) -> Arc<ShapePool> {
    let h = edge_length / std::f32::consts::SQRT_2;
    let vertices = vec![
        Vector3::new(h, h, h),
        Vector3::new(h, -h, -h),
        Vector3::new(-h, h, -h),
        Vector3::new(-h, -h, h),
    ];
    let triangles = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
    let normals = triangles
        .iter()
        .map(|&[i, j, k]| {
            let n = (vertices[j] - vertices[i])
                .cross(vertices[k] - vertices[i])
                .unit();
            if n.dot(Vector3::ZERO - vertices[i]) > 0.0 {
                -n
            } else {
                n
            }
        })
        .collect();
    Arc::new(ShapePool::new(triangles, vertices, normals).unwrap())
}

pub fn main() {
    env_logger::init();

    let pool = regular_tetrahedron(6.0);

    let mut scene = Scene::new();

    let mut pose_a = AffineMatrix::identity();
    pose_a.translate(Vector3::new(0.01, 0.5, 0.0));
    let a = scene.add(Body::new(
        pose_a,
        Vector3::ZERO,
        0.0,
        Vector3::new(0.0, 0.0, 1.0),
        9.0,
        [1.08, 1.08, 1.08],
        pool.clone(),
    ));

    let mut pose_b = AffineMatrix::identity();
    pose_b.translate(Vector3::new(0.0, -2.0, 0.0));
    let b = scene.add(Body::new(
        pose_b,
        Vector3::ZERO,
        0.0,
        Vector3::new(0.0, 0.0, 1.0),
        1.0,
        [0.12, 0.12, 0.12],
        pool,
    ));

    for frame in 0..200 {
        let towards = (scene.body(b).pose().translation() - scene.body(a).pose().translation()).unit();
        scene.body_mut(a).set_linear_velocity(scene.body(a).linear_velocity() + towards * (0.001 / 9.0));
        scene.body_mut(b).set_linear_velocity(scene.body(b).linear_velocity() - towards * 0.001);

        scene.step();

        println!(
            "frame {}: a at {:?}, b at {:?}",
            frame,
            scene.body(a).pose().translation(),
            scene.body(b).pose().translation()
        );
    }
}
