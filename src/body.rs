//! A single rigid body: pose, velocities, mass properties, and the world-space vertex
//! and face-normal caches derived from its pose and shared [`ShapePool`].

use std::sync::Arc;

use crate::matrix::AffineMatrix;
use crate::shape::ShapePool;
use crate::vector::Vector3;

/// A rigid polyhedral body.
///
/// Construction populates the world-space caches with zero vectors; the first
/// [`Body::advance`] call fills them in from the current pose.
#[derive(Debug, Clone)]
pub struct Body {
    pose: AffineMatrix,
    linear_velocity: Vector3,
    angular_speed: f32,
    rotation_axis: Vector3,
    mass: f32,
    moment_of_inertia: [f32; 3],
    world_vertices: Vec<Vector3>,
    world_normals: Vec<Vector3>,
    pool: Arc<ShapePool>,
}

impl Body {
    /// Builds a new body. `rotation_axis` should be unit-length when
    /// `angular_speed > 0`; it is otherwise unused.
    pub fn new(
        pose: AffineMatrix,
        linear_velocity: Vector3,
        angular_speed: f32,
        rotation_axis: Vector3,
        mass: f32,
        moment_of_inertia: [f32; 3],
        pool: Arc<ShapePool>,
    ) -> Body {
        Body {
            pose,
            linear_velocity,
            angular_speed,
            rotation_axis,
            mass,
            moment_of_inertia,
            world_vertices: vec![Vector3::ZERO; pool.vertex_count()],
            world_normals: vec![Vector3::ZERO; pool.triangle_count()],
            pool,
        }
    }

    /// Advances this body's pose by `time_interval` and refreshes the world-space
    /// vertex and normal caches from the shared pool.
    ///
    /// `time_interval` may be negative or fractional; repeated application with
    /// opposite signs is reversible up to floating-point drift.
    pub fn advance(&mut self, time_interval: f32) {
        self.pose.translate(self.linear_velocity * time_interval);
        self.pose
            .rotate(self.angular_speed * time_interval, self.rotation_axis);

        for (world, local) in self
            .world_vertices
            .iter_mut()
            .zip(self.pool.local_vertices())
        {
            *world = self.pose.transform_point(*local);
        }
        for (world, local) in self
            .world_normals
            .iter_mut()
            .zip(self.pool.local_face_normals())
        {
            *world = self.pose.transform_direction(*local);
        }
    }

    /// The body's current pose.
    pub fn pose(&self) -> &AffineMatrix {
        &self.pose
    }

    /// World-space vertices, refreshed by the most recent [`Body::advance`] call.
    pub fn world_vertices(&self) -> &[Vector3] {
        &self.world_vertices
    }

    /// World-space face normals, refreshed by the most recent [`Body::advance`] call.
    pub fn world_normals(&self) -> &[Vector3] {
        &self.world_normals
    }

    /// The shared geometry this body is shaped by.
    pub fn shape(&self) -> &ShapePool {
        &self.pool
    }

    /// Linear velocity, in world coordinates.
    pub fn linear_velocity(&self) -> Vector3 {
        self.linear_velocity
    }

    /// Sets the linear velocity, in world coordinates.
    pub fn set_linear_velocity(&mut self, v: Vector3) {
        self.linear_velocity = v;
    }

    /// Angular speed, always non-negative.
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Rotation axis, in body-local coordinates, unit-length when `angular_speed > 0`.
    pub fn rotation_axis(&self) -> Vector3 {
        self.rotation_axis
    }

    /// Sets the angular velocity from a world-frame axis-angle pair.
    pub(crate) fn set_angular_velocity_body_frame(&mut self, axis_times_speed_body: Vector3) {
        self.angular_speed = axis_times_speed_body.norm();
        if self.angular_speed != 0.0 {
            self.rotation_axis = axis_times_speed_body / self.angular_speed;
        }
    }

    /// Mass.
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Principal moments of inertia, in the body-local frame.
    pub fn moment_of_inertia(&self) -> [f32; 3] {
        self.moment_of_inertia
    }

    /// The angular velocity in world coordinates: `pose.transform_direction(axis *
    /// speed)`.
    pub fn angular_velocity_world(&self) -> Vector3 {
        self.pose
            .transform_direction(self.rotation_axis * self.angular_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::shape::ShapePool;

    fn unit_cube_pool() -> Arc<ShapePool> {
        let v = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        let n = vec![Vector3::new(0.0, 0.0, 1.0)];
        Arc::new(ShapePool::new(vec![[0, 1, 2]], v, n).unwrap())
    }

    #[test]
    fn advance_translates_and_rebuilds_caches() {
        let pool = unit_cube_pool();
        let mut body = Body::new(
            AffineMatrix::identity(),
            Vector3::new(1.0, 0.0, 0.0),
            0.0,
            Vector3::new(0.0, 0.0, 1.0),
            1.0,
            [1.0, 1.0, 1.0],
            pool,
        );
        body.advance(1.0);
        assert_eq!(body.world_vertices()[1], Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(body.world_normals()[0], Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn advance_then_reverse_advance_restores_pose_without_rotation() {
        let pool = unit_cube_pool();
        let mut body = Body::new(
            AffineMatrix::identity(),
            Vector3::new(0.3, -0.2, 0.9),
            0.0,
            Vector3::new(0.0, 0.0, 1.0),
            1.0,
            [1.0, 1.0, 1.0],
            pool,
        );
        body.advance(1.0);
        body.advance(-1.0);
        let t = body.pose().translation();
        assert_relative_eq!(t.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(t.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(t.z, 0.0, epsilon = 1e-6);
    }
}
