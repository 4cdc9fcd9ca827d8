//! # rigid3d
//!
//! A small 3D rigid-body dynamics engine for convex polyhedral bodies.
//!
//! Bodies are convex polyhedra described by a shared, immutable [`ShapePool`]. A
//! [`Scene`] owns a flat registry of [`Body`] instances and steps them forward one
//! frame at a time: every body advances, every pair is tested for a collision, a
//! detected collision is bisected back toward its true time of impact, and impulses
//! are resolved in time order.
//!
//! Collision response is perfectly elastic — no friction, no restitution
//! coefficient, no positional correction. Mass and inertia are always supplied by
//! the caller; this crate never derives them from geometry.
//!
//! ```
//! use std::sync::Arc;
//! use rigid3d::{AffineMatrix, Body, ShapePool, Scene, Vector3};
//!
//! let vertices = vec![
//!     Vector3::new(1.0, 1.0, 1.0),
//!     Vector3::new(1.0, -1.0, -1.0),
//!     Vector3::new(-1.0, 1.0, -1.0),
//!     Vector3::new(-1.0, -1.0, 1.0),
//! ];
//! let triangles = vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
//! let normals = vec![
//!     Vector3::new(0.0, 0.0, -1.0),
//!     Vector3::new(0.0, -1.0, 0.0),
//!     Vector3::new(-1.0, 0.0, 0.0),
//!     Vector3::new(1.0, 1.0, 1.0).unit(),
//! ];
//! let pool = Arc::new(ShapePool::new(triangles, vertices, normals).unwrap());
//!
//! let mut scene = Scene::new();
//! scene.add(Body::new(
//!     AffineMatrix::identity(),
//!     Vector3::new(0.01, 0.0, 0.0),
//!     0.0,
//!     Vector3::new(0.0, 0.0, 1.0),
//!     1.0,
//!     [1.0, 1.0, 1.0],
//!     pool,
//! ));
//! scene.step();
//! ```

#![deny(missing_debug_implementations, unsafe_code)]

pub mod body;
pub mod collide;
pub mod config;
pub mod error;
pub mod matrix;
pub mod refine;
pub mod resolve;
pub mod scene;
pub mod shape;
pub mod vector;

pub use body::Body;
pub use collide::Contact;
pub use config::{refine_iterations, set_refine_iterations};
pub use error::ShapePoolError;
pub use matrix::AffineMatrix;
pub use refine::CollisionContext;
pub use scene::{BodyHandle, Scene};
pub use shape::ShapePool;
pub use vector::Vector3;
