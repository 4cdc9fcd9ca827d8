//! Registry of bodies and the per-frame stepping loop that ties detection,
//! refinement, and resolution together.

use log::info;

use crate::body::Body;
use crate::collide;
use crate::refine::{self, CollisionContext};
use crate::resolve;

/// A handle to a [`Body`] registered with a [`Scene`], returned by [`Scene::add`].
///
/// Stable for the lifetime of the body: the scene never reassigns or reuses a
/// handle's underlying index while the body remains registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(usize);

/// An explicit registry of rigid bodies, stepped one frame at a time.
///
/// Unlike an entity-component-system world, a `Scene` owns its bodies directly in a
/// flat `Vec`; there is no component storage indirection and no external scheduler.
#[derive(Debug, Default)]
pub struct Scene {
    bodies: Vec<Body>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Scene {
        Scene { bodies: Vec::new() }
    }

    /// Registers a body with the scene, returning a handle to it.
    pub fn add(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene has no registered bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Looks up a body by handle.
    pub fn body(&self, handle: BodyHandle) -> &Body {
        &self.bodies[handle.0]
    }

    /// Looks up a body by handle, mutably.
    pub fn body_mut(&mut self, handle: BodyHandle) -> &mut Body {
        &mut self.bodies[handle.0]
    }

    /// Advances every registered body by one frame, detecting, refining, and
    /// resolving all collisions that occur during it.
    ///
    /// Order of operations: advance every body by the full frame, detect and
    /// immediately refine every colliding pair, stable-sort the recovered contexts
    /// by ascending impact time, then resolve and re-advance each pair in that order.
    /// Collisions produced by a post-impulse re-advance are not re-detected within
    /// the same frame.
    pub fn step(&mut self) {
        for body in &mut self.bodies {
            body.advance(1.0);
        }

        let mut contexts: Vec<CollisionContext> = Vec::new();
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let contact = {
                    let (left, right) = self.bodies.split_at(j);
                    collide::detect(&left[i], &right[0])
                };
                if let Some(contact) = contact {
                    let (a, b) = self.pair_mut(i, j);
                    contexts.push(refine::refine(a, b, i, j, contact));
                }
            }
        }

        contexts.sort_by(|x, y| x.remaining_fraction.partial_cmp(&y.remaining_fraction).unwrap());

        if !contexts.is_empty() {
            info!("{} bodies, {} collisions resolved", self.bodies.len(), contexts.len());
        }

        for context in &contexts {
            let (a, b) = self.pair_mut(context.body_a, context.body_b);
            resolve::resolve_elastic(a, b, &context.contact);
            a.advance(context.remaining_fraction);
            b.advance(context.remaining_fraction);
        }
    }

    /// Returns mutable references to two distinct bodies by index.
    ///
    /// Panics if `i == j`; callers only ever invoke this with the distinct indices
    /// of an unordered body pair.
    fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        assert_ne!(i, j);
        if i < j {
            let (left, right) = self.bodies.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = self.bodies.split_at_mut(i);
            (&mut right[0], &mut left[j])
        }
    }
}
