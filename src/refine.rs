//! Bisection refinement of the time of impact for a collision detected after a unit
//! step.

use log::debug;

use crate::body::Body;
use crate::collide::{self, Contact};
use crate::config;

/// A collision pending resolution: the two involved bodies, the recovered contact,
/// and the fraction of the original frame interval still to be applied after
/// resolving it.
#[derive(Debug, Clone, Copy)]
pub struct CollisionContext {
    pub remaining_fraction: f32,
    pub body_a: usize,
    pub body_b: usize,
    pub contact: Contact,
}

/// Bisects the time of impact between `a` and `b`, which must already be known to
/// overlap at their current (post unit-step) poses.
///
/// Moves both bodies back and forth in shrinking steps, recording the most recent
/// contact seen while overlapping, and returns the resulting context. The iteration
/// count is [`config::refine_iterations`].
pub fn refine(a: &mut Body, b: &mut Body, body_a: usize, body_b: usize, initial_contact: Contact) -> CollisionContext {
    let mut remaining_fraction = 1.0f32;
    let mut contact = initial_contact;

    a.advance(-0.5);
    b.advance(-0.5);

    let mut i: u32 = 1;
    let iterations = config::refine_iterations() as u32;
    while i < iterations {
        i += 1;
        let step = 1.0 / 2f32.powi(i as i32);
        match collide::detect(a, b) {
            Some(new_contact) => {
                contact = new_contact;
                a.advance(-step);
                b.advance(-step);
            }
            None => {
                a.advance(step);
                b.advance(step);
                remaining_fraction -= 1.0 / 2f32.powi(i as i32 - 1);
            }
        }
    }

    let final_step = 1.0 / 2f32.powi(i as i32);
    if collide::detect(a, b).is_some() {
        a.advance(-final_step);
        b.advance(-final_step);
    } else {
        remaining_fraction -= final_step;
    }

    debug!(
        "refined collision between body {} and body {}: remaining_fraction = {}",
        body_a, body_b, remaining_fraction
    );

    CollisionContext {
        remaining_fraction,
        body_a,
        body_b,
        contact,
    }
}
