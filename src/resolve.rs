//! Perfectly elastic impulse resolution at a detected contact.

use log::debug;

use crate::body::Body;
use crate::collide::Contact;
use crate::vector::{div_componentwise, Vector3};

/// Applies a perfectly elastic collision impulse to `a` and `b` at `contact`,
/// updating both bodies' linear and angular velocities in place.
///
/// There is no restitution coefficient, friction, or positional correction: this is
/// the textbook elastic-impulse formula, with angular terms approximated by dividing
/// the world-frame angular impulse componentwise by each body's body-frame principal
/// moments of inertia (the inertia tensor is not rotated into world frame first).
pub fn resolve_elastic(a: &mut Body, b: &mut Body, contact: &Contact) {
    let normal = contact.normal;
    let r_a = contact.point - a.pose().translation();
    let r_b = contact.point - b.pose().translation();

    let mut angular_velocity_a = a.angular_velocity_world();
    let mut angular_velocity_b = b.angular_velocity_world();

    let velocity_addend_a = normal / a.mass();
    let velocity_addend_b = -normal / b.mass();

    let cross_a = r_a.cross(normal);
    let cross_b = r_b.cross(normal);

    let angular_velocity_addend_a = div_componentwise(cross_a, a.moment_of_inertia());
    let angular_velocity_addend_b = div_componentwise(-cross_b, b.moment_of_inertia());

    let relative_normal_speed = a.linear_velocity().dot(normal) - b.linear_velocity().dot(normal)
        + angular_velocity_a.dot(cross_a)
        - angular_velocity_b.dot(cross_b);

    let denominator = normal.dot(velocity_addend_a) - normal.dot(velocity_addend_b)
        + cross_a.dot(angular_velocity_addend_a)
        - cross_b.dot(angular_velocity_addend_b);

    let impulse = -2.0 * relative_normal_speed / denominator;

    angular_velocity_a += angular_velocity_addend_a * impulse;
    angular_velocity_b += angular_velocity_addend_b * impulse;

    a.set_linear_velocity(a.linear_velocity() + velocity_addend_a * impulse);
    b.set_linear_velocity(b.linear_velocity() + velocity_addend_b * impulse);

    let body_frame_a = a.pose().inverse_transform_direction(angular_velocity_a);
    let body_frame_b = b.pose().inverse_transform_direction(angular_velocity_b);
    a.set_angular_velocity_body_frame(body_frame_a);
    b.set_angular_velocity_body_frame(body_frame_b);

    debug!("resolved collision at {:?}: impulse magnitude = {}", contact.point, impulse);
}
