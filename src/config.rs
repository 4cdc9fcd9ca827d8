//! Process-wide tunables.
//!
//! The only knob this engine exposes globally: the number of bisection iterations
//! the [`crate::refine`] step performs. Reads happen on the hot `Scene::step` path;
//! writes are expected once, at startup, so a plain atomic is enough without a mutex.

use std::sync::atomic::{AtomicU16, Ordering};

static REFINE_ITERATIONS: AtomicU16 = AtomicU16::new(24);

/// Number of bisection iterations [`crate::refine::refine`] performs per detected
/// collision. Defaults to 24.
pub fn refine_iterations() -> u16 {
    REFINE_ITERATIONS.load(Ordering::Relaxed)
}

/// Sets the number of bisection iterations. Intended to be called once, before any
/// `Scene::step` call; concurrent calls during stepping are not synchronized against
/// readers beyond atomicity of the individual load/store.
pub fn set_refine_iterations(iterations: u16) {
    REFINE_ITERATIONS.store(iterations, Ordering::Relaxed);
}
