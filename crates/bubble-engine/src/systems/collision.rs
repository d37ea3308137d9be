//! Pairwise bubble collisions: brute-force all-pairs overlap test, positional
//! separation, then a 1D impulse exchange along the contact normal.
//!
//! O(n²) per tick, which is fine for the few dozen bubbles a board shows.

use glam::Vec2;
use crate::api::config::Tuning;
use crate::components::body::Body;

/// Outcome of testing one pair, mostly for tests and tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Apart,
    /// Centers coincide; no normal exists, so the pair is left alone.
    Coincident,
    /// Overlap was separated but the bodies were already moving apart.
    Separated,
    /// Overlap was separated and velocities exchanged.
    Resolved,
}

/// Resolve every overlapping pair in place.
pub fn resolve_collisions(bodies: &mut [Body], tuning: &Tuning) {
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_pair(a, b, tuning);
        }
    }
}

/// Resolve a single pair.
pub fn resolve_pair(a: &mut Body, b: &mut Body, tuning: &Tuning) -> PairOutcome {
    let delta = b.center() - a.center();
    let dist = delta.length();
    let min_dist = a.radius() + b.radius();
    if dist >= min_dist {
        return PairOutcome::Apart;
    }
    if dist == 0.0 {
        log::trace!("bodies {:?} and {:?} share a center, skipping", a.id(), b.id());
        return PairOutcome::Coincident;
    }

    let normal = delta / dist;
    separate(a, b, normal, min_dist - dist, tuning);

    if exchange_velocity(a, b, normal, tuning.restitution) {
        PairOutcome::Resolved
    } else {
        PairOutcome::Separated
    }
}

/// Push the pair apart along `normal` (pointing from `a` to `b`).
/// A dragged body never moves; its partner flees by a larger share instead.
fn separate(a: &mut Body, b: &mut Body, normal: Vec2, overlap: f32, tuning: &Tuning) {
    let push = normal * overlap * tuning.overlap_push;
    match (a.is_dragging(), b.is_dragging()) {
        (false, false) => {
            a.pos -= push;
            b.pos += push;
        }
        (true, false) => b.pos += push * tuning.drag_push,
        (false, true) => a.pos -= push * tuning.drag_push,
        (true, true) => {}
    }
}

/// Impulse exchange with restitution. Returns `false` when the bodies are
/// already separating along the normal and nothing was changed.
fn exchange_velocity(a: &mut Body, b: &mut Body, normal: Vec2, restitution: f32) -> bool {
    let closing = (b.velocity() - a.velocity()).dot(normal);
    if closing >= 0.0 {
        return false;
    }

    let (ma, mb) = (a.mass(), b.mass());
    let j = -(1.0 + restitution) * closing / (1.0 / ma + 1.0 / mb);
    let impulse = normal * j;

    if let Some(v) = a.velocity_mut() {
        *v -= impulse / ma;
    }
    if let Some(v) = b.velocity_mut() {
        *v += impulse / mb;
    }
    true
}
