//! Per-frame simulation scheduler
//!
//! One call advances the state one tick through three phases: Resolving
//! (walls + integration), Colliding (all-pairs impulse resolution) and
//! Cleanup (fragment expiry). The Resolving and Colliding phases each run
//! twice per tick; the second pass settles goal-corner cases and
//! near-simultaneous multi-body contacts that a single pass leaves
//! penetrating. Three-body contact chains remain approximate.

use super::collision::{circles_overlap, resolve_body_collision};
use super::state::{BodyKind, SimState};
use super::walls::resolve_wall_collision;
use crate::tuning::Tuning;

/// Stabilization passes per phase per tick.
pub const STABILIZATION_PASSES: u32 = 2;

/// Advance the simulation by one tick.
pub fn tick(state: &mut SimState, tuning: &Tuning) {
    state.time_ticks += 1;

    // Resolving: walls first, then integrate, per body
    for _ in 0..STABILIZATION_PASSES {
        for body in &mut state.bodies {
            resolve_wall_collision(body, &state.arena);
            body.integrate(tuning);
        }
    }

    // Colliding: every unordered pair, overlap test, impulse exchange
    for _ in 0..STABILIZATION_PASSES {
        for i in 0..state.bodies.len() {
            for j in (i + 1)..state.bodies.len() {
                let (head, tail) = state.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if circles_overlap(a, b) {
                    resolve_body_collision(a, b, tuning);
                }
            }
        }
    }

    // Cleanup: drop fragments whose lifetime has elapsed
    let now = state.time_ticks;
    let before = state.bodies.len();
    state.bodies.retain(|b| match b.kind {
        BodyKind::Fragment { spawn_tick } => now - spawn_tick < tuning.fragment_lifetime,
        _ => true,
    });
    let expired = before - state.bodies.len();
    if expired > 0 {
        log::debug!("expired {expired} fragments at tick {now}");
    }
}
