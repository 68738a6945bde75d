//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to [`tick::tick`] per frame)
//! - Stable body iteration order (collection order)
//! - No rendering or platform dependencies
//!
//! External callers mutate the simulation only between ticks, through
//! [`SimState::set_velocity`], [`SimState::spawn_burst`] and
//! [`SimState::reset_round`], and observe it through [`SimState::snapshot`]
//! and the scoring queries.

pub mod arena;
pub mod collision;
pub mod state;
pub mod tick;
pub mod walls;

pub use arena::{Arena, Rect};
pub use collision::{circles_overlap, resolve_body_collision};
pub use state::{Body, BodyKind, BodyView, SimState, Team, aim_velocity};
pub use tick::tick;
pub use walls::resolve_wall_collision;

use thiserror::Error;

/// Errors produced at the simulation boundary.
///
/// Physics internals are total over valid state; these only arise when a
/// caller hands the engine a malformed body or a bad reference, which is a
/// contract violation to reject up front rather than recover from mid-tick.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimError {
    /// Body constructed with zero or negative mass.
    #[error("non-positive mass: {0}")]
    NonPositiveMass(f32),
    /// Body constructed with zero or negative radius.
    #[error("non-positive radius: {0}")]
    NonPositiveRadius(f32),
    /// Position or velocity contained NaN or infinity.
    #[error("non-finite vector: ({0}, {1})")]
    NonFinite(f32, f32),
    /// Scalar speed argument was NaN or infinity.
    #[error("non-finite speed: {0}")]
    NonFiniteSpeed(f32),
    /// Body index no longer valid (collection was rebuilt).
    #[error("no body at index {0}")]
    BadIndex(usize),
    /// Burst origin outside the playable area.
    #[error("unplayable burst origin: ({0}, {1})")]
    UnplayableOrigin(f32, f32),
}
