//! Pitch Physics - 2D circle physics for a drag-to-shoot soccer game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, arena geometry, collisions, tick scheduler)
//! - `tuning`: Bundled configuration constants
//!
//! The engine is pure computation over in-memory state: the embedding
//! application owns the frame clock, input mapping and rendering, and talks
//! to the simulation only through [`sim::SimState`].

pub mod sim;
pub mod tuning;

pub use sim::{Body, BodyKind, BodyView, SimError, SimState, Team};
pub use tuning::Tuning;

use glam::Vec2;

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (magnitude, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(magnitude: f32, theta: f32) -> Vec2 {
    Vec2::new(magnitude * theta.cos(), magnitude * theta.sin())
}

/// Convert cartesian (x, y) to polar (magnitude, theta)
#[inline]
pub fn cartesian_to_polar(v: Vec2) -> (f32, f32) {
    (v.length(), v.y.atan2(v.x))
}

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    (p2 - p1).length()
}

/// Angle of a delta vector in (-π, π]. The zero vector maps to 0.0.
#[inline]
pub fn angle_of(delta: Vec2) -> f32 {
    delta.y.atan2(delta.x)
}
