//! Data-driven physics and arena tuning
//!
//! Every constant the engine needs lives in one immutable [`Tuning`] value
//! constructed at startup and passed explicitly to the scheduler and
//! resolvers. Nothing in the simulation reads ambient global state, so tests
//! can run with alternate arena sizes.

use serde::{Deserialize, Serialize};

/// Bundled configuration constants for the simulation.
///
/// Velocities are in pixels per tick: position integration adds the velocity
/// once per tick with no dt factor, matching a fixed 60 Hz step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Arena ===
    /// Playing-field width (the white rectangle, not the window)
    pub field_width: f32,
    /// Playing-field height
    pub field_height: f32,
    /// Margin between the coordinate-space origin and the field's left edge
    pub x_gap: f32,
    /// Margin between the coordinate-space origin and the field's top edge
    pub y_gap: f32,
    /// How far each goal pocket extends behind the field's side wall
    pub goal_depth: f32,
    /// Vertical opening of each goal mouth
    pub goal_height: f32,

    // === Bodies ===
    pub ball_mass: f32,
    pub ball_radius: f32,
    pub player_mass: f32,
    pub player_radius: f32,

    // === Physics ===
    /// Per-tick velocity retention (fixed-ratio damping, not exact exponential decay)
    pub friction_factor: f32,
    /// Bounciness along the contact normal (0 = inelastic, 1 = elastic)
    pub restitution: f32,
    /// Tangential friction coefficient for body-body contacts
    pub collision_friction: f32,
    /// Componentwise velocity bound
    pub max_speed: f32,
    /// Speeds below this count as stopped
    pub movement_epsilon: f32,

    // === Fragments ===
    pub fragment_count: u32,
    pub fragment_speed: f32,
    pub fragment_mass: f32,
    pub fragment_radius: f32,
    /// Fragment lifetime in ticks
    pub fragment_lifetime: u64,

    // === Round layout ===
    /// Player spawn x-offset from field center (left side; mirrored for right)
    pub spawn_dx: f32,
    /// Player spawn y-offsets from field center, one player per entry per side
    pub spawn_dy: [f32; 3],

    // === Input mapping ===
    /// Drag-distance divisor for aim strength (smaller = more sensitive)
    pub aim_tweak: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: 600.0,
            field_height: 400.0,
            x_gap: 100.0,
            y_gap: 100.0,
            goal_depth: 45.0,
            goal_height: 100.0,

            ball_mass: 15.0,
            ball_radius: 10.0,
            player_mass: 30.0,
            player_radius: 20.0,

            friction_factor: 0.95,
            restitution: 0.8,
            collision_friction: 0.15,
            max_speed: 12.0,
            movement_epsilon: 1e-3,

            fragment_count: 8,
            fragment_speed: 6.0,
            fragment_mass: 5.0,
            fragment_radius: 4.0,
            fragment_lifetime: 90,

            spawn_dx: -150.0,
            spawn_dy: [-100.0, 0.0, 100.0],

            aim_tweak: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values_sane() {
        let t = Tuning::default();
        assert!(t.ball_mass > 0.0 && t.player_mass > 0.0);
        assert!(t.ball_radius > 0.0 && t.player_radius > 0.0);
        assert!(t.friction_factor > 0.0 && t.friction_factor < 1.0);
        assert!(t.restitution >= 0.0 && t.restitution <= 1.0);
        assert!(t.goal_height < t.field_height);
    }
}
