//! Bodies and the simulation state that owns them
//!
//! One [`Body`] type carries a kind tag instead of a subclass hierarchy:
//! the ball, the player pieces and explosion fragments differ only in their
//! constants plus one kind-specific field each (team/hover for players,
//! spawn tick for fragments).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::SimError;
use super::arena::Arena;
use crate::tuning::Tuning;
use crate::{angle_of, polar_to_cartesian};

/// Which side a player piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    /// Attacks the right goal
    Blue,
    /// Attacks the left goal
    Red,
}

/// Body kind tag with kind-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    Ball,
    Player {
        team: Team,
        /// Selection highlight, set by the input layer between ticks
        hovered: bool,
    },
    Fragment {
        /// Tick the fragment was spawned on; expiry compares against the
        /// scheduler's tick counter
        spawn_tick: u64,
    },
}

/// RGB draw colors per kind
const BALL_COLOR: [u8; 3] = [255, 255, 255];
const BLUE_COLOR: [u8; 3] = [0, 0, 255];
const RED_COLOR: [u8; 3] = [255, 0, 0];
const FRAGMENT_COLOR: [u8; 3] = [190, 190, 0];

/// A simulated circular rigid body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub kind: BodyKind,
}

impl Body {
    /// Construct a body, rejecting contract violations up front.
    ///
    /// Non-positive mass/radius or non-finite position would surface as NaN
    /// deep inside collision math otherwise.
    pub fn new(pos: Vec2, mass: f32, radius: f32, kind: BodyKind) -> Result<Self, SimError> {
        if !(mass > 0.0) {
            return Err(SimError::NonPositiveMass(mass));
        }
        if !(radius > 0.0) {
            return Err(SimError::NonPositiveRadius(radius));
        }
        if !pos.is_finite() {
            return Err(SimError::NonFinite(pos.x, pos.y));
        }
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            mass,
            radius,
            kind,
        })
    }

    /// The match ball
    pub fn ball(tuning: &Tuning, pos: Vec2) -> Result<Self, SimError> {
        Self::new(pos, tuning.ball_mass, tuning.ball_radius, BodyKind::Ball)
    }

    /// A player piece
    pub fn player(tuning: &Tuning, pos: Vec2, team: Team) -> Result<Self, SimError> {
        Self::new(
            pos,
            tuning.player_mass,
            tuning.player_radius,
            BodyKind::Player {
                team,
                hovered: false,
            },
        )
    }

    /// An explosion fragment with an initial velocity
    pub fn fragment(
        tuning: &Tuning,
        pos: Vec2,
        vel: Vec2,
        spawn_tick: u64,
    ) -> Result<Self, SimError> {
        if !vel.is_finite() {
            return Err(SimError::NonFinite(vel.x, vel.y));
        }
        let mut body = Self::new(
            pos,
            tuning.fragment_mass,
            tuning.fragment_radius,
            BodyKind::Fragment { spawn_tick },
        )?;
        body.vel = vel;
        Ok(body)
    }

    /// Advance position one tick and apply fixed-ratio damping.
    pub fn integrate(&mut self, tuning: &Tuning) {
        self.pos += self.vel;
        self.vel *= tuning.friction_factor;
    }

    /// Derived movement flag: true iff speed exceeds the stop epsilon.
    /// Recomputed from velocity every call, never cached.
    #[inline]
    pub fn is_moving(&self, tuning: &Tuning) -> bool {
        self.vel.length() > tuning.movement_epsilon
    }

    /// Clamp velocity components to the configured bound.
    #[inline]
    pub fn clamp_speed(&mut self, tuning: &Tuning) {
        self.vel = self.vel.clamp(
            Vec2::splat(-tuning.max_speed),
            Vec2::splat(tuning.max_speed),
        );
    }

    /// Immutable draw-state projection for the rendering collaborator.
    pub fn view(&self) -> BodyView {
        let color = match self.kind {
            BodyKind::Ball => BALL_COLOR,
            BodyKind::Player {
                team: Team::Blue, ..
            } => BLUE_COLOR,
            BodyKind::Player { team: Team::Red, .. } => RED_COLOR,
            BodyKind::Fragment { .. } => FRAGMENT_COLOR,
        };
        BodyView {
            kind: self.kind,
            pos: self.pos,
            radius: self.radius,
            color,
        }
    }
}

/// Immutable per-body snapshot handed to the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyView {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
}

/// Complete simulation state: the body collection, the arena and the tick
/// clock. Exclusively mutated by [`super::tick::tick`] during a step; callers
/// touch it only between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub arena: Arena,
    /// Ordered body collection. Outside references are indices into this
    /// vec and must be revalidated every frame: the collection is rebuilt
    /// wholesale on reset.
    pub bodies: Vec<Body>,
    /// Simulation tick counter, the engine's only clock
    pub time_ticks: u64,
}

impl SimState {
    /// Create a fresh simulation with the standard round layout.
    ///
    /// Fails only when the tuning carries non-positive masses or radii.
    pub fn new(tuning: &Tuning) -> Result<Self, SimError> {
        let mut state = Self {
            arena: Arena::new(tuning),
            bodies: Vec::new(),
            time_ticks: 0,
        };
        state.reset_round(tuning)?;
        Ok(state)
    }

    /// Replace the entire collection with a fresh ball + fixed player layout:
    /// one ball at field center, three players per side mirrored across the
    /// vertical midline.
    pub fn reset_round(&mut self, tuning: &Tuning) -> Result<(), SimError> {
        let center = self.arena.field.center();
        self.bodies.clear();

        self.bodies.push(Body::ball(tuning, center)?);
        for &dy in &tuning.spawn_dy {
            let offset = Vec2::new(tuning.spawn_dx, dy);
            self.bodies
                .push(Body::player(tuning, center + offset, Team::Blue)?);
            self.bodies.push(Body::player(
                tuning,
                center + Vec2::new(-offset.x, offset.y),
                Team::Red,
            )?);
        }

        log::info!(
            "round reset: {} bodies at tick {}",
            self.bodies.len(),
            self.time_ticks
        );
        Ok(())
    }

    /// Apply a shot velocity to a body, clamped to the speed bound.
    ///
    /// Rejects non-finite input and stale indices; call between ticks only.
    pub fn set_velocity(
        &mut self,
        index: usize,
        vel: Vec2,
        tuning: &Tuning,
    ) -> Result<(), SimError> {
        if !vel.is_finite() {
            return Err(SimError::NonFinite(vel.x, vel.y));
        }
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(SimError::BadIndex(index))?;
        body.vel = vel.clamp_length_max(tuning.max_speed);
        Ok(())
    }

    /// Set or clear a player's selection highlight.
    pub fn set_hovered(&mut self, index: usize, hovered: bool) -> Result<(), SimError> {
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(SimError::BadIndex(index))?;
        if let BodyKind::Player {
            hovered: ref mut h, ..
        } = body.kind
        {
            *h = hovered;
        }
        Ok(())
    }

    /// Spawn `count` fragments radiating from `origin` at equal angular
    /// increments of 2π/count, starting from angle 0.
    pub fn spawn_burst(
        &mut self,
        origin: Vec2,
        count: u32,
        speed: f32,
        tuning: &Tuning,
    ) -> Result<(), SimError> {
        if !origin.is_finite() {
            return Err(SimError::NonFinite(origin.x, origin.y));
        }
        if !speed.is_finite() {
            return Err(SimError::NonFiniteSpeed(speed));
        }
        if !self.arena.is_playable(origin) {
            return Err(SimError::UnplayableOrigin(origin.x, origin.y));
        }

        // Fragments obey the same speed bound as shots
        let speed = speed.min(tuning.max_speed);
        let step = std::f32::consts::TAU / count.max(1) as f32;
        for i in 0..count {
            let vel = polar_to_cartesian(speed, step * i as f32);
            let fragment = Body::fragment(tuning, origin, vel, self.time_ticks)?;
            self.bodies.push(fragment);
        }
        log::debug!(
            "burst: {} fragments at ({:.1}, {:.1}), tick {}",
            count,
            origin.x,
            origin.y,
            self.time_ticks
        );
        Ok(())
    }

    /// Ordered draw snapshot of every body.
    pub fn snapshot(&self) -> Vec<BodyView> {
        self.bodies.iter().map(Body::view).collect()
    }

    /// Position of the ball, if present.
    pub fn ball_position(&self) -> Option<Vec2> {
        self.bodies
            .iter()
            .find(|b| matches!(b.kind, BodyKind::Ball))
            .map(|b| b.pos)
    }

    /// True when no body is moving; gates round-reset and turn-advance logic.
    pub fn all_stopped(&self, tuning: &Tuning) -> bool {
        self.bodies.iter().all(|b| !b.is_moving(tuning))
    }

    /// Which team scored, if the ball has crossed a goal line this tick.
    ///
    /// Crossing the left line means the right side (Red) scored, and vice
    /// versa. Polled by the score collaborator each tick.
    pub fn goal_scored(&self) -> Option<Team> {
        let ball = self.ball_position()?;
        if ball.x < self.arena.field.min.x {
            Some(Team::Red)
        } else if ball.x > self.arena.field.max.x {
            Some(Team::Blue)
        } else {
            None
        }
    }
}

/// Map a drag gesture to a shot velocity: drag distance scaled down by the
/// aim divisor, magnitude capped at the speed bound, direction opposite the
/// drag (slingshot aim).
pub fn aim_velocity(press: Vec2, release: Vec2, tuning: &Tuning) -> Vec2 {
    let aim = (release - press) / tuning.aim_tweak;
    let magnitude = aim.length().min(tuning.max_speed);
    let direction = angle_of(aim);
    -polar_to_cartesian(magnitude, direction)
}
