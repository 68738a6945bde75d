//! Static field and goal geometry
//!
//! The arena is the playing field plus two goal pockets recessed behind the
//! field's left and right walls. Goal rectangles are centered vertically and
//! open flush with the field's side edges; the wall resolver's goal-aware
//! branches rely on that (no gap, no overlap past the field boundary).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Axis-aligned rectangle in field coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Check if a point is inside (edges inclusive)
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Immutable field + goal geometry, derived once from [`Tuning`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    /// Main playing field
    pub field: Rect,
    /// Left goal pocket (opens onto the field's left edge)
    pub left_goal: Rect,
    /// Right goal pocket (opens onto the field's right edge)
    pub right_goal: Rect,
}

impl Arena {
    pub fn new(tuning: &Tuning) -> Self {
        let field = Rect::new(
            Vec2::new(tuning.x_gap, tuning.y_gap),
            Vec2::new(
                tuning.x_gap + tuning.field_width,
                tuning.y_gap + tuning.field_height,
            ),
        );
        let goal_top = tuning.y_gap + (tuning.field_height - tuning.goal_height) / 2.0;
        let goal_bottom = goal_top + tuning.goal_height;

        Self {
            field,
            left_goal: Rect::new(
                Vec2::new(field.min.x - tuning.goal_depth, goal_top),
                Vec2::new(field.min.x, goal_bottom),
            ),
            right_goal: Rect::new(
                Vec2::new(field.max.x, goal_top),
                Vec2::new(field.max.x + tuning.goal_depth, goal_bottom),
            ),
        }
    }

    /// Top of the goal mouths (both goals share the vertical span)
    #[inline]
    pub fn goal_top(&self) -> f32 {
        self.left_goal.min.y
    }

    /// Bottom of the goal mouths
    #[inline]
    pub fn goal_bottom(&self) -> f32 {
        self.left_goal.max.y
    }

    /// x-coordinate of the left goal's back wall
    #[inline]
    pub fn left_goal_back(&self) -> f32 {
        self.left_goal.min.x
    }

    /// x-coordinate of the right goal's back wall
    #[inline]
    pub fn right_goal_back(&self) -> f32 {
        self.right_goal.max.x
    }

    /// Is x within the horizontal span of either goal pocket
    /// (between a goal back wall and the field's side wall on that side)?
    #[inline]
    pub fn in_goal_column(&self, x: f32) -> bool {
        (x >= self.left_goal.min.x && x <= self.left_goal.max.x)
            || (x >= self.right_goal.min.x && x <= self.right_goal.max.x)
    }

    /// Is y within the goal mouths' vertical span?
    #[inline]
    pub fn in_goal_span(&self, y: f32) -> bool {
        y >= self.goal_top() && y <= self.goal_bottom()
    }

    /// Is the point in the legal playing volume (field or either goal pocket)?
    ///
    /// Used to validate ability-targeting clicks before spawning a burst.
    pub fn is_playable(&self, p: Vec2) -> bool {
        self.field.contains(p) || self.left_goal.contains(p) || self.right_goal.contains(p)
    }
}
