//! Wall and goal-boundary collision resolution
//!
//! A body may never rest with any part of its circular extent outside the
//! legal playing volume (field + two goal pockets), except through the goal
//! mouths, which are deliberately open. Each check below reflects one
//! velocity axis and clamps the position so the circle's edge sits exactly
//! on the wall; the checks are evaluated independently because a body cutting
//! a goal-post corner can trigger two axes in one call.

use super::arena::Arena;
use super::state::Body;

/// Detect and resolve penetration of the field walls and goal walls.
pub fn resolve_wall_collision(body: &mut Body, arena: &Arena) {
    let r = body.radius;
    let field = &arena.field;

    // Top/bottom field walls
    if body.pos.y - r < field.min.y {
        body.vel.y = -body.vel.y;
        body.pos.y = field.min.y + r;
    } else if body.pos.y + r > field.max.y {
        body.vel.y = -body.vel.y;
        body.pos.y = field.max.y - r;
    }

    // Left/right field walls, goal-aware: inside the goal span the side
    // boundary is open and the body passes into the pocket
    if !arena.in_goal_span(body.pos.y) {
        if body.pos.x - r < field.min.x {
            body.vel.x = -body.vel.x;
            body.pos.x = field.min.x + r;
        } else if body.pos.x + r > field.max.x {
            body.vel.x = -body.vel.x;
            body.pos.x = field.max.x - r;
        }
    }

    // Goal back walls
    if body.pos.x - r < arena.left_goal_back() {
        body.vel.x = -body.vel.x;
        body.pos.x = arena.left_goal_back() + r;
    } else if body.pos.x + r > arena.right_goal_back() {
        body.vel.x = -body.vel.x;
        body.pos.x = arena.right_goal_back() - r;
    }

    // Goal mouth top/bottom walls, goal-aware: only apply once the body is
    // actually inside a pocket, not on the main pitch
    if body.pos.x < field.min.x || body.pos.x > field.max.x {
        if body.pos.y - r < arena.goal_top() {
            body.vel.y = -body.vel.y;
            body.pos.y = arena.goal_top() + r;
        } else if body.pos.y + r > arena.goal_bottom() {
            body.vel.y = -body.vel.y;
            body.pos.y = arena.goal_bottom() - r;
        }
    }
}
