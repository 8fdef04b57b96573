//! Collision detection and scoring.
//!
//! The actor is a circle but is tested as its bounding box against the
//! rectangular pipes. With a small radius the difference is not noticeable.

use super::types::{Actor, CollisionCause, Obstacle};
use crate::config::GameConfig;

/// True if the actor overlaps the solid part of `obstacle`.
pub fn check_obstacle_collision(actor: &Actor, obstacle: &Obstacle, config: &GameConfig) -> bool {
    let r = config.actor_radius;
    let overlaps_horizontally = config.actor_x + r > obstacle.x
        && config.actor_x - r < obstacle.trailing_edge(config.obstacle_width);
    if !overlaps_horizontally {
        return false;
    }
    actor.y - r < obstacle.top as f64 || actor.y + r > obstacle.bottom as f64
}

/// Which screen edge the actor touched, if any. Touching exactly at the
/// radius does not count.
pub fn check_boundary_collision(actor: &Actor, config: &GameConfig) -> Option<CollisionCause> {
    let r = config.actor_radius;
    if actor.y - r < 0.0 {
        Some(CollisionCause::Ceiling)
    } else if actor.y + r > config.screen_height {
        Some(CollisionCause::Floor)
    } else {
        None
    }
}

/// Credit the actor for an obstacle whose trailing edge has passed it.
///
/// Returns the points awarded (0 or 1). Only horizontal position is tested;
/// callers run the collision check first so a crashing obstacle is never
/// credited.
pub fn check_and_score(obstacle: &mut Obstacle, config: &GameConfig) -> u32 {
    if obstacle.scored || obstacle.trailing_edge(config.obstacle_width) >= config.actor_x {
        return 0;
    }
    obstacle.scored = true;
    1
}
