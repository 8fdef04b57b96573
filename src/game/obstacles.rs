//! Obstacle stream: spawning, scrolling, and retiring pipes.

use super::types::Obstacle;
use crate::config::GameConfig;
use rand::Rng;

/// Draw a fresh obstacle at the right edge with a random gap centre.
pub fn spawn_obstacle<R: Rng>(config: &GameConfig, rng: &mut R) -> Obstacle {
    let (min_center, max_center) = config.gap_center_bounds();
    let center = rng.gen_range(min_center..=max_center);
    Obstacle::new(config.screen_width, center, config.gap_height)
}

/// Append a new obstacle when the stream is empty or the newest obstacle has
/// scrolled at least `spawn_threshold` in from the right edge.
///
/// Returns true if an obstacle was spawned.
pub fn spawn_if_due<R: Rng>(obstacles: &mut Vec<Obstacle>, config: &GameConfig, rng: &mut R) -> bool {
    let due = match obstacles.last() {
        None => true,
        Some(newest) => newest.x < config.screen_width - config.spawn_threshold,
    };
    if !due {
        return false;
    }

    let obstacle = spawn_obstacle(config, rng);
    log::debug!(
        "spawned obstacle at x={} gap=[{}, {}]",
        obstacle.x,
        obstacle.top,
        obstacle.bottom
    );
    obstacles.push(obstacle);
    true
}

/// Scroll every obstacle left by `speed`.
pub fn advance(obstacles: &mut [Obstacle], speed: f64) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Drop obstacles whose trailing edge has reached the left edge.
///
/// Returns the number removed.
pub fn prune(obstacles: &mut Vec<Obstacle>, width: f64) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| o.trailing_edge(width) > 0.0);
    let removed = before - obstacles.len();
    if removed > 0 {
        log::debug!("pruned {} obstacle(s), {} live", removed, obstacles.len());
    }
    removed
}
