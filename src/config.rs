//! Game tuning.
//!
//! Every gameplay constant lives in [`GameConfig`]. The defaults reproduce the
//! classic 400x600 layout; tests override individual fields with struct-update
//! syntax.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Tunable parameters for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Viewport width in world units.
    pub screen_width: f64,
    /// Viewport height in world units. y grows downward.
    pub screen_height: f64,
    /// Fixed horizontal position of the actor's centre.
    pub actor_x: f64,
    /// Collision radius of the actor.
    pub actor_radius: f64,
    /// Velocity added every tick (positive = downward).
    pub gravity: f64,
    /// Velocity assigned on a flap (negative = upward).
    pub impulse: f64,
    /// Horizontal extent of each obstacle.
    pub obstacle_width: f64,
    /// Distance between an obstacle's top and bottom gap boundaries.
    pub gap_height: i32,
    /// Distance every obstacle scrolls left per tick.
    pub obstacle_speed: f64,
    /// Spacing the newest obstacle must have travelled before the next spawn.
    pub spawn_threshold: f64,
    /// Lowest gap centre drawn by the spawner.
    pub gap_center_min: i32,
    /// Highest gap centre drawn by the spawner.
    pub gap_center_max: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            actor_x: ACTOR_X,
            actor_radius: ACTOR_RADIUS,
            gravity: GRAVITY,
            impulse: JUMP_IMPULSE,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_threshold: SPAWN_THRESHOLD,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,
        }
    }
}

impl GameConfig {
    /// Starting vertical position of the actor (middle of the viewport).
    pub fn actor_start_y(&self) -> f64 {
        (self.screen_height / 2.0).floor()
    }

    /// Inclusive range of gap centres the spawner may draw.
    ///
    /// The configured range is narrowed so the whole gap keeps `actor_radius`
    /// clear of the top and bottom edges. An empty result collapses to the
    /// viewport midpoint.
    pub fn gap_center_bounds(&self) -> (i32, i32) {
        let half_gap = self.gap_height / 2;
        let margin = self.actor_radius.ceil() as i32;
        let lowest = half_gap + margin;
        let highest = self.screen_height.floor() as i32 - half_gap - margin;

        let min = self.gap_center_min.max(lowest);
        let max = self.gap_center_max.min(highest);
        if min <= max {
            (min, max)
        } else {
            let mid = (self.screen_height / 2.0).floor() as i32;
            (mid, mid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 400.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.actor_x, 100.0);
        assert_eq!(config.actor_radius, 15.0);
        assert_eq!(config.gap_height, 200);
        assert_eq!(config.actor_start_y(), 300.0);
    }

    #[test]
    fn test_default_gap_range_is_untouched() {
        assert_eq!(GameConfig::default().gap_center_bounds(), (150, 350));
    }

    #[test]
    fn test_gap_range_clamped_to_margins() {
        let config = GameConfig {
            gap_center_min: 0,
            gap_center_max: 600,
            ..Default::default()
        };
        // 100 half-gap + 15 radius on each side
        assert_eq!(config.gap_center_bounds(), (115, 485));
    }

    #[test]
    fn test_gap_range_collapses_when_gap_too_tall() {
        let config = GameConfig {
            gap_height: 590,
            ..Default::default()
        };
        assert_eq!(config.gap_center_bounds(), (300, 300));
    }

    #[test]
    fn test_config_serializes_field_names() {
        let json = serde_json::to_value(GameConfig::default()).unwrap();
        assert_eq!(json["gravity"], 0.5);
        assert_eq!(json["spawn_threshold"], 200.0);
    }
}
