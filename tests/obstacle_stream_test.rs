//! Integration test: obstacle stream
//!
//! Runs long episodes with gravity disabled and a gap wide enough that the
//! bird never dies, so the stream itself can be observed over thousands of
//! ticks.

use flappy::game::obstacles::{advance, prune, spawn_if_due};
use flappy::game::{process_event, process_tick, GameEvent, GameState, Phase};
use flappy::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn immortal_config() -> GameConfig {
    GameConfig {
        gravity: 0.0,
        gap_height: 560,
        ..Default::default()
    }
}

fn immortal_state() -> GameState {
    let mut state = GameState::new(immortal_config());
    process_event(&mut state, GameEvent::PrimaryAction);
    state
}

#[test]
fn test_spawn_spacing_is_constant() {
    let mut state = immortal_state();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let speed = state.config.obstacle_speed;
    let threshold = state.config.spawn_threshold;

    let mut spawn_ticks = Vec::new();
    for tick in 0..3_000u64 {
        let before = state.obstacles.last().map(|o| o.x);
        assert_eq!(process_tick(&mut state, &mut rng), None);
        let newest = state.obstacles.last().map(|o| o.x);
        if newest != before.map(|x| x - speed) {
            spawn_ticks.push(tick);
        }
    }

    assert!(spawn_ticks.len() > 10);
    let intervals: Vec<u64> = spawn_ticks.windows(2).map(|w| w[1] - w[0]).collect();
    assert!(intervals.iter().all(|&i| i == intervals[0]));
    assert!(intervals[0] as f64 * speed >= threshold);
}

#[test]
fn test_live_obstacles_evenly_spaced_and_bounded() {
    let mut state = immortal_state();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..3_000 {
        process_tick(&mut state, &mut rng);
        assert!(!state.obstacles.is_empty());
        assert!(state.obstacles.len() <= 4);

        let gaps: Vec<f64> = state
            .obstacles
            .windows(2)
            .map(|w| w[1].x - w[0].x)
            .collect();
        assert!(gaps.iter().all(|&g| g == 202.0), "uneven spacing: {:?}", gaps);
        assert!(state
            .obstacles
            .iter()
            .all(|o| o.trailing_edge(state.config.obstacle_width) > 0.0));
    }
}

#[test]
fn test_every_passed_obstacle_scores_once() {
    let mut state = immortal_state();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let actor_x = state.config.actor_x;
    let width = state.config.obstacle_width;

    let speed = state.config.obstacle_speed;
    let mut passed = 0u32;
    for _ in 0..4_000 {
        process_tick(&mut state, &mut rng);
        assert_eq!(state.phase, Phase::Playing);

        // Obstacles whose trailing edge crossed the actor this tick
        passed += state
            .obstacles
            .iter()
            .filter(|o| {
                let edge = o.trailing_edge(width);
                edge < actor_x && edge + speed >= actor_x
            })
            .count() as u32;

        for o in &state.obstacles {
            assert_eq!(o.scored, o.trailing_edge(width) < actor_x);
        }
    }

    assert!(passed > 0);
    assert_eq!(state.score, passed);
}

#[test]
fn test_stream_primitives_compose() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut obstacles = Vec::new();

    assert!(spawn_if_due(&mut obstacles, &config, &mut rng));
    assert!(!spawn_if_due(&mut obstacles, &config, &mut rng));

    let (lo, hi) = config.gap_center_bounds();
    let center = (obstacles[0].top + obstacles[0].bottom) / 2;
    assert!(center >= lo && center <= hi);
    assert_eq!(obstacles[0].bottom - obstacles[0].top, config.gap_height);

    // Scroll until the obstacle has fully left the screen
    let mut removed = 0;
    for _ in 0..300 {
        advance(&mut obstacles, config.obstacle_speed);
        removed += prune(&mut obstacles, config.obstacle_width);
        if obstacles.is_empty() {
            break;
        }
    }
    assert_eq!(removed, 1);
    assert!(obstacles.is_empty());
}
