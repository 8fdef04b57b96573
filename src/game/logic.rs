//! Game state machine: input handling and the per-tick update.

use super::collision::{check_and_score, check_boundary_collision, check_obstacle_collision};
use super::obstacles;
use super::physics::{apply_gravity_and_integrate, apply_impulse};
use super::types::{Actor, CollisionCause, EpisodeSummary, Flow, GameEvent, GameState, Phase};
use rand::Rng;

/// Reset actor, obstacles and score and enter `Playing`.
pub fn start_episode(state: &mut GameState) {
    state.actor = Actor::new(state.config.actor_start_y());
    state.obstacles.clear();
    state.score = 0;
    state.tick_count = 0;
    state.last_cause = None;
    state.episode += 1;
    state.phase = Phase::Playing;
    log::info!("episode {} started", state.episode);
}

/// Freeze the simulation in `GameOver`, keeping the final frame intact.
pub fn end_episode(state: &mut GameState, cause: CollisionCause) {
    state.phase = Phase::GameOver;
    state.last_cause = Some(cause);

    let summary = EpisodeSummary {
        episode: state.episode,
        score: state.score,
        ticks: state.tick_count,
        cause,
    };
    match serde_json::to_string(&summary) {
        Ok(json) => log::info!("game over: {}", json),
        Err(e) => log::warn!("game over (summary unavailable: {})", e),
    }
}

/// Apply one input event. The primary action starts an episode from the menu
/// or game-over screen and flaps while playing.
pub fn process_event(state: &mut GameState, event: GameEvent) -> Flow {
    if event.is_quit() {
        log::info!("quit requested ({:?})", event);
        return Flow::Quit;
    }

    match state.phase {
        Phase::Menu | Phase::GameOver => start_episode(state),
        Phase::Playing => apply_impulse(&mut state.actor, state.config.impulse),
    }
    Flow::Continue
}

/// Advance one simulation tick. Does nothing outside `Playing`.
///
/// Order: integrate, spawn, scroll, per-obstacle collision then scoring,
/// prune, boundary check. The first collision ends the episode and skips the
/// rest of the tick. Returns the collision cause if the episode ended.
pub fn process_tick<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<CollisionCause> {
    if state.phase != Phase::Playing {
        return None;
    }

    let config = state.config;
    state.tick_count += 1;

    apply_gravity_and_integrate(&mut state.actor, config.gravity);
    obstacles::spawn_if_due(&mut state.obstacles, &config, rng);
    obstacles::advance(&mut state.obstacles, config.obstacle_speed);

    let mut hit = false;
    for obstacle in &mut state.obstacles {
        if check_obstacle_collision(&state.actor, obstacle, &config) {
            hit = true;
            break;
        }
        state.score += check_and_score(obstacle, &config);
    }
    if hit {
        end_episode(state, CollisionCause::Obstacle);
        return Some(CollisionCause::Obstacle);
    }

    obstacles::prune(&mut state.obstacles, config.obstacle_width);

    let cause = check_boundary_collision(&state.actor, &config)?;
    end_episode(state, cause);
    Some(cause)
}

/// One frame of the game: drain `events` in order, then run a tick.
///
/// Returns `Flow::Quit` as soon as a quit-class event is seen; events after
/// it are ignored and no tick runs.
pub fn advance<R: Rng>(state: &mut GameState, events: &[GameEvent], rng: &mut R) -> Flow {
    for &event in events {
        if process_event(state, event) == Flow::Quit {
            return Flow::Quit;
        }
    }
    process_tick(state, rng);
    Flow::Continue
}
