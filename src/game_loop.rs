//! Fixed-timestep driver shared by the binary and the tests.
//!
//! Wall-clock time is accumulated and consumed in whole simulation ticks, so
//! the game runs at the same speed however fast frames are drawn.

use crate::constants::{MAX_FRAME_DT_MS, TICK_INTERVAL_MS};
use crate::game::{advance, process_event, Flow, GameEvent, GameState};
use rand::Rng;

/// Converts elapsed milliseconds into a whole number of simulation ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: u64,
    max_dt_ms: u64,
    accumulated_ms: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS, MAX_FRAME_DT_MS)
    }
}

impl FrameClock {
    pub fn new(tick_ms: u64, max_dt_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            max_dt_ms,
            accumulated_ms: 0,
        }
    }

    /// Add `dt_ms` of wall time and return how many ticks are now due.
    ///
    /// `dt_ms` is clamped to `max_dt_ms` so a stall (terminal suspended,
    /// debugger) does not fast-forward the game.
    pub fn steps(&mut self, dt_ms: u64) -> u32 {
        self.accumulated_ms += dt_ms.min(self.max_dt_ms);
        let steps = self.accumulated_ms / self.tick_ms;
        self.accumulated_ms %= self.tick_ms;
        steps as u32
    }
}

/// Run one drawn frame worth of simulation.
///
/// The frame's events go to the first tick. With zero ticks due the events
/// are still applied so input is never dropped.
pub fn run_frame<R: Rng>(state: &mut GameState, events: &[GameEvent], steps: u32, rng: &mut R) -> Flow {
    if steps == 0 {
        for &event in events {
            if process_event(state, event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        return Flow::Continue;
    }

    if advance(state, events, rng) == Flow::Quit {
        return Flow::Quit;
    }
    for _ in 1..steps {
        advance(state, &[], rng);
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Phase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_clock_accumulates_partial_ticks() {
        let mut clock = FrameClock::new(16, 100);
        assert_eq!(clock.steps(10), 0);
        assert_eq!(clock.steps(10), 1); // 20ms -> 1 tick, 4ms carried
        assert_eq!(clock.steps(12), 1); // 16ms
        assert_eq!(clock.steps(48), 3);
    }

    #[test]
    fn test_clock_clamps_long_frames() {
        let mut clock = FrameClock::new(16, 100);
        assert_eq!(clock.steps(5_000), 6); // 100ms -> 6 ticks, 4ms carried
        assert_eq!(clock.steps(12), 1);
    }

    #[test]
    fn test_events_applied_without_due_ticks() {
        let mut state = GameState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let flow = run_frame(&mut state, &[GameEvent::PrimaryAction], 0, &mut rng);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn test_multiple_steps_per_frame() {
        let mut state = GameState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        run_frame(&mut state, &[GameEvent::PrimaryAction], 3, &mut rng);
        assert_eq!(state.tick_count, 3);
        // velocity 0.5, 1.0, 1.5 -> y = 300 + 3.0
        assert_eq!(state.actor.y, 303.0);
    }

    #[test]
    fn test_quit_stops_frame() {
        let mut state = GameState::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(run_frame(&mut state, &[GameEvent::Close], 2, &mut rng), Flow::Quit);
        assert_eq!(run_frame(&mut state, &[GameEvent::Quit], 0, &mut rng), Flow::Quit);
        assert_eq!(state.phase, Phase::Menu);
    }
}
