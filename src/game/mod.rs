//! Flappy Bird simulation core.
//!
//! A bird falls under gravity and flaps upward on input while pipe pairs
//! scroll in from the right. Touching a pipe or a screen edge ends the
//! episode. Everything here is deterministic given the RNG passed in and has
//! no terminal or rendering dependencies.

pub mod collision;
pub mod logic;
pub mod obstacles;
pub mod physics;
pub mod types;

pub use logic::{advance, end_episode, process_event, process_tick, start_episode};
pub use types::*;
