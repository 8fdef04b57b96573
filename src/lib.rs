//! Flappy Bird - a terminal arcade game.
//!
//! Core modules:
//! - `game`: deterministic simulation (physics, obstacles, collisions, state machine)
//! - `game_loop`: fixed-timestep driver
//! - `input` / `ui`: crossterm input feed and ratatui rendering

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod ui;

pub use config::GameConfig;
pub use constants::*;
pub use game::{Flow, GameEvent, GameState, Phase};
