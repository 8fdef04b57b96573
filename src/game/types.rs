//! Flappy Bird data structures.

use crate::config::GameConfig;
use serde::{Deserialize, Serialize};

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen shown at launch.
    #[default]
    Menu,
    /// An episode is running.
    Playing,
    /// The last episode ended in a collision. Re-enterable.
    GameOver,
}

/// Discrete input events delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Interrupt from the host (Ctrl+C).
    Quit,
    /// Start, retry, or flap depending on the phase.
    PrimaryAction,
    /// Escape key.
    SecondaryAction,
    /// Window/terminal close request.
    Close,
}

impl GameEvent {
    /// True for every event that ends the process.
    pub fn is_quit(self) -> bool {
        matches!(
            self,
            GameEvent::Quit | GameEvent::SecondaryAction | GameEvent::Close
        )
    }
}

/// Whether the frame loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What ended an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    Obstacle,
    Ceiling,
    Floor,
}

/// The player-controlled bird. Its horizontal position is fixed by the config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Vertical centre in world units (0 = top edge).
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
}

impl Actor {
    pub fn new(y: f64) -> Self {
        Self { y, velocity: 0.0 }
    }
}

/// A scrolling pipe pair with a gap between `top` and `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Leading (left) edge in world units.
    pub x: f64,
    /// Lower edge of the upper pipe.
    pub top: i32,
    /// Upper edge of the lower pipe.
    pub bottom: i32,
    /// Set once the actor has been credited for passing this obstacle.
    pub scored: bool,
}

impl Obstacle {
    /// Build an obstacle whose gap is centred on `center`.
    pub fn new(x: f64, center: i32, gap_height: i32) -> Self {
        let half_gap = gap_height / 2;
        Self {
            x,
            top: center - half_gap,
            bottom: center - half_gap + gap_height,
            scored: false,
        }
    }

    /// Right edge given the configured obstacle width.
    pub fn trailing_edge(&self, width: f64) -> f64 {
        self.x + width
    }
}

/// Everything the simulation owns. One instance lives for the whole process.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,
    pub actor: Actor,
    /// Live obstacles ordered by spawn time (and therefore by `x`).
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Ticks simulated in the current episode.
    pub tick_count: u64,
    /// Number of episodes started since launch.
    pub episode: u32,
    /// Why the most recent episode ended.
    pub last_cause: Option<CollisionCause>,
}

impl GameState {
    /// Create a new session sitting on the start menu.
    pub fn new(config: GameConfig) -> Self {
        Self {
            actor: Actor::new(config.actor_start_y()),
            config,
            phase: Phase::Menu,
            obstacles: Vec::new(),
            score: 0,
            tick_count: 0,
            episode: 0,
            last_cause: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// One-line record of a finished episode, logged as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeSummary {
    pub episode: u32,
    pub score: u32,
    pub ticks: u64,
    pub cause: CollisionCause,
}
