// Frame timing constants
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 Hz
pub const MAX_FRAME_DT_MS: u64 = 100;

// Viewport (world units)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Actor constants
pub const ACTOR_X: f64 = 100.0;
pub const ACTOR_RADIUS: f64 = 15.0;
pub const GRAVITY: f64 = 0.5;
pub const JUMP_IMPULSE: f64 = -7.0;

// Obstacle constants
pub const OBSTACLE_WIDTH: f64 = 70.0;
pub const GAP_HEIGHT: i32 = 200;
pub const OBSTACLE_SPEED: f64 = 2.0;
pub const SPAWN_THRESHOLD: f64 = 200.0;
pub const GAP_CENTER_MIN: i32 = 150;
pub const GAP_CENTER_MAX: i32 = 350;
