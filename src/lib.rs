//! Salto Katze - an endless runner with a cat
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `best`: Best-distance record storage
//! - `session`: Host frame loop adapter (clock, restart, persistence wiring)
//! - `autopilot`: Demo bot that plays from snapshots

pub mod autopilot;
pub mod best;
pub mod session;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use autopilot::Autopilot;
pub use best::{BestStore, MemoryStore};
pub use session::{FrameClock, Session};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Largest simulation step the host loop may feed (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Gravity (units/s², y points down)
    pub const GRAVITY: f32 = 1600.0;
    /// Vertical velocity set by a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -560.0;
    /// Ground line as a fraction of viewport height
    pub const GROUND_RATIO: f32 = 0.78;

    /// Scroll speed at the start of a run (units/s)
    pub const BASE_SPEED: f32 = 220.0;
    /// Perpetual speed increase (units/s per second)
    pub const SPEED_RAMP: f32 = 2.0;
    /// Scroll multiplier while run is held
    pub const RUN_SCROLL_FACTOR: f32 = 1.2;
    /// Scroll multiplier while run is released
    pub const WALK_SCROLL_FACTOR: f32 = 0.6;

    /// Seconds the run input may stay released before the run is lost
    pub const STAMINA_LIMIT: f32 = 1.4;

    /// Player defaults
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_SIZE: f32 = 44.0;

    /// Obstacle size ranges (min + uniform span)
    pub const OBSTACLE_MIN_HEIGHT: f32 = 36.0;
    pub const OBSTACLE_HEIGHT_SPAN: f32 = 40.0;
    pub const OBSTACLE_MIN_WIDTH: f32 = 18.0;
    pub const OBSTACLE_WIDTH_SPAN: f32 = 60.0;

    /// Obstacles appear this far past the right edge of the viewport
    pub const SPAWN_MARGIN: f32 = 60.0;
    /// Spawn interval = base + uniform(0, jitter) - min(distance / divisor, cap)
    pub const SPAWN_BASE: f32 = 240.0;
    pub const SPAWN_JITTER: f32 = 380.0;
    pub const SPAWN_DISTANCE_DIVISOR: f32 = 1000.0;
    pub const SPAWN_RAMP_CAP: f32 = 220.0;

    /// Obstacles whose right edge passes this x are dropped
    pub const DESPAWN_X: f32 = -200.0;
}
