//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as a dt supplied by the host
//! - Randomness only through an injected `RandomSource`
//! - Obstacles kept in spawn order
//! - No rendering, storage or platform dependencies

pub mod physics;
pub mod rect;
pub mod rng;
pub mod snapshot;
pub mod spawner;
pub mod stamina;
pub mod state;
pub mod tick;

pub use rect::{Rect, overlaps};
pub use rng::{RandomSource, ScriptedRng, seeded};
pub use snapshot::Snapshot;
pub use spawner::Spawner;
pub use stamina::StaminaMonitor;
pub use state::{GameOverReason, GamePhase, GameState, Obstacle, Player, Viewport};
pub use tick::{TickEvent, TickInput, scroll_obstacles, tick};
