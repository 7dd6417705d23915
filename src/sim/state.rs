//! Game state and core simulation types
//!
//! `GameState` is the single owner and mutator of the player, the obstacle
//! list and the session counters. Hosts read it through [`super::Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawner::Spawner;
use super::stamina::StaminaMonitor;
use crate::tuning::Tuning;

/// Logical drawing area supplied by the host (may change between frames)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Y coordinate of the walkable surface
    #[inline]
    pub fn ground_y(&self, tuning: &Tuning) -> f32 {
        self.height * tuning.ground_ratio
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Run ended; frozen until `reset`
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Run input released for too long
    OutOfStamina,
    /// Ran into an obstacle
    Collision,
}

impl GameOverReason {
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::OutOfStamina => "ran out of stamina",
            GameOverReason::Collision => "the cat fell",
        }
    }
}

/// The cat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
    pub on_ground: bool,
    /// Mirrors the run input of the last frame
    pub running: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, 0.0),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vy: 0.0,
            on_ground: false,
            running: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Y at which the player stands on the ground line, never above the top edge
    #[inline]
    pub fn rest_y(&self, ground_y: f32) -> f32 {
        (ground_y - self.size.y).max(0.0)
    }

    pub fn place_on_ground(&mut self, ground_y: f32) {
        self.pos.y = self.rest_y(ground_y);
        self.vy = 0.0;
        self.on_ground = true;
    }
}

/// A ground obstacle; only its x changes after spawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub viewport: Viewport,
    pub phase: GamePhase,
    /// Set exactly while `phase == GameOver`
    pub game_over: Option<GameOverReason>,
    pub player: Player,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub stamina: StaminaMonitor,
    /// Distance travelled this run (score)
    pub distance: f32,
    /// Baseline scroll speed (units/s)
    pub speed: f32,
    /// Best floored distance across runs
    pub best: u64,
}

impl GameState {
    /// Create a running game; `best` comes from the persistence collaborator
    pub fn new(tuning: Tuning, viewport: Viewport, best: u64) -> Self {
        let mut state = Self {
            player: Player::new(&tuning),
            stamina: StaminaMonitor::new(tuning.stamina_limit),
            spawner: Spawner::new(),
            tuning,
            viewport,
            phase: GamePhase::Running,
            game_over: None,
            obstacles: Vec::new(),
            distance: 0.0,
            speed: 0.0,
            best,
        };
        state.reset();
        state
    }

    /// Start a fresh run (best is kept)
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawner.reset();
        self.stamina.reset();
        self.distance = 0.0;
        self.speed = self.tuning.base_speed;
        self.player.running = false;
        let ground_y = self.ground_y();
        self.player.place_on_ground(ground_y);
        self.phase = GamePhase::Running;
        self.game_over = None;
    }

    /// End the run; later calls keep the first reason
    pub fn end_run(&mut self, reason: GameOverReason) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.game_over = Some(reason);
    }

    /// Apply a resize; a grounded or now-buried player is put back on the ground
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let ground_y = self.ground_y();
        if self.player.on_ground || self.player.pos.y > self.player.rest_y(ground_y) {
            self.player.place_on_ground(ground_y);
        }
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.viewport.ground_y(&self.tuning)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Floored distance
    pub fn score(&self) -> u64 {
        self.distance.max(0.0).floor() as u64
    }

    pub fn message(&self) -> Option<&'static str> {
        self.game_over.map(|r| r.message())
    }
}
