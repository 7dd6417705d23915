//! Read-only view of the world for drawing
//!
//! Captured after each update; the renderer never touches `GameState`.

use serde::Serialize;

use super::rect::Rect;
use super::state::{GameOverReason, GamePhase, GameState, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub viewport: Viewport,
    pub ground_y: f32,
    pub player: Rect,
    pub running: bool,
    /// Obstacles in spawn order
    pub obstacles: Vec<Rect>,
    /// Stamina meter, 1 = full
    pub run_meter: f32,
    /// Floored distance
    pub score: u64,
    /// Floored baseline speed
    pub speed: u64,
    pub best: u64,
    pub phase: GamePhase,
    pub reason: Option<GameOverReason>,
    pub message: Option<&'static str>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            viewport: state.viewport,
            ground_y: state.ground_y(),
            player: state.player.rect(),
            running: state.player.running,
            obstacles: state.obstacles.iter().map(|o| o.rect).collect(),
            run_meter: state.stamina.fraction(),
            score: state.score(),
            speed: state.speed.max(0.0).floor() as u64,
            best: state.best,
            phase: state.phase,
            reason: state.game_over,
            message: state.message(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Status line for the HUD, with a restart hint after a loss
    pub fn status_text(&self) -> Option<String> {
        self.message.map(|m| format!("{m}! Tap to restart."))
    }
}
