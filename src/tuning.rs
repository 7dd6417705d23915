//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a host can ship a JSON
//! override without rebuilding. Missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Loop ===
    /// Ceiling applied by the frame clock to every dt
    pub max_frame_dt: f32,

    // === Physics ===
    pub gravity: f32,
    pub jump_velocity: f32,
    pub ground_ratio: f32,

    // === Scroll ===
    pub base_speed: f32,
    pub speed_ramp: f32,
    pub run_scroll_factor: f32,
    pub walk_scroll_factor: f32,

    // === Stamina ===
    pub stamina_limit: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    // === Obstacles ===
    pub obstacle_min_height: f32,
    pub obstacle_height_span: f32,
    pub obstacle_min_width: f32,
    pub obstacle_width_span: f32,
    pub spawn_margin: f32,
    pub spawn_base: f32,
    pub spawn_jitter: f32,
    pub spawn_distance_divisor: f32,
    pub spawn_ramp_cap: f32,
    pub despawn_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_frame_dt: MAX_FRAME_DT,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            ground_ratio: GROUND_RATIO,

            base_speed: BASE_SPEED,
            speed_ramp: SPEED_RAMP,
            run_scroll_factor: RUN_SCROLL_FACTOR,
            walk_scroll_factor: WALK_SCROLL_FACTOR,

            stamina_limit: STAMINA_LIMIT,

            player_x: PLAYER_X,
            player_width: PLAYER_SIZE,
            player_height: PLAYER_SIZE,

            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_height_span: OBSTACLE_HEIGHT_SPAN,
            obstacle_min_width: OBSTACLE_MIN_WIDTH,
            obstacle_width_span: OBSTACLE_WIDTH_SPAN,
            spawn_margin: SPAWN_MARGIN,
            spawn_base: SPAWN_BASE,
            spawn_jitter: SPAWN_JITTER,
            spawn_distance_divisor: SPAWN_DISTANCE_DIVISOR,
            spawn_ramp_cap: SPAWN_RAMP_CAP,
            despawn_x: DESPAWN_X,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Scroll multiplier for the given run state
    #[inline]
    pub fn scroll_factor(&self, running: bool) -> f32 {
        if running {
            self.run_scroll_factor
        } else {
            self.walk_scroll_factor
        }
    }

    /// Load tuning from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}
