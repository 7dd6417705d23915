//! Run-discipline monitor
//!
//! The cat has to be told to run every so often. This tracks how long the run
//! input has been released and reports when that span passes the limit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaminaMonitor {
    /// Seconds since run was last held
    pub released_for: f32,
    /// Allowed release span in seconds
    pub limit: f32,
}

impl StaminaMonitor {
    pub fn new(limit: f32) -> Self {
        Self {
            released_for: 0.0,
            limit,
        }
    }

    pub fn reset(&mut self) {
        self.released_for = 0.0;
    }

    pub fn tick(&mut self, dt: f32, run_held: bool) {
        if run_held {
            self.released_for = 0.0;
        } else {
            self.released_for += dt;
        }
    }

    /// True once the release span is strictly past the limit
    pub fn exceeded(&self) -> bool {
        self.released_for > self.limit
    }

    /// Remaining stamina as a 0..=1 meter (1 = full)
    pub fn fraction(&self) -> f32 {
        if self.limit <= 0.0 {
            return 0.0;
        }
        ((self.limit - self.released_for) / self.limit).clamp(0.0, 1.0)
    }
}
