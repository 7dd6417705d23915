//! Demo autopilot
//!
//! Plays from snapshots alone, the same view a renderer gets. Always holds
//! run and times jumps so the cat peaks over the next obstacle. Used by the
//! headless binary and for attract mode.

use crate::sim::{Rect, Snapshot, TickInput};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Autopilot {
    gravity: f32,
    jump_speed: f32,
    run_scroll_factor: f32,
}

impl Autopilot {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            gravity: tuning.gravity,
            jump_speed: -tuning.jump_velocity,
            run_scroll_factor: tuning.run_scroll_factor,
        }
    }

    /// Input for the next frame
    pub fn decide(&self, snapshot: &Snapshot) -> TickInput {
        let jump_requested = snapshot.is_alive()
            && self
                .next_obstacle(snapshot)
                .is_some_and(|o| self.should_jump(snapshot, o));
        TickInput {
            jump_requested,
            run_held: true,
        }
    }

    /// Nearest obstacle not yet fully behind the player
    fn next_obstacle<'a>(&self, snapshot: &'a Snapshot) -> Option<&'a Rect> {
        let player_left = snapshot.player.left();
        snapshot
            .obstacles
            .iter()
            .filter(|o| o.right() > player_left)
            .min_by(|a, b| a.left().total_cmp(&b.left()))
    }

    /// Jump so the apex lands over the obstacle's centre
    fn should_jump(&self, snapshot: &Snapshot, obstacle: &Rect) -> bool {
        let player = &snapshot.player;
        if obstacle.left() < player.right() {
            // Already alongside it
            return false;
        }
        let scroll_speed = snapshot.speed as f32 * self.run_scroll_factor;
        let centre_gap =
            (obstacle.left() + obstacle.size.x / 2.0) - (player.left() + player.size.x / 2.0);
        centre_gap <= scroll_speed * self.apex_time()
    }

    /// Seconds from takeoff to the top of the jump
    fn apex_time(&self) -> f32 {
        if self.gravity > 0.0 {
            self.jump_speed / self.gravity
        } else {
            0.0
        }
    }
}
