//! Vertical integration and horizontal scroll
//!
//! Semi-implicit Euler: velocity first, then position, then ground clamp.
//! The caller bounds dt (see `Tuning::max_frame_dt`); a huge step can carry
//! the player through a thin obstacle.

use super::state::Player;
use crate::tuning::Tuning;

/// Advance the player by `dt`. Returns true if a jump started this step.
pub fn integrate(
    player: &mut Player,
    dt: f32,
    jump_requested: bool,
    ground_y: f32,
    tuning: &Tuning,
) -> bool {
    let jumped = jump_requested && player.on_ground;
    if jumped {
        player.vy = tuning.jump_velocity;
        player.on_ground = false;
    }

    player.vy += tuning.gravity * dt;
    player.pos.y += player.vy * dt;

    let rest_y = player.rest_y(ground_y);
    if player.pos.y >= rest_y {
        player.place_on_ground(ground_y);
    } else {
        player.on_ground = false;
        // Ceiling: never leave the top of the viewport
        if player.pos.y < 0.0 {
            player.pos.y = 0.0;
            player.vy = player.vy.max(0.0);
        }
    }

    jumped
}

/// Baseline speed after `dt` of perpetual acceleration
#[inline]
pub fn ramp_speed(speed: f32, dt: f32, tuning: &Tuning) -> f32 {
    speed + tuning.speed_ramp * dt
}

/// World scroll for this step
#[inline]
pub fn scroll_delta(speed: f32, dt: f32, running: bool, tuning: &Tuning) -> f32 {
    speed * dt * tuning.scroll_factor(running)
}
