//! Procedural obstacle spawning
//!
//! The spawn countdown is measured in scroll distance, not time, so slowing
//! down does not buy extra room between obstacles. The interval shrinks with
//! travelled distance until the ramp term hits its cap.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::rng::RandomSource;
use super::state::{Obstacle, Viewport};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Scroll distance left until the next spawn
    pub timer: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self { timer: 0.0 }
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    /// Consume `scroll` from the countdown, spawning at most one obstacle.
    ///
    /// Random draws happen in a fixed order: interval, then height, then width.
    pub fn tick(
        &mut self,
        scroll: f32,
        distance: f32,
        viewport: &Viewport,
        tuning: &Tuning,
        rng: &mut dyn RandomSource,
        obstacles: &mut Vec<Obstacle>,
    ) -> Option<Rect> {
        self.timer -= scroll;
        if self.timer > 0.0 {
            return None;
        }
        self.timer = next_interval(distance, tuning, rng);
        let obstacle = spawn_obstacle(viewport, tuning, rng);
        let rect = obstacle.rect;
        obstacles.push(obstacle);
        Some(rect)
    }
}

/// Distance until the next spawn
pub fn next_interval(distance: f32, tuning: &Tuning, rng: &mut dyn RandomSource) -> f32 {
    let ramp = (distance / tuning.spawn_distance_divisor).min(tuning.spawn_ramp_cap);
    tuning.spawn_base + rng.next_unit() * tuning.spawn_jitter - ramp
}

/// A new obstacle standing on the ground just past the right edge
pub fn spawn_obstacle(viewport: &Viewport, tuning: &Tuning, rng: &mut dyn RandomSource) -> Obstacle {
    let h = rng.next_in(tuning.obstacle_min_height, tuning.obstacle_height_span);
    let w = rng.next_in(tuning.obstacle_min_width, tuning.obstacle_width_span);
    let x = viewport.width + tuning.spawn_margin;
    let y = viewport.ground_y(tuning) - h;
    Obstacle {
        rect: Rect::new(x, y, w, h),
    }
}
