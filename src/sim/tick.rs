//! Per-frame simulation step
//!
//! Core game loop that advances the run by one host frame. Order matters:
//! stamina, then physics, then scroll/score, then spawning, then obstacles.

use serde::{Deserialize, Serialize};

use super::physics::{integrate, ramp_speed, scroll_delta};
use super::rect::Rect;
use super::rng::RandomSource;
use super::state::{GameOverReason, GamePhase, GameState, Obstacle};

/// Logical input flags for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump (space/up/tap); ignored unless on the ground
    pub jump_requested: bool,
    /// Run held (shift/run button)
    pub run_held: bool,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    Jumped,
    Spawned(Rect),
    /// Floored distance passed the stored best
    NewBest(u64),
    GameOver(GameOverReason),
}

/// Advance the game by `dt` seconds. No-op while game over.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut dyn RandomSource,
) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }
    // Negative or NaN dt counts as a zero-length frame
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    // Stamina
    let running = input.run_held;
    state.player.running = running;
    state.stamina.tick(dt, running);
    if state.stamina.exceeded() {
        state.end_run(GameOverReason::OutOfStamina);
        log::info!("Game over ({}) at {}", GameOverReason::OutOfStamina.message(), state.score());
        events.push(TickEvent::GameOver(GameOverReason::OutOfStamina));
        return events;
    }

    // Vertical motion
    let ground_y = state.ground_y();
    if integrate(&mut state.player, dt, input.jump_requested, ground_y, &state.tuning) {
        events.push(TickEvent::Jumped);
    }

    // Scroll and score
    state.speed = ramp_speed(state.speed, dt, &state.tuning);
    let scroll = scroll_delta(state.speed, dt, running, &state.tuning);
    state.distance += scroll;
    let score = state.score();
    if score > state.best {
        state.best = score;
        events.push(TickEvent::NewBest(score));
    }

    // Spawning
    if let Some(rect) = state.spawner.tick(
        scroll,
        state.distance,
        &state.viewport,
        &state.tuning,
        rng,
        &mut state.obstacles,
    ) {
        log::debug!("Spawned {}x{} obstacle at x={}", rect.size.x, rect.size.y, rect.pos.x);
        events.push(TickEvent::Spawned(rect));
    }

    // Obstacles
    let player = state.player.rect();
    if scroll_obstacles(&mut state.obstacles, &player, scroll, state.tuning.despawn_x) {
        state.end_run(GameOverReason::Collision);
        log::info!("Game over ({}) at {}", GameOverReason::Collision.message(), state.score());
        events.push(TickEvent::GameOver(GameOverReason::Collision));
    }

    events
}

/// Shift every obstacle left by `scroll` and check it against the player.
///
/// Returns true on the first hit, leaving the list untouched past that
/// point. Otherwise drops obstacles whose right edge passed `despawn_x`.
pub fn scroll_obstacles(
    obstacles: &mut Vec<Obstacle>,
    player: &Rect,
    scroll: f32,
    despawn_x: f32,
) -> bool {
    for obstacle in obstacles.iter_mut() {
        obstacle.rect.pos.x -= scroll;
        if obstacle.rect.overlaps(player) {
            return true;
        }
    }
    obstacles.retain(|o| o.rect.right() >= despawn_x);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const DT: f32 = 0.016;

    fn spawning_state() -> GameState {
        GameState::new(Tuning::default(), Viewport::new(800.0, 600.0), 0)
    }

    /// A run that never reaches its next spawn
    fn new_state() -> GameState {
        let mut state = spawning_state();
        state.spawner.timer = 1.0e9;
        state
    }

    fn run() -> TickInput {
        TickInput {
            run_held: true,
            ..Default::default()
        }
    }

    fn quiet_rng() -> ScriptedRng {
        ScriptedRng::constant(0.0)
    }

    #[test]
    fn test_scroll_scenario_one_second() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        tick(&mut state, &run(), 1.0, &mut rng);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.speed, 222.0);
        assert!((state.distance - 266.4).abs() < 1e-3);
    }

    #[test]
    fn test_walking_scrolls_slower() {
        let mut running = new_state();
        let mut walking = new_state();
        let mut rng = quiet_rng();
        tick(&mut running, &run(), 0.5, &mut rng);
        tick(&mut walking, &TickInput::default(), 0.5, &mut rng);
        assert!((running.distance - 2.0 * walking.distance).abs() < 1e-3);
    }

    #[test]
    fn test_jump_scenario() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        let y0 = state.player.pos.y;
        let events = tick(
            &mut state,
            &TickInput {
                jump_requested: true,
                run_held: true,
            },
            DT,
            &mut rng,
        );
        assert!(events.contains(&TickEvent::Jumped));
        assert!(!state.player.on_ground);
        assert!(state.player.pos.y < y0);
    }

    #[test]
    fn test_stamina_loss_at_first_frame_past_limit() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        let idle = TickInput::default();
        // 0.25 is exact in binary: 1.25 after five frames, 1.5 after six
        for _ in 0..5 {
            tick(&mut state, &idle, 0.25, &mut rng);
            assert_eq!(state.phase, GamePhase::Running);
        }
        let events = tick(&mut state, &idle, 0.25, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(events, vec![TickEvent::GameOver(GameOverReason::OutOfStamina)]);
        assert_eq!(state.message(), Some("ran out of stamina"));
    }

    #[test]
    fn test_stamina_scenario_ten_slow_frames() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        let idle = TickInput::default();

        // First frame whose accumulated f32 time passes the limit
        let mut total = 0.0f32;
        let mut expected = 0;
        for frame in 1..=10 {
            total += 0.2f32;
            if total > 1.4 {
                expected = frame;
                break;
            }
        }
        assert!(expected > 0);

        let mut over_at = None;
        for frame in 1..=10 {
            tick(&mut state, &idle, 0.2, &mut rng);
            if over_at.is_none() && state.phase == GamePhase::GameOver {
                over_at = Some(frame);
            }
        }
        assert_eq!(over_at, Some(expected));
    }

    #[test]
    fn test_stamina_loss_freezes_frame() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        state.stamina.released_for = 1.39;
        let distance = state.distance;
        let speed = state.speed;
        tick(&mut state, &TickInput::default(), 0.05, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.distance, distance);
        assert_eq!(state.speed, speed);
    }

    #[test]
    fn test_holding_run_resets_stamina() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        for _ in 0..20 {
            tick(&mut state, &TickInput::default(), 0.05, &mut rng);
        }
        assert!(state.stamina.released_for > 0.9);
        tick(&mut state, &run(), 0.05, &mut rng);
        assert_eq!(state.stamina.released_for, 0.0);
        assert!(state.player.running);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        state.spawner.timer = 1.0e9;
        let player = state.player.rect();
        state.obstacles.push(Obstacle {
            rect: Rect::new(player.right() + 1.0, player.top(), 20.0, player.size.y),
        });
        let events = tick(&mut state, &run(), DT, &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&TickEvent::GameOver(GameOverReason::Collision)));
        assert_eq!(state.message(), Some("the cat fell"));
    }

    #[test]
    fn test_game_over_is_frozen() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        state.end_run(GameOverReason::Collision);
        let before = state.clone();
        let events = tick(&mut state, &run(), DT, &mut rng);
        assert!(events.is_empty());
        assert_eq!(state.distance, before.distance);
        assert_eq!(state.player, before.player);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        tick(&mut state, &run(), 0.5, &mut rng);
        state.end_run(GameOverReason::Collision);
        state.reset();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.distance, 0.0);
        tick(&mut state, &run(), DT, &mut rng);
        assert!(state.distance > 0.0);
    }

    #[test]
    fn test_new_best_reported_once_per_improvement() {
        let mut state = new_state();
        state.best = 100;
        let mut rng = quiet_rng();
        // About 66 units per quarter second: not yet past 100
        let events = tick(&mut state, &run(), 0.25, &mut rng);
        assert!(!events.iter().any(|e| matches!(e, TickEvent::NewBest(_))));
        assert_eq!(state.best, 100);
        let events = tick(&mut state, &run(), 0.25, &mut rng);
        assert!(events.iter().any(|e| matches!(e, TickEvent::NewBest(_))));
        assert_eq!(state.best, state.score());
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut state = new_state();
        let mut rng = quiet_rng();
        let before = state.clone();
        tick(&mut state, &TickInput::default(), -1.0, &mut rng);
        tick(&mut state, &TickInput::default(), f32::NAN, &mut rng);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.distance, before.distance);
        assert_eq!(state.stamina.released_for, 0.0);
    }

    #[test]
    fn test_first_frame_spawns_past_right_edge() {
        let mut state = spawning_state();
        let mut rng = ScriptedRng::constant(0.5);
        let events = tick(&mut state, &run(), DT, &mut rng);
        let spawned = events.iter().find_map(|e| match e {
            TickEvent::Spawned(r) => Some(*r),
            _ => None,
        });
        assert_eq!(spawned.map(|r| r.pos.x), Some(860.0));
        assert_eq!(state.obstacles.len(), 1);
        // Scrolled once in the same frame
        assert!(state.obstacles[0].rect.pos.x < 860.0);
    }

    #[test]
    fn test_obstacle_removed_after_full_crossing() {
        // Player out of the way so only scrolling matters
        let player = Rect::new(80.0, -1000.0, 44.0, 44.0);
        let width = 800.0;
        let mut obstacles = vec![Obstacle {
            rect: Rect::new(width + 60.0, 432.0, 18.0, 36.0),
        }];
        // Right edge 878 - (width + 300) = -222 after the full distance
        let step = (width + 300.0) / 10.0;
        for i in 0..10 {
            assert_eq!(obstacles.len(), 1, "removed early at step {i}");
            assert!(!scroll_obstacles(&mut obstacles, &player, step, -200.0));
        }
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_obstacle_kept_while_right_edge_at_cutoff() {
        let player = Rect::new(80.0, -1000.0, 44.0, 44.0);
        let mut obstacles = vec![Obstacle {
            rect: Rect::new(-220.0, 432.0, 20.0, 36.0),
        }];
        assert!(!scroll_obstacles(&mut obstacles, &player, 0.0, -200.0));
        assert_eq!(obstacles.len(), 1);
        assert!(!scroll_obstacles(&mut obstacles, &player, 0.5, -200.0));
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state();
        let mut state2 = new_state();
        let mut rng1 = crate::sim::rng::seeded(99999);
        let mut rng2 = crate::sim::rng::seeded(99999);
        let inputs = [
            run(),
            TickInput {
                jump_requested: true,
                run_held: true,
            },
            TickInput::default(),
            run(),
        ];
        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input, DT, &mut rng1);
                tick(&mut state2, input, DT, &mut rng2);
            }
        }
        assert_eq!(state1.distance, state2.distance);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.phase, state2.phase);
    }

    proptest! {
        #[test]
        fn prop_distance_and_best_monotonic(
            seed in any::<u64>(),
            frames in proptest::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..0.05), 1..300),
        ) {
            let mut state = spawning_state();
            let mut rng = crate::sim::rng::seeded(seed);
            for (jump, run, dt) in frames {
                let distance = state.distance;
                let best = state.best;
                tick(&mut state, &TickInput { jump_requested: jump, run_held: run }, dt, &mut rng);
                prop_assert!(state.distance >= distance);
                prop_assert!(state.best >= best);
                let rest = state.player.rest_y(state.ground_y());
                prop_assert!(state.player.pos.y >= 0.0 && state.player.pos.y <= rest);
            }
        }
    }
}
