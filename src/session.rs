//! Host frame loop adapter
//!
//! Sits between the display-refresh callback and the simulation: turns
//! timestamps into a clamped dt, runs the tick while alive, forwards new
//! best scores to the store and handles the restart gesture.

use rand_pcg::Pcg32;

use crate::best::BestStore;
use crate::sim::{
    GamePhase, GameState, RandomSource, Snapshot, TickEvent, TickInput, Viewport, tick,
};
use crate::tuning::Tuning;

/// Converts frame timestamps (ms) into simulation steps
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Seconds since the previous frame, clamped to [0, max_dt].
    /// The first frame yields 0.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        }
    }
}

/// One player's game plus its collaborators
pub struct Session<S: BestStore, R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
    store: S,
    clock: FrameClock,
}

impl<S: BestStore, R: RandomSource> Session<S, R> {
    pub fn new(tuning: Tuning, viewport: Viewport, store: S, rng: R) -> Self {
        let best = store.read_best();
        let clock = FrameClock::new(tuning.max_frame_dt);
        log::info!("Starting run (best {})", best);
        Self {
            state: GameState::new(tuning, viewport, best),
            rng,
            store,
            clock,
        }
    }

    /// Display-refresh entry point: step by the time since the last frame
    pub fn frame(&mut self, now_ms: f64, input: &TickInput) -> Snapshot {
        let dt = self.clock.delta(now_ms);
        self.step(dt, input);
        self.snapshot()
    }

    /// Advance by `dt` (clamped to the frame ceiling)
    pub fn step(&mut self, dt: f32, input: &TickInput) -> Vec<TickEvent> {
        let max_dt = self.state.tuning.max_frame_dt;
        let dt = if dt.is_finite() { dt.clamp(0.0, max_dt) } else { 0.0 };
        let events = tick(&mut self.state, input, dt, &mut self.rng);
        for event in &events {
            if let TickEvent::NewBest(best) = event {
                self.store.write_best(*best);
            }
        }
        events
    }

    /// Restart gesture; only honoured after a loss
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            return false;
        }
        self.state.reset();
        log::info!("Restarted (best {})", self.state.best);
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.state.set_viewport(viewport);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
