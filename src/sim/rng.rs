//! Injectable randomness for spawning
//!
//! The simulation only ever asks for uniform samples in [0, 1). Production
//! runs use a seeded PCG stream; tests script the exact sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform samples in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in [min, min + span)
    fn next_in(&mut self, min: f32, span: f32) -> f32 {
        min + self.next_unit() * span
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded production RNG
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always returns the same sample
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        // Keep the [0, 1) contract even for sloppy scripts
        v.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
