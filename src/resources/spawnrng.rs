//! Random source for spawning heads.
//!
//! Kept as a resource instead of a system `Local` so that the merge policy,
//! which runs with exclusive world access, can share it and so a `--seed`
//! makes a whole run reproducible.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug)]
pub struct SpawnRng(pub Rng);

impl Default for SpawnRng {
    fn default() -> Self {
        Self(Rng::new())
    }
}

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }

    /// Uniform sample in `[min, max)`. Returns `min` for an empty range.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        let span = max - min;
        if span < f32::EPSILON {
            return min;
        }
        min + self.0.f32() * span
    }

    /// `1.0` or `-1.0` with equal probability.
    pub fn sign(&mut self) -> f32 {
        if self.0.bool() { 1.0 } else { -1.0 }
    }
}
