//! # Spawn Context
//!
//! Everything `create` is allowed to touch: the runtime's random source and
//! its id generator. Threading them explicitly (instead of a hidden global)
//! is what makes a seeded runtime reproduce the same particles.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::geometry::Point;
use crate::particle::{IdGenerator, Particle};
use crate::timing::{DelayMode, Lifespan};

/// The random source handed to recipes.
pub type EffectRng = ChaCha8Rng;

/// Per-trigger handle to the runtime's shared utilities.
pub struct SpawnContext<'a> {
    rng: &'a mut EffectRng,
    ids: &'a mut IdGenerator,
    delay_mode: DelayMode,
}

impl<'a> SpawnContext<'a> {
    /// Wraps the runtime's random source and id generator.
    pub fn new(rng: &'a mut EffectRng, ids: &'a mut IdGenerator, delay_mode: DelayMode) -> Self {
        Self {
            rng,
            ids,
            delay_mode,
        }
    }

    /// Mints a particle at `position` with the given active lifespan.
    pub fn particle<S>(&mut self, position: Point, max_progress: f32, state: S) -> Particle<S> {
        Particle::new(
            self.ids.next_id(),
            position,
            Lifespan::new(max_progress, self.delay_mode),
            state,
        )
    }

    /// Direct access to the random source.
    pub fn rng(&mut self) -> &mut EffectRng {
        &mut *self.rng
    }

    /// Uniform value in `[low, high)`; returns `low` for an empty or
    /// non-finite range.
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        if high > low && (high - low).is_finite() {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }

    /// Uniform value in `[-spread, spread)`.
    pub fn jitter(&mut self, spread: f32) -> f32 {
        self.range(-spread.abs(), spread.abs())
    }

    /// Uniformly picks one element, `None` if `items` is empty.
    pub fn pick<'c, T>(&mut self, items: &'c [T]) -> Option<&'c T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.rng.gen_range(0..items.len()))
        }
    }

    /// The delay interpretation stamped on new particles.
    #[must_use]
    pub const fn delay_mode(&self) -> DelayMode {
        self.delay_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_draws() {
        let draw = |seed| {
            let mut rng = EffectRng::seed_from_u64(seed);
            let mut ids = IdGenerator::new();
            let mut ctx = SpawnContext::new(&mut rng, &mut ids, DelayMode::Absolute);
            (0..8).map(|_| ctx.range(0.0, 100.0)).collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
        assert_ne!(draw(42), draw(43));
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = EffectRng::seed_from_u64(1);
        let mut ids = IdGenerator::new();
        let mut ctx = SpawnContext::new(&mut rng, &mut ids, DelayMode::Absolute);
        assert!((ctx.range(5.0, 5.0) - 5.0).abs() < f32::EPSILON);
        assert!((ctx.range(5.0, 1.0) - 5.0).abs() < f32::EPSILON);
        assert!(ctx.pick::<u8>(&[]).is_none());
    }

    #[test]
    fn test_particles_get_fresh_ids_and_mode() {
        let mut rng = EffectRng::seed_from_u64(1);
        let mut ids = IdGenerator::new();
        let mut ctx = SpawnContext::new(&mut rng, &mut ids, DelayMode::PerTick);
        let a = ctx.particle(Point::ZERO, 10.0, ());
        let b = ctx.particle(Point::ZERO, 10.0, ());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.lifespan().mode(), DelayMode::PerTick);
    }
}
