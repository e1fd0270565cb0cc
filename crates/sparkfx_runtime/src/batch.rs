//! Type erasure between typed recipes and the heterogeneous active set.
//!
//! Every [`Effect`] has its own particle state type. The catalog stores
//! recipes as `Arc<dyn DynEffect>`; spawning yields a boxed
//! [`ParticleBatch`] that keeps the typed particles next to the recipe that
//! owns them, so particles can never migrate between instances.

use std::sync::Arc;

use sparkfx_core::{Effect, EffectMeta, EffectOptions, Particle, ParticleId, Point, SpawnContext, Surface};

/// Object-safe view of an [`Effect`].
pub trait DynEffect: Send + Sync {
    /// Declarative metadata.
    fn meta(&self) -> &EffectMeta;

    /// Calls `create` and wraps the result in a batch.
    fn spawn(
        self: Arc<Self>,
        origin: Point,
        options: &EffectOptions,
        ctx: &mut SpawnContext<'_>,
    ) -> Box<dyn ParticleBatch>;
}

impl<E: Effect> DynEffect for E {
    fn meta(&self) -> &EffectMeta {
        Effect::meta(self)
    }

    fn spawn(
        self: Arc<Self>,
        origin: Point,
        options: &EffectOptions,
        ctx: &mut SpawnContext<'_>,
    ) -> Box<dyn ParticleBatch> {
        let particles = self.create(origin, options, ctx);
        Box::new(Batch {
            effect: self,
            particles,
        })
    }
}

/// The live particles of one instance, with the recipe that drives them.
pub trait ParticleBatch {
    /// Live particle count.
    fn len(&self) -> usize;

    /// `true` once every particle has finished.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Updates every particle once, in creation order, dropping finished ones.
    /// Returns how many were dropped.
    fn advance(&mut self, delta: f32) -> usize;

    /// Draws every particle in creation order.
    fn render(&self, surface: &mut dyn Surface);

    /// Ids of the live particles, in creation order.
    fn particle_ids(&self) -> Vec<ParticleId>;
}

struct Batch<E: Effect> {
    effect: Arc<E>,
    particles: Vec<Particle<E::State>>,
}

impl<E: Effect> ParticleBatch for Batch<E> {
    fn len(&self) -> usize {
        self.particles.len()
    }

    fn advance(&mut self, delta: f32) -> usize {
        let before = self.particles.len();
        let effect = &self.effect;
        // retain_mut visits each element exactly once, in order.
        self.particles
            .retain_mut(|particle| effect.update(particle, delta).is_continue());
        before - self.particles.len()
    }

    fn render(&self, surface: &mut dyn Surface) {
        for particle in &self.particles {
            surface.begin_particle(particle.id());
            surface.save();
            self.effect.draw(surface, particle);
            surface.restore();
        }
    }

    fn particle_ids(&self) -> Vec<ParticleId> {
        self.particles.iter().map(Particle::id).collect()
    }
}
