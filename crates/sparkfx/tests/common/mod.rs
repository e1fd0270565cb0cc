//! Shared fixtures for the integration tests.

#![allow(dead_code, missing_docs)]

use sparkfx::{
    Color, Effect, EffectCatalog, EffectMeta, EffectOptions, Particle, Point, Runtime,
    RuntimeConfig, SpawnContext, Surface,
};

/// Timing of one probe particle.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub delay: f32,
    pub max_progress: f32,
}

pub const fn timing(delay: f32, max_progress: f32) -> Timing {
    Timing {
        delay,
        max_progress,
    }
}

/// Deterministic effect: one particle per [`Timing`], each moving one unit
/// right per active tick. Drawing reports the particle's alpha and position.
pub struct Probe {
    meta: EffectMeta,
    particles: Vec<Timing>,
    envelope_gain: f32,
}

impl Probe {
    pub fn new(name: &str, particles: Vec<Timing>) -> Self {
        Self {
            meta: EffectMeta::new(name),
            particles,
            envelope_gain: 1.0,
        }
    }

    /// Scales the fade-out envelope, pushing raw alpha outside `[0, 1]`.
    pub fn overdriven(mut self, gain: f32) -> Self {
        self.envelope_gain = gain;
        self
    }
}

impl Effect for Probe {
    type State = ();

    fn meta(&self) -> &EffectMeta {
        &self.meta
    }

    fn create(
        &self,
        origin: Point,
        _options: &EffectOptions,
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<()>> {
        self.particles
            .iter()
            .map(|t| ctx.particle(origin, t.max_progress, ()).with_delay(t.delay))
            .collect()
    }

    fn animate(&self, particle: &mut Particle<()>, _t: f32, _delta: f32) {
        particle.translate(1.0, 0.0);
    }

    fn envelope(&self, _particle: &Particle<()>, t: f32) -> f32 {
        self.envelope_gain * (1.0 - t) - (self.envelope_gain - 1.0) * 0.5
    }

    fn draw(&self, surface: &mut dyn Surface, particle: &Particle<()>) {
        surface.set_global_alpha(particle.alpha());
        surface.fill_circle(particle.position(), 1.0, Color::WHITE);
    }
}

/// A seeded runtime holding the given probes.
pub fn probe_runtime(probes: Vec<Probe>, config: RuntimeConfig) -> Runtime {
    let mut catalog = EffectCatalog::new();
    for probe in probes {
        catalog.register(probe).unwrap();
    }
    Runtime::new(catalog, config).unwrap()
}
