//! Minimal recipe for unit tests: `count` particles at the origin, each
//! drifting right by one unit per active tick.

use sparkfx_core::{
    Color, Effect, EffectMeta, EffectOptions, Particle, Point, SpawnContext, Surface,
};

pub(crate) struct Stub {
    meta: EffectMeta,
    count: usize,
    max_progress: f32,
    delay: f32,
}

impl Stub {
    pub(crate) fn new(name: &str, count: usize, max_progress: f32) -> Self {
        Self {
            meta: EffectMeta::new(name),
            count,
            max_progress,
            delay: 0.0,
        }
    }

    pub(crate) fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

impl Effect for Stub {
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
        (0..self.count)
            .map(|_| {
                ctx.particle(origin, self.max_progress, ())
                    .with_delay(self.delay)
            })
            .collect()
    }

    fn animate(&self, particle: &mut Particle<()>, _t: f32, _delta: f32) {
        particle.translate(1.0, 0.0);
    }

    fn draw(&self, surface: &mut dyn Surface, particle: &Particle<()>) {
        surface.fill_circle(
            particle.position(),
            2.0,
            Color::WHITE.with_opacity(particle.alpha()),
        );
    }
}
