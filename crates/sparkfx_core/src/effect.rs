//! # Effect Descriptors
//!
//! An [`Effect`] is an immutable, named recipe with three operations:
//!
//! | Operation | Receives | May mutate |
//! |-----------|----------|------------|
//! | `create`  | origin, options, [`SpawnContext`] | nothing but the RNG / id generator |
//! | `update`  | `&mut Particle`, delta | that particle only |
//! | `draw`    | `&mut dyn Surface`, `&Particle` | the surface only |
//!
//! The default `update` implements the shared timing convention: it steps
//! the [`Lifespan`](crate::Lifespan), skips the recipe while dormant, and
//! otherwise calls [`Effect::animate`] and [`Effect::envelope`] with the
//! normalized time. Recipes normally override only those two hooks.

use crate::color::Color;
use crate::geometry::Point;
use crate::options::EffectOptions;
use crate::particle::Particle;
use crate::spawn::SpawnContext;
use crate::surface::Surface;
use crate::timing::Phase;

/// Outcome of one `update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep the particle.
    Continue,
    /// Remove the particle; it must never be updated or drawn again.
    Finished,
}

impl Step {
    /// `true` for [`Step::Continue`].
    #[inline]
    #[must_use]
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }
}

/// Declarative metadata, read by hosts for pickers and tooltips.
///
/// Has no effect on runtime behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectMeta {
    /// Catalog key, e.g. `"confetti"`.
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// One-line description.
    pub description: String,
    /// Palette used when the trigger supplies none.
    pub palette: Vec<Color>,
    /// Baseline intensity the recipe was tuned for.
    pub base_intensity: f32,
}

impl EffectMeta {
    /// Metadata with the label defaulting to the name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            description: String::new(),
            palette: vec![Color::WHITE],
            base_intensity: 1.0,
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the default palette. An empty palette keeps the previous one.
    #[must_use]
    pub fn palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        let palette: Vec<Color> = palette.into_iter().collect();
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Sets the base intensity.
    #[must_use]
    pub fn base_intensity(mut self, intensity: f32) -> Self {
        self.base_intensity = intensity;
        self
    }
}

/// A named, reusable visual effect.
pub trait Effect: Send + Sync + 'static {
    /// Recipe-owned per-particle attributes.
    type State: 'static;

    /// Declarative metadata.
    fn meta(&self) -> &EffectMeta;

    /// Spawns the initial particle batch around `origin`.
    ///
    /// Must return a finite (typically small) list. May use `ctx` for
    /// randomness and ids; must not touch any other shared state.
    fn create(
        &self,
        origin: Point,
        options: &EffectOptions,
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Self::State>>;

    /// Advances one particle by one tick.
    ///
    /// Never called again for a particle after it returned [`Step::Finished`].
    fn update(&self, particle: &mut Particle<Self::State>, delta: f32) -> Step {
        match particle.step(delta) {
            Phase::Dormant => Step::Continue,
            Phase::Expired => Step::Finished,
            Phase::Active(t) => {
                self.animate(particle, t, delta);
                let alpha = self.envelope(particle, t);
                particle.set_alpha(alpha);
                Step::Continue
            }
        }
    }

    /// Moves / reshapes an active particle. Default: stationary.
    fn animate(&self, _particle: &mut Particle<Self::State>, _t: f32, _delta: f32) {}

    /// Opacity at normalized time `t`. Default: linear fade-out.
    fn envelope(&self, _particle: &Particle<Self::State>, t: f32) -> f32 {
        1.0 - t
    }

    /// Paints one particle. Must not depend on being called once per tick.
    fn draw(&self, surface: &mut dyn Surface, particle: &Particle<Self::State>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::IdGenerator;
    use crate::spawn::EffectRng;
    use crate::surface::RecordingSurface;
    use crate::timing::DelayMode;
    use rand::SeedableRng;

    struct Drift {
        meta: EffectMeta,
    }

    impl Effect for Drift {
        type State = f32;

        fn meta(&self) -> &EffectMeta {
            &self.meta
        }

        fn create(
            &self,
            origin: Point,
            _options: &EffectOptions,
            ctx: &mut SpawnContext<'_>,
        ) -> Vec<Particle<f32>> {
            vec![ctx.particle(origin, 4.0, 1.5).with_delay(2.0)]
        }

        fn animate(&self, particle: &mut Particle<f32>, _t: f32, delta: f32) {
            particle.translate(particle.state * delta, 0.0);
        }

        fn envelope(&self, _particle: &Particle<f32>, _t: f32) -> f32 {
            // Deliberately out of range; set_alpha must clamp it.
            2.0
        }

        fn draw(&self, surface: &mut dyn Surface, particle: &Particle<f32>) {
            surface.fill_circle(particle.position(), 1.0, Color::WHITE.with_opacity(particle.alpha()));
        }
    }

    #[test]
    fn test_default_update_follows_timing_convention() {
        let effect = Drift {
            meta: EffectMeta::new("drift"),
        };
        let mut rng = EffectRng::seed_from_u64(0);
        let mut ids = IdGenerator::new();
        let mut ctx = SpawnContext::new(&mut rng, &mut ids, DelayMode::Absolute);
        let mut particles = effect.create(Point::new(10.0, 10.0), &EffectOptions::new(), &mut ctx);
        let p = &mut particles[0];

        // Dormant for one tick: no movement.
        assert_eq!(effect.update(p, 1.0), Step::Continue);
        assert_eq!(p.position(), Point::new(10.0, 10.0));
        assert!(p.alpha().abs() < f32::EPSILON);

        // Active from progress 2 through 5; t hits 1 at progress 6.
        for _ in 0..4 {
            assert_eq!(effect.update(p, 1.0), Step::Continue);
            assert!((p.alpha() - 1.0).abs() < f32::EPSILON);
        }
        assert!((p.position().x - 16.0).abs() < 1e-5);
        assert_eq!(effect.update(p, 1.0), Step::Finished);

        let mut surface = RecordingSurface::new();
        effect.draw(&mut surface, p);
        assert_eq!(surface.paint_count(), 1);
    }

    #[test]
    fn test_meta_builder_keeps_palette_on_empty() {
        let meta = EffectMeta::new("x")
            .palette([Color::rgb(1, 2, 3)])
            .palette(Vec::new())
            .label("X");
        assert_eq!(meta.palette, vec![Color::rgb(1, 2, 3)]);
        assert_eq!(meta.label, "X");
        assert_eq!(meta.name, "x");
    }
}
