//! # Recipes
//!
//! A [`Recipe`] is an [`Effect`] assembled from four parts:
//!
//! ```text
//! Spawner  ──create──►  Vec<Particle<Sprite>>
//! Motion   ──animate─►  position / size / rotation
//! Envelope ──alpha───►  opacity over normalized time
//! Painter  ──draw────►  Surface calls
//! ```
//!
//! Built-in effects are recipes; hosts can build their own the same way and
//! register them next to the built-ins.

use std::fmt;

use sparkfx_core::{
    Effect, EffectMeta, EffectOptions, Envelope, Particle, Point, SpawnContext, Surface,
};

use crate::motion::Motion;
use crate::painter::Painter;
use crate::spawner::Spawner;
use crate::sprite::Sprite;

/// A data-driven effect.
pub struct Recipe {
    meta: EffectMeta,
    spawner: Box<dyn Spawner>,
    motion: Motion,
    painter: Painter,
    envelope: Envelope,
}

impl Recipe {
    /// A recipe of still, fading dots spawned by `spawner`.
    #[must_use]
    pub fn new(meta: EffectMeta, spawner: impl Spawner + 'static) -> Self {
        Self {
            meta,
            spawner: Box::new(spawner),
            motion: Motion::Still,
            painter: Painter::Dot,
            envelope: Envelope::default(),
        }
    }

    /// Sets the motion rule.
    #[must_use]
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    /// Sets the painter.
    #[must_use]
    pub fn with_painter(mut self, painter: Painter) -> Self {
        self.painter = painter;
        self
    }

    /// Sets the opacity envelope.
    #[must_use]
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// The motion rule.
    #[must_use]
    pub const fn motion(&self) -> Motion {
        self.motion
    }

    /// The painter.
    #[must_use]
    pub const fn painter(&self) -> Painter {
        self.painter
    }

    /// The opacity envelope.
    #[must_use]
    pub const fn opacity_envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl Effect for Recipe {
    type State = Sprite;

    fn meta(&self) -> &EffectMeta {
        &self.meta
    }

    fn create(
        &self,
        origin: Point,
        options: &EffectOptions,
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Sprite>> {
        let palette = options.palette(&self.meta.palette);
        self.spawner.spawn(origin, options, palette, ctx)
    }

    fn animate(&self, particle: &mut Particle<Sprite>, t: f32, delta: f32) {
        self.motion.apply(particle, t, delta);
    }

    fn envelope(&self, particle: &Particle<Sprite>, t: f32) -> f32 {
        match self.envelope {
            // Each twinkling particle runs its own oscillator.
            Envelope::Twinkle { frequency, phase } => Envelope::Twinkle {
                frequency,
                phase: phase + particle.state.phase,
            }
            .alpha(t),
            ref envelope => envelope.alpha(t),
        }
    }

    fn draw(&self, surface: &mut dyn Surface, particle: &Particle<Sprite>) {
        self.painter.paint(surface, particle);
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("name", &self.meta.name)
            .field("motion", &self.motion)
            .field("painter", &self.painter)
            .field("envelope", &self.envelope)
            .finish_non_exhaustive()
    }
}
