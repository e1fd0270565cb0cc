//! # SparkFX Core
//!
//! The contract every effect recipe and the runtime share.
//!
//! ## What lives here
//!
//! 1. **Particles** - [`Particle`] owns position, timing and opacity; the
//!    recipe owns everything else through the generic `state` field.
//! 2. **Timing** - [`Lifespan`] turns elapsed ticks into a [`Phase`]
//!    (dormant, active at normalized time `t`, or expired).
//! 3. **Envelopes** - [`Envelope`] maps `t` to an opacity in `[0, 1]`.
//! 4. **Effects** - the [`Effect`] trait (`create` / `update` / `draw`)
//!    plus declarative [`EffectMeta`].
//! 5. **Surfaces** - the [`Surface`] trait recipes paint on.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sparkfx_core::{Effect, Envelope, Particle, Point, SpawnContext};
//!
//! struct Dot(EffectMeta);
//!
//! impl Effect for Dot {
//!     type State = f32; // radius
//!     fn meta(&self) -> &EffectMeta { &self.0 }
//!     fn create(&self, origin: Point, _: &EffectOptions, ctx: &mut SpawnContext<'_>)
//!         -> Vec<Particle<f32>> {
//!         vec![ctx.particle(origin, 30.0, 4.0)]
//!     }
//!     fn draw(&self, surface: &mut dyn Surface, p: &Particle<f32>) {
//!         surface.fill_circle(p.position(), p.state, Color::WHITE.with_opacity(p.alpha()));
//!     }
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod effect;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod options;
pub mod particle;
pub mod spawn;
pub mod surface;
pub mod timing;

pub use color::Color;
pub use effect::{Effect, EffectMeta, Step};
pub use envelope::Envelope;
pub use error::{CoreError, CoreResult};
pub use geometry::{Point, Rect};
pub use options::{EffectOptions, OptionValue, MAX_INTENSITY};
pub use particle::{IdGenerator, Particle, ParticleId};
pub use spawn::{EffectRng, SpawnContext};
pub use surface::{BlendMode, DrawCommand, RecordingSurface, Surface};
pub use timing::{DelayMode, Lifespan, Phase};
