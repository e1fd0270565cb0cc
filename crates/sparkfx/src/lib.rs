//! # SparkFX
//!
//! Short-lived decorative particle effects for interactive surfaces.
//!
//! ```text
//! host event ──trigger(name, x, y, options)──► Runtime ──► EffectInstance
//!                                                │            │
//! host frame ──advance(delta)────────────────────┤      Particle<S> × N
//!            ──render(&mut dyn Surface)──────────┘
//! ```
//!
//! This crate re-exports the contract ([`sparkfx_core`]), the orchestrator
//! ([`sparkfx_runtime`]) and the recipe framework ([`sparkfx_effects`]), and
//! adds a tiny-skia backed [`raster::PixmapSurface`] behind the `raster`
//! feature.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sparkfx::{builtin_runtime, EffectOptions, RecordingSurface, RuntimeConfig};
//!
//! let mut runtime = builtin_runtime(RuntimeConfig::seeded(7))?;
//! runtime.trigger("confetti", 320.0, 240.0, EffectOptions::new().with_intensity(2.0))?;
//!
//! let mut surface = RecordingSurface::new();
//! while !runtime.is_idle() {
//!     runtime.advance(1.0);
//!     runtime.render(&mut surface);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

#[cfg(feature = "raster")]
pub mod raster;

pub use sparkfx_core::{
    BlendMode, Color, CoreError, CoreResult, DelayMode, DrawCommand, Effect, EffectMeta,
    EffectOptions, Envelope, Lifespan, OptionValue, Particle, ParticleId, Phase, Point, Rect,
    RecordingSurface, SpawnContext, Step, Surface,
};
pub use sparkfx_effects::{register_builtin, Motion, Painter, Recipe, Sprite, BUILTIN_NAMES};
pub use sparkfx_runtime::{
    EffectCatalog, EffectInstance, InstanceHandle, InstanceState, Runtime, RuntimeConfig,
    RuntimeError, RuntimeResult, RuntimeStats, TickStats,
};

/// Creates a runtime whose catalog holds every built-in effect.
///
/// # Errors
///
/// Returns [`RuntimeError::InvalidConfig`] if `config` fails validation.
pub fn builtin_runtime(config: RuntimeConfig) -> RuntimeResult<Runtime> {
    let mut catalog = EffectCatalog::new();
    register_builtin(&mut catalog)?;
    Runtime::new(catalog, config)
}
