//! # SparkFX Runtime
//!
//! Owns every live effect instance and drives them frame by frame.
//!
//! ## Guarantees
//!
//! 1. **Bounded lifetimes** - every particle expires; drained instances are
//!    dropped on the tick their last particle finishes
//! 2. **Deterministic order** - `advance` and `render` both walk instances in
//!    registration order and particles in creation order
//! 3. **Safe cleanup** - `cancel` removes an instance between ticks; nothing
//!    of it is updated or drawn again
//! 4. **Reproducible spawns** - a seeded [`RuntimeConfig`] makes `create`
//!    produce identical particles run after run
//!
//! ## Example
//!
//! ```rust,ignore
//! use sparkfx_runtime::{EffectCatalog, Runtime, RuntimeConfig};
//!
//! let mut catalog = EffectCatalog::new();
//! catalog.register(MyEffect::default())?;
//!
//! let mut runtime = Runtime::new(catalog, RuntimeConfig::seeded(42))?;
//! let handle = runtime.trigger_default("my-effect", 120.0, 80.0)?;
//!
//! loop {
//!     runtime.advance(1.0);
//!     runtime.render(&mut surface);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod batch;
pub mod catalog;
pub mod config;
pub mod error;
pub mod instance;
pub mod runtime;
pub mod stats;

#[cfg(test)]
mod testing;

pub use batch::{DynEffect, ParticleBatch};
pub use catalog::EffectCatalog;
pub use config::{RuntimeConfig, DEFAULT_MAX_INSTANCES};
pub use error::{RuntimeError, RuntimeResult};
pub use instance::{EffectInstance, InstanceHandle, InstanceState};
pub use runtime::Runtime;
pub use stats::{RuntimeStats, TickStats};
