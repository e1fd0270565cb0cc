//! # SparkFX Effects
//!
//! The recipe framework and the built-in effect catalog.
//!
//! A [`Recipe`] combines a [`Spawner`], a [`Motion`], a [`Painter`] and an
//! [`Envelope`](sparkfx_core::Envelope) into a complete
//! [`Effect`](sparkfx_core::Effect) whose particles carry a [`Sprite`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut catalog = EffectCatalog::new();
//! sparkfx_effects::register_builtin(&mut catalog)?;
//! let runtime = Runtime::new(catalog, RuntimeConfig::default())?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod builtin;
pub mod motion;
pub mod painter;
pub mod recipe;
pub mod spawner;
pub mod sprite;

pub use builtin::BUILTIN_NAMES;
pub use motion::Motion;
pub use painter::Painter;
pub use recipe::Recipe;
pub use spawner::{Radial, Rings, Rise, Salvo, Scatter, Span, Spawner, MAX_PARTICLES_PER_TRIGGER};
pub use sprite::Sprite;

use sparkfx_runtime::{EffectCatalog, RuntimeResult};
use tracing::info;

/// Every built-in recipe.
#[must_use]
pub fn builtin() -> Vec<Recipe> {
    builtin::all()
}

/// Registers every built-in recipe.
///
/// # Errors
///
/// Returns [`RuntimeError::DuplicateEffect`](sparkfx_runtime::RuntimeError::DuplicateEffect)
/// if the catalog already holds an effect with a built-in name. Recipes
/// registered before the clash stay registered.
pub fn register_builtin(catalog: &mut EffectCatalog) -> RuntimeResult<()> {
    for recipe in builtin::all() {
        catalog.register(recipe)?;
    }
    info!(count = BUILTIN_NAMES.len(), "Registered built-in effects");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkfx_runtime::RuntimeError;

    #[test]
    fn test_register_builtin_fills_catalog() {
        let mut catalog = EffectCatalog::new();
        register_builtin(&mut catalog).unwrap();
        assert_eq!(catalog.len(), BUILTIN_NAMES.len());
        for name in BUILTIN_NAMES {
            assert!(catalog.contains(name), "{name} missing");
        }
    }

    #[test]
    fn test_register_builtin_twice_is_rejected() {
        let mut catalog = EffectCatalog::new();
        register_builtin(&mut catalog).unwrap();
        let err = register_builtin(&mut catalog).unwrap_err();
        assert!(matches!(err, RuntimeError::DuplicateEffect(ref name) if name == "burst"));
    }
}
