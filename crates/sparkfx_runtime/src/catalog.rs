//! # Effect Catalog
//!
//! Name -> recipe registry. Recipes are read-only once registered; hosts
//! list them (in registration order) to build pickers.

use std::collections::HashMap;
use std::sync::Arc;

use sparkfx_core::{Effect, EffectMeta};

use crate::batch::DynEffect;
use crate::error::{RuntimeError, RuntimeResult};

/// Registry of named effects.
#[derive(Default, Clone)]
pub struct EffectCatalog {
    /// Recipes in registration order.
    effects: Vec<Arc<dyn DynEffect>>,
    /// Name -> index into `effects`.
    index: HashMap<String, usize>,
}

impl EffectCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a recipe under `effect.meta().name`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::DuplicateEffect`] if the name is taken.
    pub fn register<E: Effect>(&mut self, effect: E) -> RuntimeResult<()> {
        self.register_shared(Arc::new(effect))
    }

    /// Registers an already shared recipe.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::DuplicateEffect`] if the name is taken.
    pub fn register_shared(&mut self, effect: Arc<dyn DynEffect>) -> RuntimeResult<()> {
        let name = effect.meta().name.clone();
        if self.index.contains_key(&name) {
            return Err(RuntimeError::DuplicateEffect(name));
        }
        tracing::debug!("Registered effect {:?}", name);
        self.index.insert(name, self.effects.len());
        self.effects.push(effect);
        Ok(())
    }

    /// Looks up a recipe by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn DynEffect>> {
        self.index.get(name).map(|&i| &self.effects[i])
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|e| e.meta().name.as_str())
    }

    /// Metadata of every recipe, in registration order.
    pub fn metas(&self) -> impl Iterator<Item = &EffectMeta> {
        self.effects.iter().map(|e| e.meta())
    }

    /// Number of registered recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl std::fmt::Debug for EffectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Stub;

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = EffectCatalog::new();
        catalog.register(Stub::new("b", 1, 5.0)).unwrap();
        catalog.register(Stub::new("a", 1, 5.0)).unwrap();

        assert!(catalog.contains("a"));
        assert!(catalog.get("missing").is_none());
        assert_eq!(catalog.get("b").map(|e| e.meta().name.as_str()), Some("b"));
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut catalog = EffectCatalog::new();
        catalog.register(Stub::new("x", 1, 5.0)).unwrap();
        let err = catalog.register(Stub::new("x", 3, 1.0)).unwrap_err();
        assert!(matches!(err, RuntimeError::DuplicateEffect(name) if name == "x"));
        assert_eq!(catalog.len(), 1);
    }
}
