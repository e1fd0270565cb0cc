//! # Runtime Orchestrator
//!
//! ```text
//! host frame:
//! ┌──────────────────────────────────────────────────────────────┐
//! │ trigger(name, x, y, opts)  -> create() -> push instance      │
//! │ advance(dt)                                                  │
//! │   for instance in registration order                         │
//! │     for particle in creation order: update(), drop if done   │
//! │   drop instances left with zero particles                    │
//! │ render(surface)                                              │
//! │   same two loops: draw()                                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded and frame-driven: nothing here blocks or suspends.

use rand::SeedableRng;
use sparkfx_core::{EffectOptions, EffectRng, IdGenerator, Point, SpawnContext, Surface};

use crate::catalog::EffectCatalog;
use crate::config::RuntimeConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::instance::{EffectInstance, InstanceHandle, InstanceState};
use crate::stats::{RuntimeStats, TickStats};

/// Owns every active effect instance.
pub struct Runtime {
    /// Recipes available to `trigger`.
    catalog: EffectCatalog,
    /// Configuration.
    config: RuntimeConfig,
    /// The one random source handed to `create`.
    rng: EffectRng,
    /// The one particle id generator.
    ids: IdGenerator,
    /// Active instances in registration order.
    instances: Vec<EffectInstance>,
    /// Next instance handle.
    next_handle: u64,
    /// Counters.
    stats: RuntimeStats,
}

impl Runtime {
    /// Creates a runtime over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidConfig`] if `config` fails validation.
    pub fn new(catalog: EffectCatalog, config: RuntimeConfig) -> RuntimeResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => EffectRng::seed_from_u64(seed),
            None => EffectRng::from_entropy(),
        };
        tracing::info!(
            "Runtime created: {} effects, seed={:?}, delay_mode={:?}",
            catalog.len(),
            config.seed,
            config.delay_mode
        );
        let capacity = config.max_instances.min(64);
        Ok(Self {
            catalog,
            config,
            rng,
            ids: IdGenerator::new(),
            instances: Vec::with_capacity(capacity),
            next_handle: 1,
            stats: RuntimeStats::default(),
        })
    }

    /// Runtime with the default configuration.
    #[must_use]
    pub fn with_catalog(catalog: EffectCatalog) -> Self {
        Self {
            catalog,
            config: RuntimeConfig::default(),
            rng: EffectRng::from_entropy(),
            ids: IdGenerator::new(),
            instances: Vec::new(),
            next_handle: 1,
            stats: RuntimeStats::default(),
        }
    }

    /// The recipes available to `trigger`.
    #[must_use]
    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    /// Mutable catalog, for registering recipes after construction.
    pub fn catalog_mut(&mut self) -> &mut EffectCatalog {
        &mut self.catalog
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Starts a new instance of `name` at `(x, y)`.
    ///
    /// An effect whose `create` yields no particles is valid: the handle is
    /// returned but the instance is already drained.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::EffectNotFound`] if `name` is not registered (no
    ///   instance is created).
    /// - [`RuntimeError::TooManyInstances`] if the active set is full.
    pub fn trigger(
        &mut self,
        name: &str,
        x: f32,
        y: f32,
        options: EffectOptions,
    ) -> RuntimeResult<InstanceHandle> {
        let effect = self
            .catalog
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::EffectNotFound(name.to_string()))?;

        if self.instances.len() >= self.config.max_instances {
            tracing::warn!(
                "Dropping trigger of {:?}: {} instances active",
                name,
                self.instances.len()
            );
            return Err(RuntimeError::TooManyInstances {
                limit: self.config.max_instances,
            });
        }

        let origin = Point::new(x, y);
        let mut ctx = SpawnContext::new(&mut self.rng, &mut self.ids, self.config.delay_mode);
        let particles = effect.spawn(origin, &options, &mut ctx);

        let handle = InstanceHandle(self.next_handle);
        self.next_handle += 1;
        self.stats.instances_triggered += 1;
        self.stats.particles_spawned += particles.len() as u64;

        if particles.is_empty() {
            self.stats.instances_drained += 1;
            tracing::debug!("{} ({:?}) spawned no particles, drained immediately", handle, name);
            return Ok(handle);
        }

        tracing::debug!(
            "{} triggered {:?} at ({}, {}) with {} particles",
            handle,
            name,
            x,
            y,
            particles.len()
        );
        self.instances.push(EffectInstance::new(
            handle,
            name.to_string(),
            origin,
            options,
            self.stats.ticks,
            particles,
        ));
        Ok(handle)
    }

    /// [`Runtime::trigger`] with default options.
    ///
    /// # Errors
    ///
    /// As [`Runtime::trigger`].
    pub fn trigger_default(&mut self, name: &str, x: f32, y: f32) -> RuntimeResult<InstanceHandle> {
        self.trigger(name, x, y, EffectOptions::new())
    }

    /// Advances every particle of every instance by one tick.
    ///
    /// Negative or non-finite deltas count as zero. Deltas above a configured
    /// `max_delta` are clamped; without one they pass through unchanged.
    pub fn advance(&mut self, delta: f32) -> TickStats {
        let delta = self.sanitize_delta(delta);
        let mut tick = TickStats::default();

        for instance in &mut self.instances {
            tick.particles_updated += instance.particle_count() as u32;
            tick.particles_expired += instance.advance(delta) as u32;
        }

        let before = self.instances.len();
        self.instances.retain(|instance| {
            let live = instance.state() == InstanceState::Active;
            if !live {
                tracing::debug!("{} ({:?}) drained", instance.handle(), instance.effect_name());
            }
            live
        });
        tick.instances_drained = (before - self.instances.len()) as u32;

        self.stats.record_tick(tick);
        tracing::trace!(
            "tick {}: updated={} expired={} drained={}",
            self.stats.ticks,
            tick.particles_updated,
            tick.particles_expired,
            tick.instances_drained
        );
        tick
    }

    /// Draws every live particle, in the same order `advance` visits them.
    pub fn render(&self, surface: &mut dyn Surface) {
        for instance in &self.instances {
            instance.render(surface);
        }
    }

    /// Removes an instance immediately. Returns `false` if it was not active.
    pub fn cancel(&mut self, handle: InstanceHandle) -> bool {
        let Some(index) = self.instances.iter().position(|i| i.handle() == handle) else {
            return false;
        };
        // Order-preserving: later instances keep painting on top.
        let instance = self.instances.remove(index);
        self.stats.instances_cancelled += 1;
        tracing::debug!(
            "{} ({:?}) cancelled with {} live particles",
            handle,
            instance.effect_name(),
            instance.particle_count()
        );
        true
    }

    /// Removes every instance. Returns how many were active.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.instances.len();
        self.instances.clear();
        self.stats.instances_cancelled += count as u64;
        if count > 0 {
            tracing::debug!("Cancelled all {} instances", count);
        }
        count
    }

    /// Looks up an active instance.
    #[must_use]
    pub fn instance(&self, handle: InstanceHandle) -> Option<&EffectInstance> {
        self.instances.iter().find(|i| i.handle() == handle)
    }

    /// State of an instance; anything no longer active reads as drained.
    #[must_use]
    pub fn state(&self, handle: InstanceHandle) -> InstanceState {
        self.instance(handle)
            .map_or(InstanceState::Drained, EffectInstance::state)
    }

    /// Active instances in registration order.
    pub fn instances(&self) -> impl Iterator<Item = &EffectInstance> {
        self.instances.iter()
    }

    /// Number of active instances.
    #[must_use]
    pub fn active_instances(&self) -> usize {
        self.instances.len()
    }

    /// Live particles across all instances.
    #[must_use]
    pub fn live_particles(&self) -> usize {
        self.instances.iter().map(EffectInstance::particle_count).sum()
    }

    /// `true` when nothing is animating.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.instances.is_empty()
    }

    /// Counters.
    #[must_use]
    pub fn stats(&self) -> &RuntimeStats {
        &self.stats
    }

    fn sanitize_delta(&self, delta: f32) -> f32 {
        if !delta.is_finite() || delta < 0.0 {
            tracing::warn!("Ignoring invalid tick delta {}", delta);
            0.0
        } else {
            match self.config.max_delta {
                Some(max) if delta > max => {
                    tracing::debug!("Clamping tick delta {} to {}", delta, max);
                    max
                }
                _ => delta,
            }
        }
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("catalog", &self.catalog)
            .field("config", &self.config)
            .field("instances", &self.instances)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
