//! # Effect Instances
//!
//! One triggered occurrence of a recipe:
//!
//! ```text
//! Created --create()--> Active (>= 1 live particle) --last particle done--> Drained
//!    \________________ zero particles _______________________________________/
//! ```
//!
//! Drained is terminal: the instance leaves the active set and its handle
//! never resolves again.

use std::fmt;

use sparkfx_core::{EffectOptions, ParticleId, Point, Surface};

use crate::batch::ParticleBatch;

/// Opaque reference to a triggered instance. Never reused within a runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceHandle(pub(crate) u64);

impl InstanceHandle {
    /// Raw sequence number (registration order).
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fx#{}", self.0)
    }
}

/// Lifecycle state of an instance as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// At least one live particle.
    Active,
    /// No live particles (or cancelled); gone from the active set.
    Drained,
}

/// Runtime state binding one recipe to one trigger call.
pub struct EffectInstance {
    handle: InstanceHandle,
    effect: String,
    origin: Point,
    options: EffectOptions,
    triggered_at: u64,
    particles: Box<dyn ParticleBatch>,
}

impl EffectInstance {
    pub(crate) fn new(
        handle: InstanceHandle,
        effect: String,
        origin: Point,
        options: EffectOptions,
        triggered_at: u64,
        particles: Box<dyn ParticleBatch>,
    ) -> Self {
        Self {
            handle,
            effect,
            origin,
            options,
            triggered_at,
            particles,
        }
    }

    /// This instance's handle.
    #[must_use]
    pub const fn handle(&self) -> InstanceHandle {
        self.handle
    }

    /// Name of the recipe driving it.
    #[must_use]
    pub fn effect_name(&self) -> &str {
        &self.effect
    }

    /// Trigger point.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Options supplied at trigger time.
    #[must_use]
    pub const fn options(&self) -> &EffectOptions {
        &self.options
    }

    /// Runtime tick count when the instance was triggered.
    #[must_use]
    pub const fn triggered_at(&self) -> u64 {
        self.triggered_at
    }

    /// Live particle count.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Live particle ids in creation order.
    #[must_use]
    pub fn particle_ids(&self) -> Vec<ParticleId> {
        self.particles.particle_ids()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> InstanceState {
        if self.particles.is_empty() {
            InstanceState::Drained
        } else {
            InstanceState::Active
        }
    }

    pub(crate) fn advance(&mut self, delta: f32) -> usize {
        self.particles.advance(delta)
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        self.particles.render(surface);
    }
}

impl fmt::Debug for EffectInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectInstance")
            .field("handle", &self.handle)
            .field("effect", &self.effect)
            .field("origin", &self.origin)
            .field("particles", &self.particles.len())
            .finish_non_exhaustive()
    }
}
