//! # Particles
//!
//! A [`Particle`] is one animated unit. The runtime owns the fields every
//! recipe shares (id, position, lifespan, alpha); the recipe owns `state`,
//! which the runtime never inspects.
//!
//! Particles can only be minted through [`SpawnContext::particle`], which
//! is what guarantees every id comes from the runtime's single generator.
//!
//! [`SpawnContext::particle`]: crate::SpawnContext::particle

use std::fmt;

use crate::geometry::Point;
use crate::timing::{Lifespan, Phase};

/// Unique, never reused particle identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Sequential id source. One per runtime; only touched from the tick thread.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Creates a generator starting at id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Hands out the next id.
    pub fn next_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One animated visual unit.
///
/// `S` is the recipe-owned state (velocity, size, rotation, color, ...).
#[derive(Debug, Clone)]
pub struct Particle<S> {
    id: ParticleId,
    position: Point,
    lifespan: Lifespan,
    alpha: f32,
    /// Recipe-specific attributes.
    pub state: S,
}

impl<S> Particle<S> {
    pub(crate) fn new(id: ParticleId, position: Point, lifespan: Lifespan, state: S) -> Self {
        Self {
            id,
            position,
            lifespan,
            alpha: 0.0,
            state,
        }
    }

    /// Sets the dormancy length.
    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.lifespan = self.lifespan.with_delay(delay);
        self
    }

    /// Stable identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> ParticleId {
        self.id
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Moves the particle.
    #[inline]
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Moves the particle by `(dx, dy)`.
    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position = self.position.offset(dx, dy);
    }

    /// Timing fields.
    #[inline]
    #[must_use]
    pub const fn lifespan(&self) -> &Lifespan {
        &self.lifespan
    }

    /// Advances the lifespan by `delta`. Dormant particles get alpha 0.
    pub fn step(&mut self, delta: f32) -> Phase {
        let phase = self.lifespan.advance(delta);
        if phase == Phase::Dormant {
            self.alpha = 0.0;
        }
        phase
    }

    /// Current opacity, always in `[0, 1]`. Zero until first computed.
    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Sets the opacity, clamped to `[0, 1]` (NaN becomes 0).
    #[inline]
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    }
}
