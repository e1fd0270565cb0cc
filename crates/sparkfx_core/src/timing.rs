//! # Timing Convention
//!
//! Every recipe interprets time the same way, which is what keeps recipes
//! interchangeable:
//!
//! ```text
//! progress += delta
//! progress <  threshold            -> Dormant   (recipe is NOT called)
//! t = (progress - threshold) / max
//! t >= 1                           -> Expired   (particle is removed)
//! otherwise                        -> Active(t) (recipe moves + shades)
//! ```
//!
//! `threshold` depends on the [`DelayMode`]. Stepping is O(1), total, and
//! never panics: garbage deltas are treated as zero and degenerate lifespans
//! expire on their first active tick.

use serde::{Deserialize, Serialize};

/// How the dormancy threshold is derived from a particle's `delay`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayMode {
    /// The particle wakes once `progress >= delay`.
    ///
    /// Dormancy is a fixed amount of progress, independent of the tick size.
    #[default]
    Absolute,
    /// The particle wakes once `progress >= delay * delta`, with `delta` being
    /// the current call's delta.
    ///
    /// Dormancy then scales with whatever delta the host happens to pass,
    /// so a host running at half the tick size wakes particles twice as late.
    PerTick,
}

impl DelayMode {
    /// Dormancy threshold for the given delay and current delta.
    #[inline]
    #[must_use]
    pub fn threshold(self, delay: f32, delta: f32) -> f32 {
        match self {
            Self::Absolute => delay,
            Self::PerTick => delay * delta,
        }
    }
}

/// Where a particle is in its lifecycle after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Still waiting out its delay. Position and shape must not change.
    Dormant,
    /// Live, at normalized time `t` in `[0, 1)`.
    Active(f32),
    /// Lifespan is over; the particle must be removed.
    Expired,
}

/// The temporal fields of a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifespan {
    progress: f32,
    max_progress: f32,
    delay: f32,
    mode: DelayMode,
    expired: bool,
}

impl Lifespan {
    /// Creates a lifespan with no delay.
    ///
    /// Non-finite or negative inputs are clamped to zero.
    #[must_use]
    pub fn new(max_progress: f32, mode: DelayMode) -> Self {
        Self {
            progress: 0.0,
            max_progress: sanitize(max_progress),
            delay: 0.0,
            mode,
            expired: false,
        }
    }

    /// Sets the dormancy length (same units as progress).
    #[must_use]
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = sanitize(delay);
        self
    }

    /// Elapsed progress.
    #[inline]
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Total active lifespan.
    #[inline]
    #[must_use]
    pub const fn max_progress(&self) -> f32 {
        self.max_progress
    }

    /// Dormancy length.
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> f32 {
        self.delay
    }

    /// How the delay is interpreted.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> DelayMode {
        self.mode
    }

    /// Whether a previous step already returned [`Phase::Expired`].
    #[inline]
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    /// Advances progress by `delta` and classifies the result.
    ///
    /// Once expired, every later call returns [`Phase::Expired`] again.
    pub fn advance(&mut self, delta: f32) -> Phase {
        let delta = sanitize(delta);
        self.progress += delta;

        if self.expired {
            return Phase::Expired;
        }

        let threshold = self.mode.threshold(self.delay, delta);
        if self.progress < threshold {
            return Phase::Dormant;
        }

        if self.max_progress <= 0.0 {
            self.expired = true;
            return Phase::Expired;
        }

        let t = (self.progress - threshold) / self.max_progress;
        if t >= 1.0 {
            self.expired = true;
            Phase::Expired
        } else {
            Phase::Active(t.max(0.0))
        }
    }
}

/// Negative and non-finite values collapse to zero so progress never rewinds.
#[inline]
fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of `advance` calls until `Expired` is first returned.
    fn ticks_until_expired(mut life: Lifespan, delta: f32) -> u32 {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if life.advance(delta) == Phase::Expired {
                return ticks;
            }
            assert!(ticks < 100_000, "lifespan never expired");
        }
    }

    #[test]
    fn test_expires_after_ceil_ticks() {
        let cases = [
            (0.0, 50.0, 1.0),
            (10.0, 20.0, 1.0),
            (0.0, 10.0, 0.5),
            (3.0, 7.0, 4.0),
            (1.0, 2.5, 0.25),
        ];
        for (delay, max, delta) in cases {
            let life = Lifespan::new(max, DelayMode::Absolute).with_delay(delay);
            let expected = ((delay + max) / delta).ceil() as u32;
            assert_eq!(
                ticks_until_expired(life, delta),
                expected,
                "delay={delay} max={max} delta={delta}"
            );
        }
    }

    #[test]
    fn test_expired_is_sticky() {
        let mut life = Lifespan::new(2.0, DelayMode::Absolute);
        assert!(matches!(life.advance(1.0), Phase::Active(_)));
        assert_eq!(life.advance(1.0), Phase::Expired);
        assert_eq!(life.advance(1.0), Phase::Expired);
        assert_eq!(life.advance(0.0), Phase::Expired);
        assert!(life.is_expired());
    }

    #[test]
    fn test_dormant_until_delay() {
        let mut life = Lifespan::new(20.0, DelayMode::Absolute).with_delay(10.0);
        for _ in 0..9 {
            assert_eq!(life.advance(1.0), Phase::Dormant);
        }
        assert_eq!(life.advance(1.0), Phase::Active(0.0));
    }

    #[test]
    fn test_per_tick_threshold_scales_with_delta() {
        // delay 10 at delta 0.5 -> threshold 5 progress -> wakes on call 10
        let mut life = Lifespan::new(20.0, DelayMode::PerTick).with_delay(10.0);
        for _ in 0..9 {
            assert_eq!(life.advance(0.5), Phase::Dormant);
        }
        assert_eq!(life.advance(0.5), Phase::Active(0.0));

        // Same delay under Absolute needs 20 calls at delta 0.5.
        let mut life = Lifespan::new(20.0, DelayMode::Absolute).with_delay(10.0);
        for _ in 0..19 {
            assert_eq!(life.advance(0.5), Phase::Dormant);
        }
        assert_eq!(life.advance(0.5), Phase::Active(0.0));
    }

    #[test]
    fn test_garbage_delta_does_not_rewind() {
        let mut life = Lifespan::new(10.0, DelayMode::Absolute);
        life.advance(2.0);
        life.advance(-5.0);
        life.advance(f32::NAN);
        life.advance(f32::INFINITY);
        assert!((life.progress() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_lifespan_expires_on_first_active_tick() {
        let mut life = Lifespan::new(0.0, DelayMode::Absolute);
        assert_eq!(life.advance(1.0), Phase::Expired);

        let mut delayed = Lifespan::new(-3.0, DelayMode::Absolute).with_delay(2.0);
        assert_eq!(delayed.advance(1.0), Phase::Dormant);
        assert_eq!(delayed.advance(1.0), Phase::Expired);
    }
}
