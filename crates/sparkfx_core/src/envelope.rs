//! # Alpha Envelopes
//!
//! Named shaping functions from normalized time `t` to opacity. Recipes pick
//! one instead of re-deriving the same fade arithmetic.
//!
//! Every envelope is a pure function of `t` and is clamped to `[0, 1]`, even
//! where the raw formula would overshoot.

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Opacity as a function of normalized time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Envelope {
    /// Fixed opacity.
    Constant {
        /// The opacity.
        alpha: f32,
    },
    /// `1 - t`.
    #[default]
    FadeOut,
    /// `t`.
    FadeIn,
    /// Linear ramp up over `[0, fade_in)`, full until `1 - fade_out`, then down.
    FadeInOut {
        /// Fraction of the lifespan spent fading in.
        fade_in: f32,
        /// Fraction of the lifespan spent fading out.
        fade_out: f32,
    },
    /// Ramp up until `rise`, hold at 1 until `hold_until`, then fade to 0.
    Plateau {
        /// End of the ramp-up.
        rise: f32,
        /// End of the hold.
        hold_until: f32,
    },
    /// `sin(pi * t)`: zero at both ends, full at the midpoint.
    SinePulse,
    /// Oscillates between `floor` and 1 while fading out overall.
    Pulse {
        /// Full oscillations over the lifespan.
        frequency: f32,
        /// Lowest opacity of an oscillation.
        floor: f32,
    },
    /// Twinkling star: an oscillator with a per-particle phase, under a fade-out.
    Twinkle {
        /// Full oscillations over the lifespan.
        frequency: f32,
        /// Oscillator phase offset in radians.
        phase: f32,
    },
}

impl Envelope {
    /// Opacity at normalized time `t`, always in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let raw = match *self {
            Self::Constant { alpha } => alpha,
            Self::FadeOut => 1.0 - t,
            Self::FadeIn => t,
            Self::FadeInOut { fade_in, fade_out } => {
                let rise = ramp(t, fade_in);
                let fall = ramp(1.0 - t, fade_out);
                rise.min(fall)
            }
            Self::Plateau { rise, hold_until } => {
                if t < rise {
                    ramp(t, rise)
                } else if t <= hold_until {
                    1.0
                } else {
                    let tail = (1.0 - hold_until).max(f32::EPSILON);
                    1.0 - (t - hold_until) / tail
                }
            }
            Self::SinePulse => (PI * t).sin(),
            Self::Pulse { frequency, floor } => {
                let wave = 0.5 + 0.5 * (TAU * frequency * t).cos();
                (floor + (1.0 - floor) * wave) * (1.0 - t)
            }
            Self::Twinkle { frequency, phase } => {
                let wave = 0.5 + 0.5 * (TAU * frequency * t + phase).sin();
                wave * (1.0 - t * t)
            }
        };
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 1.0)
        }
    }
}

/// `t / width`, saturating at 1; a zero-width ramp is a step.
#[inline]
fn ramp(t: f32, width: f32) -> f32 {
    if width <= 0.0 {
        1.0
    } else {
        t / width
    }
}
