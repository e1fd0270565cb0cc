//! # Built-in Effects
//!
//! | Name        | Spawner   | Motion              | Painter    | Envelope    |
//! |-------------|-----------|---------------------|------------|-------------|
//! | `burst`     | radial    | ballistic           | dot        | fade-out    |
//! | `confetti`  | radial up | ballistic, heavy    | confetti   | plateau     |
//! | `hearts`    | rise      | float               | heart      | fade in/out |
//! | `ripple`    | rings     | expand              | ring       | fade-out    |
//! | `sparkle`   | scatter   | still               | star       | twinkle     |
//! | `fireworks` | salvo     | ballistic, light    | spark      | pulse       |
//!
//! Tuned for `delta = 1.0` at 60 ticks per second.

use sparkfx_core::{Color, EffectMeta, Envelope};

use crate::motion::Motion;
use crate::painter::Painter;
use crate::recipe::Recipe;
use crate::spawner::{Radial, Rings, Rise, Salvo, Scatter, Span};

/// Names of every built-in effect, in registration order.
pub const BUILTIN_NAMES: [&str; 6] = ["burst", "confetti", "hearts", "ripple", "sparkle", "fireworks"];

const GOLD: [Color; 3] = [
    Color::rgb(255, 215, 0),
    Color::rgb(255, 170, 40),
    Color::rgb(255, 245, 200),
];

const PARTY: [Color; 6] = [
    Color::rgb(239, 71, 111),
    Color::rgb(255, 209, 102),
    Color::rgb(6, 214, 160),
    Color::rgb(17, 138, 178),
    Color::rgb(155, 93, 229),
    Color::rgb(255, 133, 27),
];

const LOVE: [Color; 3] = [
    Color::rgb(255, 77, 109),
    Color::rgb(255, 143, 163),
    Color::rgb(201, 24, 74),
];

const WATER: [Color; 2] = [Color::rgb(100, 181, 246), Color::rgb(187, 222, 251)];

const STARLIGHT: [Color; 3] = [
    Color::rgb(255, 255, 255),
    Color::rgb(255, 249, 196),
    Color::rgb(179, 229, 252),
];

const NIGHT_SKY: [Color; 5] = [
    Color::rgb(255, 82, 82),
    Color::rgb(255, 215, 64),
    Color::rgb(105, 240, 174),
    Color::rgb(64, 196, 255),
    Color::rgb(224, 64, 251),
];

/// Quick radial pop of golden dots.
#[must_use]
pub fn burst() -> Recipe {
    Recipe::new(
        EffectMeta::new("burst")
            .label("Burst")
            .description("A quick pop of golden sparks")
            .palette(GOLD),
        Radial {
            count: 24,
            angle: 0.0,
            spread: 360.0,
            speed: Span::new(2.0, 6.0),
            lifespan: Span::new(30.0, 50.0),
            size: Span::new(2.0, 4.0),
            spin: 0.0,
        },
    )
    .with_motion(Motion::Ballistic {
        gravity: 0.08,
        drag: 0.95,
    })
}

/// Paper strips thrown upwards that tumble back down.
#[must_use]
pub fn confetti() -> Recipe {
    Recipe::new(
        EffectMeta::new("confetti")
            .label("Confetti")
            .description("Colorful paper thrown into the air")
            .palette(PARTY),
        Radial {
            count: 40,
            angle: -90.0,
            spread: 100.0,
            speed: Span::new(4.0, 9.0),
            lifespan: Span::new(60.0, 90.0),
            size: Span::new(4.0, 7.0),
            spin: 0.3,
        },
    )
    .with_motion(Motion::Ballistic {
        gravity: 0.18,
        drag: 0.96,
    })
    .with_painter(Painter::Confetti)
    .with_envelope(Envelope::Plateau {
        rise: 0.05,
        hold_until: 0.7,
    })
}

/// Hearts floating up, one after another.
#[must_use]
pub fn hearts() -> Recipe {
    Recipe::new(
        EffectMeta::new("hearts")
            .label("Hearts")
            .description("Hearts drifting upwards")
            .palette(LOVE),
        Rise {
            count: 8,
            spread: 30.0,
            speed: Span::new(0.8, 1.6),
            lifespan: Span::new(60.0, 80.0),
            size: Span::new(8.0, 14.0),
            max_delay: 20.0,
        },
    )
    .with_motion(Motion::Float {
        sway: 6.0,
        frequency: 1.5,
    })
    .with_painter(Painter::Heart)
    .with_envelope(Envelope::FadeInOut {
        fade_in: 0.15,
        fade_out: 0.4,
    })
}

/// Concentric rings spreading out like a drop in water.
#[must_use]
pub fn ripple() -> Recipe {
    Recipe::new(
        EffectMeta::new("ripple")
            .label("Ripple")
            .description("Rings spreading from the touch point")
            .palette(WATER),
        Rings {
            count: 3,
            interval: 10.0,
            lifespan: 40.0,
            radius: 4.0,
        },
    )
    .with_motion(Motion::Expand { to: 10.0 })
    .with_painter(Painter::Ring { width: 2.0 })
}

/// Twinkling stars around the origin.
#[must_use]
pub fn sparkle() -> Recipe {
    Recipe::new(
        EffectMeta::new("sparkle")
            .label("Sparkle")
            .description("Stars twinkling in place")
            .palette(STARLIGHT),
        Scatter {
            count: 16,
            radius: 40.0,
            lifespan: Span::new(25.0, 40.0),
            size: Span::new(3.0, 6.0),
            max_delay: 15.0,
        },
    )
    .with_painter(Painter::Star)
    .with_envelope(Envelope::Twinkle {
        frequency: 3.0,
        phase: 0.0,
    })
}

/// Several shells bursting in sequence.
#[must_use]
pub fn fireworks() -> Recipe {
    Recipe::new(
        EffectMeta::new("fireworks")
            .label("Fireworks")
            .description("Shells bursting one after another")
            .palette(NIGHT_SKY)
            .base_intensity(1.5),
        Salvo {
            shells: 3,
            sparks: 24,
            radius: 60.0,
            interval: 15.0,
            speed: Span::new(1.5, 3.5),
            lifespan: Span::new(40.0, 60.0),
            size: Span::new(1.5, 2.5),
        },
    )
    .with_motion(Motion::Ballistic {
        gravity: 0.05,
        drag: 0.97,
    })
    .with_painter(Painter::Spark { trail: 3.0 })
    .with_envelope(Envelope::Pulse {
        frequency: 4.0,
        floor: 0.4,
    })
}

/// Every built-in recipe, in [`BUILTIN_NAMES`] order.
#[must_use]
pub fn all() -> Vec<Recipe> {
    vec![burst(), confetti(), hearts(), ripple(), sparkle(), fireworks()]
}
