//! The per-particle state shared by every built-in recipe.

use sparkfx_core::{Color, Point};

/// Recipe-owned particle attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Horizontal velocity, units per tick.
    pub vx: f32,
    /// Vertical velocity, units per tick (positive is down).
    pub vy: f32,
    /// Current size (radius for round shapes).
    pub size: f32,
    /// Size at creation.
    pub base_size: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Rotation speed, radians per tick.
    pub spin: f32,
    /// Paint color.
    pub color: Color,
    /// Oscillator phase, radians.
    pub phase: f32,
    /// Reference point for motions that oscillate around a track.
    pub anchor: Point,
}

impl Sprite {
    /// A motionless sprite of the given size and color anchored at `anchor`.
    #[must_use]
    pub fn new(anchor: Point, size: f32, color: Color) -> Self {
        Self {
            vx: 0.0,
            vy: 0.0,
            size,
            base_size: size,
            rotation: 0.0,
            spin: 0.0,
            color,
            phase: 0.0,
            anchor,
        }
    }

    /// Sets the velocity.
    #[must_use]
    pub const fn moving(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Sets rotation and spin.
    #[must_use]
    pub const fn spinning(mut self, rotation: f32, spin: f32) -> Self {
        self.rotation = rotation;
        self.spin = spin;
        self
    }

    /// Sets the oscillator phase.
    #[must_use]
    pub const fn phased(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }
}
