//! Shapes a [`Sprite`] particle can be painted as.
//!
//! Every painter sets the global alpha to the particle's opacity and then
//! paints with the sprite color; the runtime's save/restore bracket undoes
//! the state change afterwards.

use std::f32::consts::{PI, TAU};

use sparkfx_core::{BlendMode, Particle, Point, Rect, Surface};

use crate::sprite::Sprite;

/// Points in a heart outline.
const HEART_SEGMENTS: usize = 24;

/// Drawing style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Painter {
    /// Filled circle.
    Dot,
    /// Soft additive radial glow with a solid core.
    Glow,
    /// Spinning paper strip, twice as wide as it is tall.
    Confetti,
    /// Filled heart.
    Heart,
    /// Circle outline.
    Ring {
        /// Stroke width.
        width: f32,
    },
    /// Five-pointed star.
    Star,
    /// Bright head with a short trail along the velocity.
    Spark {
        /// Trail length in ticks of travel.
        trail: f32,
    },
}

impl Painter {
    /// Paints `particle`. Invisible particles are skipped.
    pub fn paint(&self, surface: &mut dyn Surface, particle: &Particle<Sprite>) {
        let alpha = particle.alpha();
        let sprite = &particle.state;
        if alpha <= 0.0 || sprite.size <= 0.0 {
            return;
        }
        let at = particle.position();
        surface.set_global_alpha(alpha);

        match *self {
            Self::Dot => surface.fill_circle(at, sprite.size, sprite.color),
            Self::Glow => {
                surface.set_blend(BlendMode::Additive);
                surface.fill_radial_glow(at, sprite.size * 3.0, sprite.color);
                surface.fill_circle(at, sprite.size * 0.5, sprite.color);
            }
            Self::Confetti => {
                // Flipping paper: height follows the spin.
                let flip = sprite.rotation.cos().abs().max(0.15);
                let rect = Rect::centered(at, sprite.size * 2.0, sprite.size * flip)
                    .rotated(sprite.rotation);
                surface.fill_rect(rect, sprite.color);
            }
            Self::Heart => {
                surface.fill_polygon(&heart(at, sprite.size, sprite.rotation), sprite.color);
            }
            Self::Ring { width } => {
                surface.stroke_circle(at, sprite.size, width, sprite.color);
            }
            Self::Star => {
                surface.fill_polygon(&star(at, sprite.size, sprite.rotation), sprite.color);
            }
            Self::Spark { trail } => {
                let tail = at.offset(-sprite.vx * trail, -sprite.vy * trail);
                surface.set_blend(BlendMode::Additive);
                surface.stroke_line(tail, at, sprite.size * 0.6, sprite.color);
                surface.fill_circle(at, sprite.size, sprite.color);
            }
        }
    }
}

/// Parametric heart of width ~`2 * size`, tilted by `tilt`.
fn heart(center: Point, size: f32, tilt: f32) -> Vec<Point> {
    let scale = size / 16.0;
    let (sin, cos) = tilt.sin_cos();
    (0..HEART_SEGMENTS)
        .map(|i| {
            let a = TAU * i as f32 / HEART_SEGMENTS as f32;
            let x = 16.0 * a.sin().powi(3);
            let y = -(13.0 * a.cos() - 5.0 * (2.0 * a).cos() - 2.0 * (3.0 * a).cos() - (4.0 * a).cos());
            let (x, y) = (x * scale, y * scale);
            center.offset(x * cos - y * sin, x * sin + y * cos)
        })
        .collect()
}

/// Five-pointed star with outer radius `size`.
fn star(center: Point, size: f32, rotation: f32) -> Vec<Point> {
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { size } else { size * 0.45 };
            let angle = rotation - PI / 2.0 + PI * i as f32 / 5.0;
            center.polar(angle, radius)
        })
        .collect()
}
