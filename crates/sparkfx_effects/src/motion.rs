//! Per-tick movement rules for [`Sprite`] particles.

use sparkfx_core::Particle;

use crate::sprite::Sprite;

/// How an active particle moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Velocity integration with gravity and air drag.
    Ballistic {
        /// Added to `vy` every tick.
        gravity: f32,
        /// Fraction of velocity kept per tick, in `[0, 1]`.
        drag: f32,
    },
    /// Travels along its velocity while swaying sideways.
    Float {
        /// Sway amplitude.
        sway: f32,
        /// Sway cycles over the lifespan.
        frequency: f32,
    },
    /// Stays put and grows from its base size to `to` times that.
    Expand {
        /// Final size multiplier.
        to: f32,
    },
    /// Does not move; only spin applies.
    Still,
}

impl Motion {
    /// Applies one tick of motion at normalized time `t`.
    pub fn apply(&self, particle: &mut Particle<Sprite>, t: f32, delta: f32) {
        match *self {
            Self::Ballistic { gravity, drag } => {
                let keep = drag.clamp(0.0, 1.0).powf(delta);
                let sprite = &mut particle.state;
                sprite.vy += gravity * delta;
                sprite.vx *= keep;
                sprite.vy *= keep;
                let (dx, dy) = (sprite.vx * delta, sprite.vy * delta);
                particle.translate(dx, dy);
            }
            Self::Float { sway, frequency } => {
                let sprite = &mut particle.state;
                sprite.anchor = sprite
                    .anchor
                    .offset(sprite.vx * delta, sprite.vy * delta);
                let wobble =
                    sway * (std::f32::consts::TAU * frequency * t + sprite.phase).sin();
                // Sway is perpendicular to travel; vertical travel is the common case.
                let position = if sprite.vx.abs() > sprite.vy.abs() {
                    sprite.anchor.offset(0.0, wobble)
                } else {
                    sprite.anchor.offset(wobble, 0.0)
                };
                particle.set_position(position);
            }
            Self::Expand { to } => {
                let sprite = &mut particle.state;
                sprite.size = sprite.base_size * (1.0 + (to - 1.0) * t);
            }
            Self::Still => {}
        }
        particle.state.rotation += particle.state.spin * delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use sparkfx_core::{Color, DelayMode, EffectRng, IdGenerator, Point, SpawnContext};

    fn sprite_particle(sprite: Sprite) -> Particle<Sprite> {
        let mut rng = EffectRng::seed_from_u64(1);
        let mut ids = IdGenerator::new();
        let mut ctx = SpawnContext::new(&mut rng, &mut ids, DelayMode::Absolute);
        ctx.particle(sprite.anchor, 100.0, sprite)
    }

    #[test]
    fn test_ballistic_falls_under_gravity() {
        let sprite = Sprite::new(Point::ZERO, 2.0, Color::WHITE).moving(1.0, -2.0);
        let mut p = sprite_particle(sprite);
        let motion = Motion::Ballistic {
            gravity: 0.5,
            drag: 1.0,
        };

        motion.apply(&mut p, 0.0, 1.0);
        assert_eq!(p.position(), Point::new(1.0, -1.5));
        motion.apply(&mut p, 0.0, 1.0);
        assert_eq!(p.position(), Point::new(2.0, -2.5));
        for _ in 0..3 {
            motion.apply(&mut p, 0.0, 1.0);
        }
        assert!(p.state.vy > 0.0, "velocity turned downward");
    }

    #[test]
    fn test_drag_slows_particles() {
        let sprite = Sprite::new(Point::ZERO, 2.0, Color::WHITE).moving(10.0, 0.0);
        let mut p = sprite_particle(sprite);
        let motion = Motion::Ballistic {
            gravity: 0.0,
            drag: 0.5,
        };
        motion.apply(&mut p, 0.0, 1.0);
        assert!((p.state.vx - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_expand_grows_linearly() {
        let mut p = sprite_particle(Sprite::new(Point::ZERO, 4.0, Color::WHITE));
        let motion = Motion::Expand { to: 3.0 };
        motion.apply(&mut p, 0.5, 1.0);
        assert!((p.state.size - 8.0).abs() < 1e-5);
        motion.apply(&mut p, 1.0, 1.0);
        assert!((p.state.size - 12.0).abs() < 1e-5);
        assert_eq!(p.position(), Point::ZERO);
    }

    #[test]
    fn test_float_tracks_anchor() {
        let sprite = Sprite::new(Point::new(10.0, 10.0), 4.0, Color::WHITE).moving(0.0, -1.0);
        let mut p = sprite_particle(sprite);
        let motion = Motion::Float {
            sway: 3.0,
            frequency: 1.0,
        };
        for _ in 0..5 {
            motion.apply(&mut p, 0.25, 1.0);
        }
        assert_eq!(p.state.anchor, Point::new(10.0, 5.0));
        assert!((p.position().y - 5.0).abs() < 1e-4);
        assert!((p.position().x - 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_spin_applies_to_every_motion() {
        let sprite = Sprite::new(Point::ZERO, 4.0, Color::WHITE).spinning(0.0, 0.25);
        let mut p = sprite_particle(sprite);
        Motion::Still.apply(&mut p, 0.0, 2.0);
        assert!((p.state.rotation - 0.5).abs() < 1e-6);
    }
}
