//! # Spawners
//!
//! Geometry generators: where particles start, how fast, how big, and for
//! how long. Each spawner reads the generic `intensity` option and the
//! recipe-specific extras it understands:
//!
//! | Spawner   | Extras |
//! |-----------|--------|
//! | [`Radial`]  | `angle` (degrees), `spread` (degrees) |
//! | [`Rise`]    | `direction` (`"up"`, `"down"`, `"left"`, `"right"`) |
//! | [`Scatter`] | `radius` |
//! | [`Rings`]   | - |
//! | [`Salvo`]   | `radius` |

use std::f32::consts::TAU;

use sparkfx_core::{Color, EffectOptions, Particle, Point, SpawnContext};

use crate::sprite::Sprite;

/// Hard cap on particles a single trigger may spawn.
pub const MAX_PARTICLES_PER_TRIGGER: usize = 256;

/// Fallback paint when a palette is somehow empty.
const FALLBACK: Color = Color::WHITE;

/// Strategy that builds the initial particle batch.
pub trait Spawner: Send + Sync {
    /// Creates particles around `origin` using colors from `palette`.
    fn spawn(
        &self,
        origin: Point,
        options: &EffectOptions,
        palette: &[Color],
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Sprite>>;
}

/// Inclusive-exclusive sampling range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl Span {
    /// Creates a span.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A span that always yields `value`.
    #[must_use]
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Draws a value.
    pub fn sample(self, ctx: &mut SpawnContext<'_>) -> f32 {
        ctx.range(self.min, self.max)
    }
}

fn count_for(base: usize, options: &EffectOptions) -> usize {
    options.scaled_count(base).min(MAX_PARTICLES_PER_TRIGGER)
}

fn color_from(palette: &[Color], ctx: &mut SpawnContext<'_>) -> Color {
    ctx.pick(palette).copied().unwrap_or(FALLBACK)
}

/// Everything flies outwards from the origin.
#[derive(Debug, Clone)]
pub struct Radial {
    /// Particles at intensity 1.
    pub count: usize,
    /// Launch direction in degrees (`angle` option overrides); 0 is right, -90 up.
    pub angle: f32,
    /// Cone width in degrees (`spread` option overrides).
    pub spread: f32,
    /// Initial speed.
    pub speed: Span,
    /// Active lifespan.
    pub lifespan: Span,
    /// Initial size.
    pub size: Span,
    /// Maximum spin magnitude.
    pub spin: f32,
}

impl Spawner for Radial {
    fn spawn(
        &self,
        origin: Point,
        options: &EffectOptions,
        palette: &[Color],
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Sprite>> {
        let center = options.number("angle").unwrap_or(self.angle).to_radians();
        let spread = options
            .number("spread")
            .unwrap_or(self.spread)
            .to_radians()
            .clamp(0.0, TAU);
        let count = count_for(self.count, options);

        (0..count)
            .map(|_| {
                let angle = center + ctx.jitter(spread * 0.5);
                let speed = self.speed.sample(ctx);
                let size = self.size.sample(ctx);
                let color = color_from(palette, ctx);
                let rotation = ctx.range(0.0, TAU);
                let spin = ctx.jitter(self.spin);
                let life = self.lifespan.sample(ctx);
                let sprite = Sprite::new(origin, size, color)
                    .moving(angle.cos() * speed, angle.sin() * speed)
                    .spinning(rotation, spin);
                ctx.particle(origin, life, sprite)
            })
            .collect()
    }
}

/// Particles drift away in one direction, staggered over time.
#[derive(Debug, Clone)]
pub struct Rise {
    /// Particles at intensity 1.
    pub count: usize,
    /// Horizontal scatter around the origin.
    pub spread: f32,
    /// Travel speed.
    pub speed: Span,
    /// Active lifespan.
    pub lifespan: Span,
    /// Initial size.
    pub size: Span,
    /// Latest start, in progress units.
    pub max_delay: f32,
}

impl Spawner for Rise {
    fn spawn(
        &self,
        origin: Point,
        options: &EffectOptions,
        palette: &[Color],
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Sprite>> {
        let (dx, dy): (f32, f32) = match options.text("direction") {
            Some("down") => (0.0, 1.0),
            Some("left") => (-1.0, 0.0),
            Some("right") => (1.0, 0.0),
            _ => (0.0, -1.0),
        };
        let count = count_for(self.count, options);

        (0..count)
            .map(|_| {
                let offset = ctx.jitter(self.spread);
                // Scatter perpendicular to the travel direction.
                let start = origin.offset(offset * dy.abs(), offset * dx.abs());
                let speed = self.speed.sample(ctx);
                let size = self.size.sample(ctx);
                let color = color_from(palette, ctx);
                let phase = ctx.range(0.0, TAU);
                let tilt = ctx.jitter(0.3);
                let life = self.lifespan.sample(ctx);
                let delay = ctx.range(0.0, self.max_delay);
                let sprite = Sprite::new(start, size, color)
                    .moving(dx * speed, dy * speed)
                    .spinning(tilt, 0.0)
                    .phased(phase);
                ctx.particle(start, life, sprite).with_delay(delay)
            })
            .collect()
    }
}

/// Motionless points scattered in a disc, each waking at a random time.
#[derive(Debug, Clone)]
pub struct Scatter {
    /// Particles at intensity 1.
    pub count: usize,
    /// Disc radius (overridable with the `radius` option).
    pub radius: f32,
    /// Active lifespan.
    pub lifespan: Span,
    /// Size.
    pub size: Span,
    /// Latest start, in progress units.
    pub max_delay: f32,
}

impl Spawner for Scatter {
    fn spawn(
        &self,
        origin: Point,
        options: &EffectOptions,
        palette: &[Color],
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Sprite>> {
        let radius = options.number("radius").map_or(self.radius, f32::abs);
        let count = count_for(self.count, options);

        (0..count)
            .map(|_| {
                // sqrt keeps the disc uniformly filled
                let distance = radius * ctx.range(0.0, 1.0).sqrt();
                let position = origin.polar(ctx.range(0.0, TAU), distance);
                let size = self.size.sample(ctx);
                let color = color_from(palette, ctx);
                let phase = ctx.range(0.0, TAU);
                let rotation = ctx.range(0.0, TAU);
                let life = self.lifespan.sample(ctx);
                let delay = ctx.range(0.0, self.max_delay);
                let sprite = Sprite::new(position, size, color)
                    .spinning(rotation, 0.0)
                    .phased(phase);
                ctx.particle(position, life, sprite).with_delay(delay)
            })
            .collect()
    }
}

/// Concentric rings released one after another from the origin.
#[derive(Debug, Clone)]
pub struct Rings {
    /// Rings at intensity 1.
    pub count: usize,
    /// Delay between consecutive rings.
    pub interval: f32,
    /// Active lifespan of each ring.
    pub lifespan: f32,
    /// Starting radius.
    pub radius: f32,
}

impl Spawner for Rings {
    fn spawn(
        &self,
        origin: Point,
        options: &EffectOptions,
        palette: &[Color],
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Sprite>> {
        let count = count_for(self.count, options);
        (0..count)
            .map(|i| {
                let color = palette.get(i % palette.len().max(1)).copied().unwrap_or(FALLBACK);
                let sprite = Sprite::new(origin, self.radius, color);
                ctx.particle(origin, self.lifespan, sprite)
                    .with_delay(self.interval * i as f32)
            })
            .collect()
    }
}

/// Several bursts ("shells") around the origin, each launched a little later.
#[derive(Debug, Clone)]
pub struct Salvo {
    /// Shells at intensity 1.
    pub shells: usize,
    /// Sparks per shell.
    pub sparks: usize,
    /// How far from the origin shells may burst (`radius` option overrides).
    pub radius: f32,
    /// Delay between consecutive shells.
    pub interval: f32,
    /// Spark speed.
    pub speed: Span,
    /// Spark lifespan.
    pub lifespan: Span,
    /// Spark size.
    pub size: Span,
}

impl Spawner for Salvo {
    fn spawn(
        &self,
        origin: Point,
        options: &EffectOptions,
        palette: &[Color],
        ctx: &mut SpawnContext<'_>,
    ) -> Vec<Particle<Sprite>> {
        let radius = options.number("radius").map_or(self.radius, f32::abs);
        let shells = count_for(self.shells, options).max(usize::from(options.intensity() > 0.0));
        let sparks = self.sparks.min(MAX_PARTICLES_PER_TRIGGER / shells.max(1));

        let mut particles = Vec::with_capacity(shells * sparks);
        for shell in 0..shells {
            let center = origin.polar(ctx.range(0.0, TAU), ctx.range(0.0, radius));
            let color = color_from(palette, ctx);
            let delay = self.interval * shell as f32;
            for spark in 0..sparks {
                let angle = TAU * spark as f32 / sparks as f32 + ctx.jitter(0.1);
                let speed = self.speed.sample(ctx);
                let size = self.size.sample(ctx);
                let life = self.lifespan.sample(ctx);
                let sprite = Sprite::new(center, size, color)
                    .moving(angle.cos() * speed, angle.sin() * speed);
                particles.push(ctx.particle(center, life, sprite).with_delay(delay));
            }
        }
        particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use sparkfx_core::{DelayMode, EffectRng, IdGenerator};

    fn run<S: Spawner>(spawner: &S, options: &EffectOptions) -> Vec<Particle<Sprite>> {
        let mut rng = EffectRng::seed_from_u64(9);
        let mut ids = IdGenerator::new();
        let mut ctx = SpawnContext::new(&mut rng, &mut ids, DelayMode::Absolute);
        spawner.spawn(Point::new(50.0, 50.0), options, &[Color::WHITE], &mut ctx)
    }

    fn radial() -> Radial {
        Radial {
            count: 20,
            angle: 0.0,
            spread: 360.0,
            speed: Span::new(1.0, 2.0),
            lifespan: Span::new(10.0, 20.0),
            size: Span::fixed(3.0),
            spin: 0.0,
        }
    }

    #[test]
    fn test_intensity_scales_and_caps_counts() {
        assert_eq!(run(&radial(), &EffectOptions::new()).len(), 20);
        assert_eq!(run(&radial(), &EffectOptions::new().with_intensity(0.5)).len(), 10);
        assert_eq!(run(&radial(), &EffectOptions::new().with_intensity(-3.0)).len(), 0);

        let big = Radial {
            count: 100,
            ..radial()
        };
        assert_eq!(
            run(&big, &EffectOptions::new().with_intensity(8.0)).len(),
            MAX_PARTICLES_PER_TRIGGER
        );
    }

    #[test]
    fn test_radial_respects_angle_and_spread() {
        let opts = EffectOptions::new().with("angle", 0.0_f32).with("spread", 0.0_f32);
        for p in run(&radial(), &opts) {
            assert!(p.state.vx > 0.0);
            assert!(p.state.vy.abs() < 1e-5);
        }
    }

    #[test]
    fn test_rise_direction_option() {
        let rise = Rise {
            count: 6,
            spread: 10.0,
            speed: Span::new(1.0, 2.0),
            lifespan: Span::fixed(30.0),
            size: Span::fixed(5.0),
            max_delay: 10.0,
        };
        for p in run(&rise, &EffectOptions::new()) {
            assert!(p.state.vy < 0.0, "default rises upward");
            assert!(p.lifespan().delay() < 10.0);
        }
        for p in run(&rise, &EffectOptions::new().with("direction", "right")) {
            assert!(p.state.vx > 0.0);
        }
    }

    #[test]
    fn test_rings_are_staggered() {
        let rings = Rings {
            count: 3,
            interval: 8.0,
            lifespan: 40.0,
            radius: 4.0,
        };
        let delays: Vec<f32> = run(&rings, &EffectOptions::new())
            .iter()
            .map(|p| p.lifespan().delay())
            .collect();
        assert_eq!(delays, vec![0.0, 8.0, 16.0]);
    }

    #[test]
    fn test_scatter_stays_in_disc() {
        let scatter = Scatter {
            count: 30,
            radius: 25.0,
            lifespan: Span::fixed(20.0),
            size: Span::fixed(2.0),
            max_delay: 5.0,
        };
        for p in run(&scatter, &EffectOptions::new()) {
            assert!(p.position().distance(Point::new(50.0, 50.0)) <= 25.0 + 1e-3);
        }
    }

    #[test]
    fn test_salvo_shells_share_a_delay() {
        let salvo = Salvo {
            shells: 3,
            sparks: 5,
            radius: 10.0,
            interval: 12.0,
            speed: Span::fixed(2.0),
            lifespan: Span::fixed(30.0),
            size: Span::fixed(2.0),
        };
        let particles = run(&salvo, &EffectOptions::new());
        assert_eq!(particles.len(), 15);
        assert!(particles[..5].iter().all(|p| p.lifespan().delay() == 0.0));
        assert!(particles[10..].iter().all(|p| (p.lifespan().delay() - 24.0).abs() < 1e-5));
    }
}
