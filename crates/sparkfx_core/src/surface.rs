//! # Drawing Surface Boundary
//!
//! The host owns the surface; the runtime only forwards it to `draw`. The
//! trait lists the paint primitives recipes need: filled and stroked
//! shapes, a radial glow, text, and compositing state.
//!
//! [`RecordingSurface`] is the reference implementation used by tests and
//! headless hosts: it paints nothing and keeps a log of every call.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::particle::ParticleId;

/// How new paint is composited over existing pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Standard alpha blending.
    #[default]
    SourceOver,
    /// Additive ("lighter") blending, for glows and sparks.
    Additive,
    /// Multiply, for shadows.
    Multiply,
    /// Screen, for soft highlights.
    Screen,
}

/// A paint target.
///
/// The runtime brackets every particle's `draw` with [`Surface::save`] and
/// [`Surface::restore`], so compositing state set by one recipe never leaks
/// into the next particle.
pub trait Surface {
    /// Marks the start of a particle's draw. Default: ignored.
    fn begin_particle(&mut self, _id: ParticleId) {}

    /// Pushes compositing state (global alpha, blend mode).
    fn save(&mut self);

    /// Pops compositing state pushed by [`Surface::save`].
    fn restore(&mut self);

    /// Multiplies every subsequent paint's alpha.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Sets the blend mode for subsequent paints.
    fn set_blend(&mut self, mode: BlendMode);

    /// Filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color);

    /// Filled (possibly rotated) rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Filled closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Straight line segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    /// Radial gradient from `color` at the center to transparent at `radius`.
    fn fill_radial_glow(&mut self, center: Point, radius: f32, color: Color);

    /// Text centered on `at`.
    fn fill_text(&mut self, text: &str, at: Point, size: f32, color: Color);
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::begin_particle`].
    BeginParticle(ParticleId),
    /// [`Surface::save`].
    Save,
    /// [`Surface::restore`].
    Restore,
    /// [`Surface::set_global_alpha`].
    GlobalAlpha(f32),
    /// [`Surface::set_blend`].
    Blend(BlendMode),
    /// [`Surface::fill_circle`].
    FillCircle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Color.
        color: Color,
    },
    /// [`Surface::stroke_circle`].
    StrokeCircle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Stroke width.
        width: f32,
        /// Color.
        color: Color,
    },
    /// [`Surface::fill_rect`].
    FillRect {
        /// Rectangle.
        rect: Rect,
        /// Color.
        color: Color,
    },
    /// [`Surface::fill_polygon`].
    FillPolygon {
        /// Vertices.
        points: Vec<Point>,
        /// Color.
        color: Color,
    },
    /// [`Surface::stroke_line`].
    StrokeLine {
        /// Start.
        from: Point,
        /// End.
        to: Point,
        /// Stroke width.
        width: f32,
        /// Color.
        color: Color,
    },
    /// [`Surface::fill_radial_glow`].
    RadialGlow {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Center color.
        color: Color,
    },
    /// [`Surface::fill_text`].
    Text {
        /// The text.
        text: String,
        /// Anchor.
        at: Point,
        /// Font size.
        size: f32,
        /// Color.
        color: Color,
    },
}

impl DrawCommand {
    /// Whether this command puts pixels on the surface.
    #[must_use]
    pub const fn is_paint(&self) -> bool {
        !matches!(
            self,
            Self::BeginParticle(_) | Self::Save | Self::Restore | Self::GlobalAlpha(_) | Self::Blend(_)
        )
    }
}

/// A surface that records calls instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    depth: usize,
    max_depth: usize,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Particle ids in the order their draws began.
    #[must_use]
    pub fn particle_order(&self) -> Vec<ParticleId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::BeginParticle(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Number of commands that put pixels on the surface.
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_paint()).count()
    }

    /// Whether every `save` has been matched by a `restore`.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.depth == 0
    }

    /// Deepest save nesting seen.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Forgets recorded commands (start of a new frame).
    pub fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.max_depth = 0;
    }
}

impl Surface for RecordingSurface {
    fn begin_particle(&mut self, id: ParticleId) {
        self.commands.push(DrawCommand::BeginParticle(id));
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.commands.push(DrawCommand::Blend(mode));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_radial_glow(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RadialGlow { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, at: Point, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            size,
            color,
        });
    }
}
