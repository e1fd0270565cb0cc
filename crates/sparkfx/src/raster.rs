//! # Raster Surface
//!
//! A [`Surface`] that paints into a `tiny_skia::Pixmap`, for headless
//! rendering, snapshots and the demo binary.
//!
//! Global alpha and blend mode live on a save/restore stack, like a 2D
//! canvas context. Text is not shaped: `fill_text` paints a translucent
//! placeholder box covering roughly where the glyphs would go.

use std::path::Path;

use thiserror::Error;
use tiny_skia as sk;

use sparkfx_core::{BlendMode, Color, Point, Rect, Surface};

/// Errors from the raster backend.
#[derive(Error, Debug)]
pub enum RasterError {
    /// Zero or oversized dimensions.
    #[error("invalid pixmap size: {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// PNG encoding or writing failed.
    #[error("png export failed: {0}")]
    Encode(String),
}

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;

#[derive(Debug, Clone, Copy)]
struct DrawState {
    alpha: f32,
    blend: BlendMode,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            blend: BlendMode::SourceOver,
        }
    }
}

/// CPU rasterizer surface.
pub struct PixmapSurface {
    pixmap: sk::Pixmap,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl PixmapSurface {
    /// Creates a transparent surface.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidSize`] for zero or oversized dimensions.
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        let pixmap = sk::Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            state: DrawState::default(),
            stack: Vec::new(),
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills every pixel with `color` and resets the drawing state.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_sk(color));
        self.state = DrawState::default();
        self.stack.clear();
    }

    /// The underlying pixmap.
    #[must_use]
    pub fn pixmap(&self) -> &sk::Pixmap {
        &self.pixmap
    }

    /// Consumes the surface, returning the pixmap.
    #[must_use]
    pub fn into_pixmap(self) -> sk::Pixmap {
        self.pixmap
    }

    /// Alpha of the pixel at `(x, y)`, `None` if out of bounds.
    #[must_use]
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixmap.pixel(x, y).map(|p| p.alpha())
    }

    /// Encodes the current frame as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if encoding fails.
    pub fn encode_png(&self) -> RasterResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }

    /// Writes the current frame to `path` as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if encoding or writing fails.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RasterResult<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .map_err(|e| RasterError::Encode(format!("{}: {e}", path.display())))?;
        tracing::info!("Wrote frame to {}", path.display());
        Ok(())
    }

    fn paint(&self, color: Color) -> sk::Paint<'static> {
        let mut paint = sk::Paint::default();
        paint.set_color(to_sk(color.with_opacity(self.state.alpha)));
        paint.anti_alias = true;
        paint.blend_mode = blend(self.state.blend);
        paint
    }

    fn fill(&mut self, path: &sk::Path, paint: &sk::Paint<'_>) {
        self.pixmap
            .fill_path(path, paint, sk::FillRule::Winding, sk::Transform::identity(), None);
    }

    fn stroke(&mut self, path: &sk::Path, width: f32, paint: &sk::Paint<'_>) {
        let stroke = sk::Stroke {
            width,
            line_cap: sk::LineCap::Round,
            ..sk::Stroke::default()
        };
        self.pixmap
            .stroke_path(path, paint, &stroke, sk::Transform::identity(), None);
    }
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl Surface for PixmapSurface {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if let Some(path) = sk::PathBuilder::from_circle(center.x, center.y, radius) {
            let paint = self.paint(color);
            self.fill(&path, &paint);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        if let Some(path) = sk::PathBuilder::from_circle(center.x, center.y, radius) {
            let paint = self.paint(color);
            self.stroke(&path, width, &paint);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_polygon(&rect.corners(), color);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if let Some(path) = polygon(points) {
            let paint = self.paint(color);
            self.fill(&path, &paint);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let mut pb = sk::PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        if let Some(path) = pb.finish() {
            let paint = self.paint(color);
            self.stroke(&path, width, &paint);
        }
    }

    fn fill_radial_glow(&mut self, center: Point, radius: f32, color: Color) {
        let Some(path) = sk::PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        let inner = color.with_opacity(self.state.alpha);
        let stops = vec![
            sk::GradientStop::new(0.0, to_sk(inner)),
            sk::GradientStop::new(1.0, to_sk(inner.with_opacity(0.0))),
        ];
        let origin = sk::Point::from_xy(center.x, center.y);
        let Some(shader) = sk::RadialGradient::new(
            origin,
            origin,
            radius,
            stops,
            sk::SpreadMode::Pad,
            sk::Transform::identity(),
        ) else {
            return;
        };
        let paint = sk::Paint {
            shader,
            anti_alias: true,
            blend_mode: blend(self.state.blend),
            ..sk::Paint::default()
        };
        self.fill(&path, &paint);
    }

    fn fill_text(&mut self, text: &str, at: Point, size: f32, color: Color) {
        let width = size * 0.6 * text.chars().count() as f32;
        if let Some(rect) = sk::Rect::from_xywh(at.x, at.y - size, width, size) {
            let path = sk::PathBuilder::from_rect(rect);
            let paint = self.paint(color.with_opacity(0.5));
            self.fill(&path, &paint);
        }
    }
}

fn to_sk(color: Color) -> sk::Color {
    sk::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn blend(mode: BlendMode) -> sk::BlendMode {
    match mode {
        BlendMode::SourceOver => sk::BlendMode::SourceOver,
        BlendMode::Additive => sk::BlendMode::Plus,
        BlendMode::Multiply => sk::BlendMode::Multiply,
        BlendMode::Screen => sk::BlendMode::Screen,
    }
}

fn polygon(points: &[Point]) -> Option<sk::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = sk::PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(RasterError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_circle_paints_center_only() {
        let mut surface = PixmapSurface::new(32, 32).unwrap();
        surface.fill_circle(Point::new(16.0, 16.0), 4.0, Color::rgb(255, 0, 0));
        assert_eq!(surface.alpha_at(16, 16), Some(255));
        assert_eq!(surface.alpha_at(1, 1), Some(0));
    }

    #[test]
    fn test_global_alpha_is_scoped_by_save_restore() {
        let mut surface = PixmapSurface::new(32, 32).unwrap();
        surface.save();
        surface.set_global_alpha(0.0);
        surface.fill_circle(Point::new(8.0, 8.0), 4.0, Color::WHITE);
        surface.restore();
        surface.fill_circle(Point::new(24.0, 24.0), 4.0, Color::WHITE);

        assert_eq!(surface.alpha_at(8, 8), Some(0));
        assert_eq!(surface.alpha_at(24, 24), Some(255));
    }

    #[test]
    fn test_unbalanced_restore_is_harmless() {
        let mut surface = PixmapSurface::new(8, 8).unwrap();
        surface.restore();
        surface.fill_rect(Rect::centered(Point::new(4.0, 4.0), 8.0, 8.0), Color::WHITE);
        assert_eq!(surface.alpha_at(4, 4), Some(255));
    }

    #[test]
    fn test_glow_fades_outwards() {
        let mut surface = PixmapSurface::new(64, 64).unwrap();
        surface.fill_radial_glow(Point::new(32.0, 32.0), 30.0, Color::WHITE);
        let center = surface.alpha_at(32, 32).unwrap();
        let edge = surface.alpha_at(32, 60).unwrap();
        assert!(center > edge);
    }

    #[test]
    fn test_png_encoding() {
        let surface = PixmapSurface::new(4, 4).unwrap();
        let bytes = surface.encode_png().unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
