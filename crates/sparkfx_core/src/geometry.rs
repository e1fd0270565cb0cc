//! 2D points and rectangles in surface coordinates.

use serde::{Deserialize, Serialize};

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate (grows downwards).
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the point `distance` away from this one along `angle` (radians).
    #[inline]
    #[must_use]
    pub fn polar(self, angle: f32, distance: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.offset(cos * distance, sin * distance)
    }

    /// Linear interpolation towards `other`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned rectangle, optionally rotated about its center when drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Center of the rectangle.
    pub center: Point,
    /// Full width.
    pub width: f32,
    /// Full height.
    pub height: f32,
    /// Rotation about the center, in radians.
    pub rotation: f32,
}

impl Rect {
    /// Creates an unrotated rectangle centered on `center`.
    #[must_use]
    pub const fn centered(center: Point, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Sets the rotation.
    #[must_use]
    pub const fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// The four corners, clockwise from the top-left, with rotation applied.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let (sin, cos) = self.rotation.sin_cos();
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(dx, dy)| {
            self.center
                .offset(dx * cos - dy * sin, dx * sin + dy * cos)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_offsets_along_angle() {
        let p = Point::ZERO.polar(0.0, 10.0);
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!(p.y.abs() < 1e-5);

        let q = Point::new(1.0, 1.0).polar(std::f32::consts::FRAC_PI_2, 2.0);
        assert!((q.x - 1.0).abs() < 1e-5);
        assert!((q.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_unrotated_corners() {
        let rect = Rect::centered(Point::new(10.0, 10.0), 4.0, 2.0);
        let corners = rect.corners();
        assert_eq!(corners[0], Point::new(8.0, 9.0));
        assert_eq!(corners[2], Point::new(12.0, 11.0));
    }
}
