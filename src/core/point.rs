//! Vector and cell coordinate types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Canvas cell coordinates (integer indices).
///
/// The rasterizer and the canvas operate on these; a coordinate may lie
/// outside the canvas, in which case writes to it are discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new cell coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Continuous 2D vector, used for positions and headings.
///
/// Value type: operations return new vectors, nothing mutates in place.
/// Equality is exact component comparison; movement code snaps positions to
/// integer values before comparing them.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2D {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vec2D {
    /// Create a new vector
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero vector (origin)
    pub const ZERO: Vec2D = Vec2D { x: 0.0, y: 0.0 };

    /// Length of this vector
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rotate counterclockwise by `angle` degrees.
    ///
    /// Decomposes onto the vector and its perpendicular: with `perp = (-y, x)`
    /// the result is `self * cos + perp * sin`. Preserves length, so unit
    /// headings stay unit headings.
    #[inline]
    pub fn rotated(&self, angle_degrees: f64) -> Vec2D {
        let perp = Vec2D::new(-self.y, self.x);
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Vec2D::new(self.x * cos + perp.x * sin, self.y * cos + perp.y * sin)
    }

    /// Component-wise round to the nearest integer value.
    #[inline]
    pub fn round(&self) -> Vec2D {
        Vec2D::new(self.x.round(), self.y.round())
    }

    /// Truncate to a cell coordinate. Callers round first.
    #[inline]
    pub fn to_grid(&self) -> GridCoord {
        GridCoord::new(self.x as i32, self.y as i32)
    }
}

impl Add for Vec2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Vec2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Vec2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Vec2D::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_ops() {
        let u = Vec2D::new(1.0, 2.0);
        let v = Vec2D::new(3.0, 4.0);

        assert_eq!(u + v, Vec2D::new(4.0, 6.0));
        assert_eq!(u - v, Vec2D::new(-2.0, -2.0));
        assert_eq!(u * 2.0, Vec2D::new(2.0, 4.0));
    }

    #[test]
    fn test_magnitude() {
        assert_relative_eq!(Vec2D::new(3.0, 4.0).magnitude(), 5.0, epsilon = 1e-12);
        assert_eq!(Vec2D::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let r = Vec2D::new(1.0, 2.0).rotated(90.0);
        assert_relative_eq!(r.x, -2.0, epsilon = 1e-12);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotated_full_turn_is_identity() {
        let v = Vec2D::new(0.6, 0.8);
        let r = v.rotated(360.0);
        assert_relative_eq!(r.x, v.x, epsilon = 1e-9);
        assert_relative_eq!(r.y, v.y, epsilon = 1e-9);
    }

    #[test]
    fn test_rotated_preserves_length() {
        let v = Vec2D::new(0.0, 1.0);
        let r = v.rotated(123.456);
        assert_relative_eq!(r.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_and_to_grid() {
        let v = Vec2D::new(46.68, 74.49);
        assert_eq!(v.round(), Vec2D::new(47.0, 74.0));
        assert_eq!(v.round().to_grid(), GridCoord::new(47, 74));

        let w = Vec2D::new(-2.5, -0.4);
        assert_eq!(w.round(), Vec2D::new(-3.0, -0.0));
    }
}
