use derive_more::{
    Add, AddAssign, Display, From, Into, Mul, MulAssign, Neg, Sub, SubAssign,
};
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// A point or vector on the 2D plane. This is the interchange type between
/// hex space and pixel space: [HexGrid](crate::HexGrid) turns coordinates
/// into these and back. Nothing in hex space depends on it.
///
/// The plane uses screen conventions: x grows to the right and **y grows
/// downward**.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vec2D {
    pub x: f64,
    pub y: f64,
}

impl Vec2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of this vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Scale this vector to unit length. The zero vector has no direction, so
    /// it's returned unchanged.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            Self::new(self.x / length, self.y / length)
        } else {
            self
        }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Rotate this vector around the origin by the given angle, in degrees.
    /// Positive angles rotate from +x towards +y.
    pub fn rotate(self, degrees: f64) -> Self {
        let rotated =
            Rotation2::new(degrees.to_radians()) * Vector2::new(self.x, self.y);
        Self::new(rotated.x, rotated.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            Vec2D::new(1.0, 2.0) + Vec2D::new(3.0, 4.0),
            Vec2D::new(4.0, 6.0)
        );
        assert_eq!(
            Vec2D::new(4.0, 3.0) - Vec2D::new(1.0, 2.0),
            Vec2D::new(3.0, 1.0)
        );
        assert_eq!(Vec2D::from((1.0, 2.0)), Vec2D::new(1.0, 2.0));
        assert_eq!(Vec2D::new(1.0, -2.0) * 3.0, Vec2D::new(3.0, -6.0));
        assert_eq!(-Vec2D::new(1.0, -2.0), Vec2D::new(-1.0, 2.0));
        assert_eq!(Vec2D::default(), Vec2D::ZERO);
    }

    #[test]
    fn test_length_and_distance() {
        assert_approx_eq!(Vec2D::new(2.0, 2.0).length(), 2.0 * 2f64.sqrt());
        assert_approx_eq!(
            Vec2D::new(1.0, 1.0).distance(Vec2D::new(3.0, 3.0)),
            2.0 * 2f64.sqrt()
        );
        assert_approx_eq!(Vec2D::new(-3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let unit = Vec2D::new(3.0, 4.0).normalize();
        assert_approx_eq!(unit.x, 0.6);
        assert_approx_eq!(unit.y, 0.8);
        assert_approx_eq!(unit.length(), 1.0);
        // No direction to preserve, so nothing changes
        assert_eq!(Vec2D::ZERO.normalize(), Vec2D::ZERO);
    }

    #[test]
    fn test_dot() {
        assert_approx_eq!(Vec2D::new(1.0, 2.0).dot(Vec2D::new(3.0, 4.0)), 11.0);
        assert_approx_eq!(Vec2D::new(1.0, 0.0).dot(Vec2D::new(0.0, 5.0)), 0.0);
    }

    #[test]
    fn test_rotate() {
        let rotated = Vec2D::new(1.0, 0.0).rotate(90.0);
        assert_approx_eq!(rotated.x, 0.0);
        assert_approx_eq!(rotated.y, 1.0);

        let rotated = Vec2D::new(1.0, 0.0).rotate(-90.0);
        assert_approx_eq!(rotated.x, 0.0);
        assert_approx_eq!(rotated.y, -1.0);

        let rotated = Vec2D::new(2.0, 1.0).rotate(180.0);
        assert_approx_eq!(rotated.x, -2.0);
        assert_approx_eq!(rotated.y, -1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2D::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
