use crate::util::vec2d::Vec2D;
use serde::{Deserialize, Serialize};

/// A single pointy-topped hexagon as a polygon on the plane, used for hit
/// testing. Unlike [HexGrid](crate::HexGrid), this uses a y-up frame: the
/// "upper" vertex has the larger y.
///
/// `half_size` is the distance from the center to the top and bottom
/// vertices, and also half the width of the box.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    pub center: Vec2D,
    pub half_size: f64,
}

impl Hexagon {
    pub const fn new(center: Vec2D, half_size: f64) -> Self {
        Self { center, half_size }
    }

    pub fn upper(&self) -> Vec2D {
        self.center + Vec2D::new(0.0, self.half_size)
    }

    pub fn upper_right(&self) -> Vec2D {
        self.center + Vec2D::new(self.half_size, self.half_size / 2.0)
    }

    pub fn lower_right(&self) -> Vec2D {
        self.center + Vec2D::new(self.half_size, -self.half_size / 2.0)
    }

    pub fn lower(&self) -> Vec2D {
        self.center + Vec2D::new(0.0, -self.half_size)
    }

    pub fn lower_left(&self) -> Vec2D {
        self.center + Vec2D::new(-self.half_size, -self.half_size / 2.0)
    }

    pub fn upper_left(&self) -> Vec2D {
        self.center + Vec2D::new(-self.half_size, self.half_size / 2.0)
    }

    /// All six corners, clockwise from the top
    pub fn corners(&self) -> [Vec2D; 6] {
        [
            self.upper(),
            self.upper_right(),
            self.lower_right(),
            self.lower(),
            self.lower_left(),
            self.upper_left(),
        ]
    }

    /// Check if a point is inside this hexagon, border included
    pub fn is_inside(&self, point: Vec2D) -> bool {
        let upper = self.upper();
        let lower = self.lower();
        let upper_left = self.upper_left();
        let upper_right = self.upper_right();
        let lower_left = self.lower_left();
        let lower_right = self.lower_right();

        // Cheap box check first, which also covers the two vertical sides
        if point.x < lower_left.x
            || point.x > upper_right.x
            || point.y < lower.y
            || point.y > upper.y
        {
            return false;
        }

        // Then make sure the point is on the inner side of each slanted edge.
        // Each edge gets rotated a quarter turn towards the center to get its
        // inward normal.
        let inside_edge = |corner: Vec2D, towards: Vec2D, degrees: f64| {
            let normal = (towards - corner).rotate(degrees).normalize();
            normal.dot((point - corner).normalize()) >= 0.0
        };
        inside_edge(upper_right, upper, 90.0)
            && inside_edge(upper_left, upper, -90.0)
            && inside_edge(lower_right, lower, -90.0)
            && inside_edge(lower_left, lower, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let hexagon = Hexagon::new(Vec2D::new(1.0, 2.0), 4.0);
        assert_eq!(
            hexagon.corners(),
            [
                Vec2D::new(1.0, 6.0),
                Vec2D::new(5.0, 4.0),
                Vec2D::new(5.0, 0.0),
                Vec2D::new(1.0, -2.0),
                Vec2D::new(-3.0, 0.0),
                Vec2D::new(-3.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_is_inside() {
        let hexagon = Hexagon::new(Vec2D::ZERO, 256.0);
        for &(x, y) in &[
            (0.0, 0.0),
            (0.0, 128.0),
            (0.0, -128.0),
            (256.0, 0.0),
            (-256.0, 0.0),
        ] {
            assert!(hexagon.is_inside(Vec2D::new(x, y)), "({}, {})", x, y);
        }
        for &(x, y) in
            &[(0.0, 257.0), (0.0, -257.0), (257.0, 0.0), (-257.0, 0.0)]
        {
            assert!(!hexagon.is_inside(Vec2D::new(x, y)), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_is_inside_slanted_edges() {
        let hexagon = Hexagon::new(Vec2D::new(10.0, -10.0), 2.0);
        // Inside the bounding box, but past the slanted edges
        for &(dx, dy) in &[(1.9, 1.9), (-1.9, 1.9), (1.9, -1.9), (-1.9, -1.9)] {
            let point = hexagon.center + Vec2D::new(dx, dy);
            assert!(!hexagon.is_inside(point), "({}, {})", dx, dy);
        }
        // Just inside them
        for &(dx, dy) in &[(1.0, 1.4), (-1.0, 1.4), (1.0, -1.4), (-1.0, -1.4)] {
            let point = hexagon.center + Vec2D::new(dx, dy);
            assert!(hexagon.is_inside(point), "({}, {})", dx, dy);
        }
    }
}
