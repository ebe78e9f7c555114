//! 2-D integer points with translation and rotation about an arbitrary origin.

use serde::{Deserialize, Serialize};

use super::round_i;

/// A 2-D point in integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move the point along a vector (component-wise addition).
    pub fn translated(self, vector: Point) -> Point {
        Point::new(self.x + vector.x, self.y + vector.y)
    }

    /// Rotate the point counter-clockwise about `origin` by `angle_degrees`,
    /// using the standard 2-D rotation matrix. The result is rounded to the
    /// nearest integer pixel.
    ///
    /// Rotating by `angle` and then by `-angle` returns the original point
    /// within one pixel of rounding error.
    pub fn rotated_about(self, origin: Point, angle_degrees: f64) -> Point {
        let angle = angle_degrees.to_radians();
        let (sin, cos) = angle.sin_cos();

        let dx = f64::from(self.x - origin.x);
        let dy = f64::from(self.y - origin.y);

        Point::new(
            round_i(f64::from(origin.x) + cos * dx - sin * dy),
            round_i(f64::from(origin.y) + sin * dx + cos * dy),
        )
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let p = Point::new(3, -2).translated(Point::new(-1, 7));
        assert_eq!(p, Point::new(2, 5));
    }

    #[test]
    fn test_rotate_quarter_turn_about_origin() {
        let p = Point::new(10, 0).rotated_about(Point::new(0, 0), 90.0);
        assert_eq!(p, Point::new(0, 10));
    }

    #[test]
    fn test_rotate_half_turn() {
        let p = Point::new(5, 3).rotated_about(Point::new(0, 0), 180.0);
        assert_eq!(p, Point::new(-5, -3));
    }

    #[test]
    fn test_rotate_about_non_origin() {
        let p = Point::new(12, 10).rotated_about(Point::new(10, 10), 90.0);
        assert_eq!(p, Point::new(10, 12));
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let p = Point::new(-7, 13);
        assert_eq!(p.rotated_about(Point::new(4, 4), 0.0), p);
    }
}
