//! Axis-aligned rectangles and bounding-box computation.

use serde::Serialize;
use thiserror::Error;

use super::{round_i, Point};

/// Error types for geometric construction failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// The rectangle would have non-positive width or height.
    #[error("invalid rectangle ({x1}, {y1}, {x2}, {y2}): x2 must exceed x1 and y2 must exceed y1")]
    InvalidRectangle { x1: i32, y1: i32, x2: i32, y2: i32 },

    /// A bounding box was requested for an empty point set.
    #[error("bounding box requires at least one point")]
    EmptyPointSet,
}

/// An axis-aligned rectangle with strictly positive width and height.
///
/// Coordinates are integer pixel positions; `(x1, y1)` is the top-left
/// corner and `(x2, y2)` the bottom-right. The invariant `x2 > x1` and
/// `y2 > y1` is enforced at construction and preserved by every mutator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Rect {
    /// Build a rectangle from four coordinates. Each coordinate is rounded
    /// to the nearest integer before the invariant check.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, GeometryError> {
        let (x1, y1, x2, y2) = (round_i(x1), round_i(y1), round_i(x2), round_i(y2));

        if x2 <= x1 || y2 <= y1 {
            return Err(GeometryError::InvalidRectangle { x1, y1, x2, y2 });
        }

        Ok(Self { x1, y1, x2, y2 })
    }

    /// Minimal axis-aligned rectangle enclosing a non-empty set of points.
    pub fn bounding(points: &[Point]) -> Result<Self, GeometryError> {
        let first = points.first().ok_or(GeometryError::EmptyPointSet)?;

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Rect::new(
            f64::from(min_x),
            f64::from(min_y),
            f64::from(max_x),
            f64::from(max_y),
        )
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn x2(&self) -> i32 {
        self.x2
    }

    pub fn y2(&self) -> i32 {
        self.y2
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Euclidean distance between the top-left and bottom-right corners.
    pub fn diagonal(&self) -> f64 {
        f64::from(self.width()).hypot(f64::from(self.height()))
    }

    /// Center point relative to the rectangle's own top-left corner,
    /// i.e. `(width / 2, height / 2)` rounded.
    pub fn center(&self) -> Point {
        Point::new(
            round_i(f64::from(self.width()) / 2.0),
            round_i(f64::from(self.height()) / 2.0),
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x2, self.y1)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x1, self.y2)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// The four corner points in top-left, top-right, bottom-left,
    /// bottom-right order.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }

    /// Shift all four coordinates by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    /// Recenter the rectangle so its center lands on `point`. The half
    /// extents are `round(width / 2)` and `round(height / 2)`, so odd
    /// dimensions grow by one pixel.
    pub fn center_on_point(&mut self, point: Point) {
        let half_w = round_i(f64::from(self.width()) / 2.0);
        let half_h = round_i(f64::from(self.height()) / 2.0);

        self.x1 = point.x - half_w;
        self.y1 = point.y - half_h;
        self.x2 = point.x + half_w;
        self.y2 = point.y + half_h;
    }

    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.x1, self.y1, self.x2, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_construction() {
        let r = Rect::new(10.0, 20.0, 30.0, 60.0).unwrap();
        assert_eq!(r.width(), 20);
        assert_eq!(r.height(), 40);
        assert_eq!(r.as_tuple(), (10, 20, 30, 60));
    }

    #[test]
    fn test_coordinates_rounded_before_check() {
        // 9.6 rounds to 10, 10.4 rounds to 10: degenerate after rounding
        let err = Rect::new(9.6, 0.0, 10.4, 5.0).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidRectangle { .. }));

        // 9.4 rounds to 9, 10.6 rounds to 11: fine
        let r = Rect::new(9.4, 0.0, 10.6, 5.0).unwrap();
        assert_eq!(r.width(), 2);
    }

    #[test]
    fn test_inverted_coordinates_rejected() {
        assert!(Rect::new(30.0, 0.0, 10.0, 5.0).is_err());
        assert!(Rect::new(0.0, 5.0, 10.0, 5.0).is_err());
        assert!(Rect::new(0.0, 8.0, 10.0, 5.0).is_err());
    }

    #[test]
    fn test_diagonal() {
        let r = Rect::new(0.0, 0.0, 3.0, 4.0).unwrap();
        assert!((r.diagonal() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_center_is_relative_to_own_origin() {
        let r = Rect::new(40.0, 40.0, 60.0, 60.0).unwrap();
        assert_eq!(r.center(), Point::new(10, 10));
    }

    #[test]
    fn test_translate() {
        let mut r = Rect::new(1.0, 2.0, 5.0, 9.0).unwrap();
        r.translate(-3, 4);
        assert_eq!(r.as_tuple(), (-2, 6, 2, 13));
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 7);
    }

    #[test]
    fn test_center_on_point_even_dimensions() {
        let mut r = Rect::new(0.0, 0.0, 20.0, 10.0).unwrap();
        r.center_on_point(Point::new(50, 50));
        assert_eq!(r.as_tuple(), (40, 45, 60, 55));
        assert_eq!(r.width(), 20);
        assert_eq!(r.height(), 10);
    }

    #[test]
    fn test_center_on_point_odd_dimensions_grow() {
        let mut r = Rect::new(0.0, 0.0, 5.0, 5.0).unwrap();
        r.center_on_point(Point::new(10, 10));
        // round(5 / 2) = 3, so the rect grows to 6x6
        assert_eq!(r.as_tuple(), (7, 7, 13, 13));
    }

    #[test]
    fn test_bounding_of_corners_is_identity() {
        let r = Rect::new(3.0, 7.0, 19.0, 23.0).unwrap();
        assert_eq!(Rect::bounding(&r.corners()).unwrap(), r);
    }

    #[test]
    fn test_bounding_of_scattered_points() {
        let points = [
            Point::new(5, 9),
            Point::new(-2, 4),
            Point::new(11, -3),
            Point::new(0, 0),
        ];
        let r = Rect::bounding(&points).unwrap();
        assert_eq!(r.as_tuple(), (-2, -3, 11, 9));
    }

    #[test]
    fn test_bounding_of_empty_set_fails() {
        assert_eq!(Rect::bounding(&[]).unwrap_err(), GeometryError::EmptyPointSet);
    }

    #[test]
    fn test_bounding_of_collinear_points_fails() {
        // All points share a y coordinate: zero height
        let points = [Point::new(0, 5), Point::new(10, 5)];
        assert!(Rect::bounding(&points).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any strictly ordered coordinate pair constructs, and the derived
        /// width and height match the coordinate differences.
        #[test]
        fn prop_valid_rect_dimensions(
            x1 in -1000i32..=1000,
            y1 in -1000i32..=1000,
            w in 1i32..=500,
            h in 1i32..=500,
        ) {
            let r = Rect::new(
                f64::from(x1),
                f64::from(y1),
                f64::from(x1 + w),
                f64::from(y1 + h),
            ).unwrap();

            prop_assert_eq!(r.width(), w);
            prop_assert_eq!(r.height(), h);
        }

        /// Inverted or degenerate coordinates always fail.
        #[test]
        fn prop_degenerate_rect_rejected(
            x1 in -1000i32..=1000,
            y1 in -1000i32..=1000,
            w in -500i32..=0,
            h in 1i32..=500,
        ) {
            prop_assert!(Rect::new(
                f64::from(x1),
                f64::from(y1),
                f64::from(x1 + w),
                f64::from(y1 + h),
            ).is_err());
        }

        /// The bounding box of a rect's own corners is the rect itself.
        #[test]
        fn prop_bounding_identity(
            x1 in -1000i32..=1000,
            y1 in -1000i32..=1000,
            w in 1i32..=500,
            h in 1i32..=500,
        ) {
            let r = Rect::new(
                f64::from(x1),
                f64::from(y1),
                f64::from(x1 + w),
                f64::from(y1 + h),
            ).unwrap();

            prop_assert_eq!(Rect::bounding(&r.corners()).unwrap(), r);
        }
    }
}
