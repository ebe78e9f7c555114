//! Integer pixel geometry: points, rectangles, and bounding boxes.
//!
//! All coordinates are integer pixel positions with the origin at the
//! top-left corner, x growing right and y growing down. Operations that
//! produce fractional results (rotation, halving) round to the nearest
//! integer, half away from zero.

mod point;
mod rect;

pub use point::Point;
pub use rect::{GeometryError, Rect};

/// Round to nearest integer, half away from zero.
#[inline]
pub(crate) fn round_i(n: f64) -> i32 {
    n.round() as i32
}
