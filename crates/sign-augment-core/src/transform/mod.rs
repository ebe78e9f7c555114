//! Pixel-level transform primitives: canvas-growing rotation and
//! zero-padded cropping.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows down
//! - Rotation angles are in degrees; rotating the image by `angle` moves
//!   its content the same way as rotating pixel coordinates by `-angle`
//!   about the image center (see `transform::rotation`)

mod crop;
mod rotation;

pub use crop::cut_with_zero_padding;
pub use rotation::{rotate_image, rotated_canvas_size};
