//! RGB8 image buffers and the source-image loading collaborator.

use std::path::Path;

use crate::error::{AugmentError, Result};
use crate::geometry::Point;

/// A decoded image with tightly packed RGB8 pixel data.
///
/// Pixels are stored row-major, three bytes per pixel. The engine reads
/// from source buffers and allocates new buffers for crops and rotations;
/// it never mutates a buffer it did not allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB8 pixel data, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize) * 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Allocate an all-black buffer.
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; (width as usize) * (height as usize) * 3],
        }
    }

    /// The pixel at `(x, y)`. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * self.width + x) * 3) as usize;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Geometric center in integer pixel coordinates (floor of the
    /// half extents).
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn from_rgb8(image: image::RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }

    pub fn into_rgb8(self) -> image::RgbImage {
        image::RgbImage::from_raw(self.width, self.height, self.pixels)
            .unwrap_or_else(|| image::RgbImage::new(0, 0))
    }
}

/// Load a source image as RGB8.
///
/// A missing file maps to [`AugmentError::SourceImageMissing`] and a decode
/// failure to [`AugmentError::SourceImageUnreadable`], so callers can skip
/// the annotation and continue.
pub fn load_rgb8(path: impl AsRef<Path>) -> Result<ImageBuffer> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AugmentError::SourceImageMissing {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|source| AugmentError::SourceImageUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ImageBuffer::from_rgb8(image.to_rgb8()))
}
