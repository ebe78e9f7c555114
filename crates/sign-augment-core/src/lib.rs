//! Sign Augment Core - Geometric augmentation engine
//!
//! This crate produces randomly rotated, offset, and cropped variants of
//! annotated traffic-sign regions, recomputing each bounding box in the
//! coordinate frame of the cropped output image. It consumes an image
//! buffer, one ground-truth rectangle, and a class label per annotation,
//! and hands back a batch of samples for a downstream writer to persist;
//! it performs no file output and generates no filenames itself.

pub mod augment;
pub mod buffer;
pub mod error;
pub mod geometry;
pub mod transform;

pub use augment::{area_of_interest, Annotation, AugmentedSample, Augmentor, CancelToken};
pub use buffer::{load_rgb8, ImageBuffer};
pub use error::{AugmentError, Result};
pub use geometry::{GeometryError, Point, Rect};
pub use transform::{cut_with_zero_padding, rotate_image, rotated_canvas_size};

/// Augmentation parameters for one batch run.
///
/// Validated once at engine construction; a bad configuration is a startup
/// error, never a per-row one.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AugmentConfig {
    /// Samples produced per annotation
    pub count: u32,
    /// Minimum border around the box, in pixels
    pub border_abs: u32,
    /// Border as a fraction of the box extent (0 to 1)
    pub border_rel: f64,
    /// Maximum random offset as a fraction of the buffered width (0 to 1)
    pub max_rel_offset: f64,
    /// Maximum random rotation, in degrees
    pub max_angle: u32,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            count: 8,
            border_abs: 5,
            border_rel: 0.1,
            max_rel_offset: 0.15,
            max_angle: 5,
        }
    }
}

impl AugmentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject unusable parameter sets.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(AugmentError::InvalidConfiguration(
                "count must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.border_rel) {
            return Err(AugmentError::InvalidConfiguration(format!(
                "border_rel must be within 0..=1, got {}",
                self.border_rel
            )));
        }
        if !(0.0..=1.0).contains(&self.max_rel_offset) {
            return Err(AugmentError::InvalidConfiguration(format!(
                "max_rel_offset must be within 0..=1, got {}",
                self.max_rel_offset
            )));
        }
        Ok(())
    }
}
