//! The randomized augmentation engine.
//!
//! For each annotated detection, a generously sized area of interest is
//! cut out of the source image once, then `count` independent samples are
//! drawn against that cached sub-image: each sample rotates the sub-image
//! by a random angle, re-derives the ground-truth box in the rotated
//! canvas, buffers it with a border, shifts it by a random offset, and
//! crops the final window with zero padding. The box coordinates are then
//! re-expressed in the cropped image's local frame.

mod aoi;
mod sampler;

pub use aoi::area_of_interest;
pub use sampler::{Annotation, AugmentedSample, Augmentor, CancelToken};
