//! The per-annotation randomized sampler.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;

use super::area_of_interest;
use crate::buffer::ImageBuffer;
use crate::error::{AugmentError, Result};
use crate::geometry::{round_i, Point, Rect};
use crate::transform::{cut_with_zero_padding, rotate_image};
use crate::AugmentConfig;

/// One annotated detection of a dataset table.
///
/// `row` identifies the annotation in error reports; `class` is an opaque
/// label passed through to every produced sample unchanged.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub row: usize,
    pub bounds: Rect,
    pub class: String,
}

/// One augmented output record.
///
/// `bounds` is the ground-truth box re-expressed in `image`'s local
/// coordinate frame. The applied rotation and offsets are reported so a
/// downstream writer can persist them alongside the corrected box.
#[derive(Debug, Clone)]
pub struct AugmentedSample {
    pub image: ImageBuffer,
    pub bounds: Rect,
    pub class: String,
    pub angle: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Cooperative cancellation flag, checked between annotations.
///
/// Cheap to clone; hand one copy to the augmentor and keep another to
/// request cancellation from elsewhere during a long batch run.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Produces batches of rotated, offset, and cropped variants of annotated
/// regions, with the bounding box recomputed in each variant's frame.
///
/// The random source is injected so batch generation is deterministic
/// under a seeded generator. The engine is synchronous and owns no shared
/// state across annotations; callers may fan annotations out across
/// workers, each with its own `Augmentor`.
#[derive(Debug)]
pub struct Augmentor<R: Rng> {
    config: AugmentConfig,
    rng: R,
    cancel: Option<CancelToken>,
}

impl<R: Rng> Augmentor<R> {
    /// Build an augmentor from a validated configuration and a random
    /// source. Fails with `InvalidConfiguration` before any row is touched.
    pub fn new(config: AugmentConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            cancel: None,
        })
    }

    /// Attach a cancellation token, checked once per annotation.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Augment one annotation, tagging any failure with its row identity
    /// so the caller can log and skip it without aborting the batch.
    pub fn augment_annotation(
        &mut self,
        image: &ImageBuffer,
        annotation: &Annotation,
    ) -> Result<Vec<AugmentedSample>> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(AugmentError::Cancelled);
        }

        self.augment_batch(image, &annotation.bounds, &annotation.class)
            .map_err(|err| err.for_row(annotation.row))
    }

    /// Produce `count` independent samples for one ground-truth box.
    ///
    /// The area of interest is cut from the source once; every sample is
    /// drawn against that cached sub-image.
    pub fn augment_batch(
        &mut self,
        image: &ImageBuffer,
        bounds: &Rect,
        class: &str,
    ) -> Result<Vec<AugmentedSample>> {
        let aoi = area_of_interest(bounds, &self.config)?;
        let sub_image = cut_with_zero_padding(image, &aoi);

        let mut batch = Vec::with_capacity(self.config.count as usize);
        for _ in 0..self.config.count {
            batch.push(self.draw_sample(&sub_image, bounds, class)?);
        }

        Ok(batch)
    }

    /// One randomized rotate-buffer-offset-crop iteration.
    fn draw_sample(
        &mut self,
        sub_image: &ImageBuffer,
        bounds: &Rect,
        class: &str,
    ) -> Result<AugmentedSample> {
        let sub_center = sub_image.center();

        // The sub-image was built around the ground-truth center, so the
        // box recentres onto the sub-image's own center.
        let mut working = *bounds;
        working.center_on_point(sub_center);

        let max_angle = self.config.max_angle as i32;
        let angle = self.rng.random_range(-max_angle..=max_angle);

        let rotated_image = rotate_image(sub_image, f64::from(angle));
        let rotated_center = rotated_image.center();
        // How much the canvas grew, as a shift of the integer center
        let growth = Point::new(
            rotated_center.x - sub_center.x,
            rotated_center.y - sub_center.y,
        );

        // Image rotation and coordinate rotation run in opposite
        // directions, hence the negated angle for the corners.
        let corners = working
            .corners()
            .map(|c| c.rotated_about(sub_center, f64::from(-angle)).translated(growth));
        let rotated_bounds = Rect::bounding(&corners)?;

        let buffered = self.buffer_area(&rotated_bounds)?;
        let (window, offset_x, offset_y) = self.offset_area(&buffered)?;

        let sample_image = cut_with_zero_padding(&rotated_image, &window);

        // Re-express the box in the output image's frame: recenter on the
        // output canvas, then undo the applied offset.
        let mut corrected = rotated_bounds;
        corrected.center_on_point(sample_image.center());
        corrected.translate(-offset_x, -offset_y);

        Ok(AugmentedSample {
            image: sample_image,
            bounds: corrected,
            class: class.to_owned(),
            angle,
            offset_x,
            offset_y,
        })
    }

    /// Expand a box outward by the configured border, per axis.
    fn buffer_area(&self, bounds: &Rect) -> Result<Rect> {
        let border_abs = f64::from(self.config.border_abs);
        let x_border = (f64::from(bounds.width()) * self.config.border_rel).max(border_abs);
        let y_border = (f64::from(bounds.height()) * self.config.border_rel).max(border_abs);

        Ok(Rect::new(
            f64::from(bounds.x1()) - x_border,
            f64::from(bounds.y1()) - y_border,
            f64::from(bounds.x2()) + x_border,
            f64::from(bounds.y2()) + y_border,
        )?)
    }

    /// Shift a box by a random per-axis offset drawn from the buffered
    /// width and the configured relative maximum.
    fn offset_area(&mut self, bounds: &Rect) -> Result<(Rect, i32, i32)> {
        let abs_max_offset = round_i(f64::from(bounds.width()) * self.config.max_rel_offset);
        let offset_x = self.rng.random_range(-abs_max_offset..=abs_max_offset);
        let offset_y = self.rng.random_range(-abs_max_offset..=abs_max_offset);

        let mut window = *bounds;
        window.translate(offset_x, offset_y);

        Ok((window, offset_x, offset_y))
    }
}
