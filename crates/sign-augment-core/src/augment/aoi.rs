//! Area-of-interest sizing.

use crate::error::Result;
use crate::geometry::{round_i, Rect};
use crate::AugmentConfig;

/// Compute the safe working region around a ground-truth box.
///
/// The region is a square centered on the box's center, sized so that any
/// rotation of the box (bounded by its diagonal), plus the maximum border
/// and offset the configuration allows, plus a 4-pixel safety margin,
/// stays inside it. Cutting this region once per annotation avoids
/// re-reading the full source image on every sample.
pub fn area_of_interest(bounds: &Rect, config: &AugmentConfig) -> Result<Rect> {
    let diagonal = bounds.diagonal();

    let max_border = (diagonal * config.border_rel).max(f64::from(config.border_abs));
    let abs_max_offset = round_i(diagonal * config.max_rel_offset);

    let max_rot_extent = round_i(diagonal + 2.0 * max_border + 2.0 * f64::from(abs_max_offset) + 4.0);
    let half_extent = round_i(f64::from(max_rot_extent) / 2.0);

    let center = bounds.center().translated(bounds.top_left());

    Ok(Rect::new(
        f64::from(center.x - half_extent),
        f64::from(center.y - half_extent),
        f64::from(center.x + half_extent),
        f64::from(center.y + half_extent),
    )?)
}
