//! Engine-level error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::GeometryError;

/// Error types for the augmentation engine.
///
/// Geometric failures are deterministic given the inputs, so no variant is
/// retryable. Errors raised while processing one annotation do not affect
/// any other annotation; callers are expected to log and skip.
#[derive(Debug, Error)]
pub enum AugmentError {
    /// A rectangle or bounding box could not be constructed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The augmentation parameters are unusable. Raised once at
    /// construction, never per row.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The source image file does not exist.
    #[error("source image not found: {path}")]
    SourceImageMissing { path: PathBuf },

    /// The source image file exists but could not be decoded.
    #[error("source image unreadable: {path}")]
    SourceImageUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A failure tagged with the annotation row it occurred on, so callers
    /// can skip the row without aborting the batch.
    #[error("annotation row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<AugmentError>,
    },

    /// The run was cancelled via a `CancelToken`.
    #[error("augmentation cancelled")]
    Cancelled,
}

impl AugmentError {
    /// Tag this error with the annotation row it belongs to. Cancellation
    /// and already-tagged errors pass through unchanged.
    pub fn for_row(self, row: usize) -> Self {
        match self {
            err @ (AugmentError::Row { .. } | AugmentError::Cancelled) => err,
            err => AugmentError::Row {
                row,
                source: Box::new(err),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AugmentError>;
