//! Error type shared across the split pipeline.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors surfaced by the pipeline and its intake collaborator.
///
/// Fatal conditions abort the run before any archive bytes escape; the
/// normalizer's per-column failure is deliberately *not* here — it is a
/// tagged outcome handled by the caller's policy, not an error.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The deduplication key column is absent from the dataset.
    #[error("column {column:?} not found in dataset")]
    MissingColumn { column: String },

    /// A caller-supplied parameter is out of range, or the dataset has no columns.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// The uploaded bytes could not be decoded into a tabular dataset.
    #[error("failed to decode workbook: {reason}")]
    UpstreamDecode { reason: String },

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("csv serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// True for conditions the caller caused (bad parameter, missing column),
    /// as opposed to internal serialization failures. Service layers map these
    /// to a client-facing rejection instead of a server fault.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. } | Self::InvalidParameter { .. } | Self::UpstreamDecode { .. }
        )
    }
}
