//! Orchestration of the three pipeline stages.
//!
//! Data flows strictly forward: raw dataset → normalized → deduplicated →
//! segments → archive. One invocation owns all of its intermediate state; no
//! shared mutable state crosses requests.

use crate::dedup::deduplicate;
use crate::error::{Result, SplitError};
use crate::normalize::{ColumnNormalization, normalize_identifier_column};
use crate::split::package;
use crate::types::{Dataset, SplitOptions, SplitOutcome, SplitStats};

/// Run the full pipeline: validate, normalize the identifier column,
/// deduplicate, then slice and package into an in-memory ZIP archive.
///
/// Fatal conditions (`InvalidParameter`, `MissingColumn`) abort before any
/// archive bytes escape; the normalizer's per-column failure is non-fatal and
/// only logged — the original values are retained and processing continues.
pub fn split_and_package(mut dataset: Dataset, options: &SplitOptions) -> Result<SplitOutcome> {
    if options.lines_per_file == 0 {
        return Err(SplitError::InvalidParameter {
            name: "lines_per_file",
            reason: "must be a positive integer".to_string(),
        });
    }
    if dataset.has_no_columns() {
        return Err(SplitError::InvalidParameter {
            name: "dataset",
            reason: "dataset has no columns".to_string(),
        });
    }

    let input_rows = dataset.row_count();
    let normalization = normalize_identifier_column(&mut dataset, &options.identifier_column);
    let identifier_normalized = match &normalization {
        ColumnNormalization::Applied { .. } => true,
        // Unparseable already logged a warning inside the normalizer.
        // A missing column is left to the deduplicator, which fails fast.
        ColumnNormalization::ColumnMissing | ColumnNormalization::Unparseable { .. } => false,
    };

    let deduplicated = deduplicate(&dataset, &options.identifier_column)?;
    let unique_rows = deduplicated.row_count();

    let archive = package(&deduplicated, options.lines_per_file, &options.base_name)?;

    let stats = SplitStats {
        input_rows,
        unique_rows,
        duplicates_dropped: input_rows - unique_rows,
        entry_count: archive.entry_count,
        identifier_normalized,
    };
    tracing::info!(
        target: "sheetsplit::pipeline",
        input_rows = stats.input_rows,
        unique_rows = stats.unique_rows,
        duplicates_dropped = stats.duplicates_dropped,
        entry_count = stats.entry_count,
        identifier_normalized = stats.identifier_normalized,
        archive_bytes = archive.bytes.len(),
        "split pipeline finished"
    );

    Ok(SplitOutcome {
        archive: archive.bytes,
        suggested_filename: options.suggested_filename(),
        stats,
    })
}
