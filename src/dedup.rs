//! Row deduplication keyed on one column.

use std::collections::HashSet;

use log::debug;

use crate::error::{Result, SplitError};
use crate::types::Dataset;

/// Drop every row whose value in `column` duplicates an earlier row's value.
///
/// First occurrence wins and relative order is preserved; later duplicates are
/// dropped entirely, never merged. Keys are the canonical textual form of the
/// cell, so a normalized identifier column compares as integers while an
/// abandoned column falls back to its original text.
///
/// A missing column fails fast with [`SplitError::MissingColumn`] rather than
/// passing the dataset through: deduplicating on nothing would silently return
/// the full dataset and defeat the point of the pipeline.
pub fn deduplicate(dataset: &Dataset, column: &str) -> Result<Dataset> {
    let index = dataset
        .column_index(column)
        .ok_or_else(|| SplitError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut seen: HashSet<String> = HashSet::with_capacity(dataset.row_count());
    let mut out = dataset.empty_like();
    for row in dataset.rows() {
        if seen.insert(row[index].as_text()) {
            out.push_row(row.clone());
        }
    }

    debug!(
        "deduplicated {} rows to {} on column {column:?}",
        dataset.row_count(),
        out.row_count()
    );
    Ok(out)
}
