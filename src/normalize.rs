//! Identifier-column normalization.
//!
//! Spreadsheet exports mangle tax identifiers: comma decimal separators
//! ("123456,0") and scientific notation ("1.23E+10") both show up in the wild.
//! Every value in the identifier column is coerced to a canonical integer so
//! that deduplication compares like with like.

use crate::types::{CellValue, Dataset};

/// Outcome of attempting to normalize one column.
///
/// Normalization is all-or-nothing per column: one unparseable value abandons
/// the whole conversion and the dataset is left untouched. None of these
/// outcomes is fatal; the caller's policy decides what to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnNormalization {
    /// Every value was rewritten to `CellValue::Integer`.
    Applied { rows: usize },
    /// The column is not present; the dataset is unchanged.
    ColumnMissing,
    /// A value could not be coerced; the original column is retained.
    Unparseable { row: usize, value: String },
}

/// Coerce one textual value to its canonical integer.
///
/// Comma-as-decimal-separator is mapped to a period before parsing; parsing as
/// `f64` resolves scientific notation; the fractional part is truncated, not
/// rounded. Non-finite or out-of-range results are failures.
fn canonical_integer(raw: &str) -> Option<i64> {
    let text = raw.trim().replacen(',', ".", 1);
    let value: f64 = text.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Rewrite every value of `column` to a canonical integer representation.
///
/// If the column is absent, or any single value fails to parse, the dataset is
/// returned unchanged and the outcome says why. Empty cells count as parse
/// failures: a blank identifier cannot be canonicalized, so the column keeps
/// its original values.
pub fn normalize_identifier_column(dataset: &mut Dataset, column: &str) -> ColumnNormalization {
    let Some(index) = dataset.column_index(column) else {
        return ColumnNormalization::ColumnMissing;
    };

    let mut normalized = Vec::with_capacity(dataset.row_count());
    for (row, cells) in dataset.rows().iter().enumerate() {
        let cell = &cells[index];
        match canonical_integer(&cell.as_text()) {
            Some(value) => normalized.push(CellValue::Integer(value)),
            None => {
                let value = cell.as_text();
                tracing::warn!(
                    target: "sheetsplit::normalize",
                    column,
                    row,
                    value = %value,
                    "identifier column could not be converted to integer; keeping original values"
                );
                return ColumnNormalization::Unparseable { row, value };
            }
        }
    }

    let rows = normalized.len();
    dataset.replace_column(index, normalized);
    ColumnNormalization::Applied { rows }
}
