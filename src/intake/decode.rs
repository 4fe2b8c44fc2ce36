//! XLSX bytes → [`Dataset`] via calamine.

use std::io::Cursor;

use calamine::{DataType, Reader as CalamineReader, Xlsx};

use crate::error::{Result, SplitError};
use crate::types::{CellValue, Dataset};

fn cell_value(cell: &DataType) -> CellValue {
    match cell {
        DataType::String(s) => CellValue::Text(s.clone()),
        DataType::Float(v) => CellValue::Number(*v),
        DataType::Int(v) => CellValue::Integer(*v),
        DataType::Bool(b) => CellValue::Boolean(*b),
        DataType::DateTime(v) => CellValue::Number(*v),
        DataType::DateTimeIso(s) => CellValue::DateTime(s.clone()),
        DataType::Duration(v) => CellValue::Number(*v),
        DataType::DurationIso(s) => CellValue::Text(s.clone()),
        DataType::Error(e) => CellValue::Text(format!("#{e:?}")),
        DataType::Empty => CellValue::Empty,
    }
}

/// Decode the first worksheet of an XLSX workbook into a dataset.
///
/// The first row becomes the column names (blank headers are named
/// `Unnamed: {i}` by position); every following row becomes a data row. A
/// workbook with no sheets, or a sheet without a header row, is an
/// [`SplitError::UpstreamDecode`] — a header with no data rows is a valid
/// empty dataset.
pub fn decode_workbook(bytes: &[u8]) -> Result<Dataset> {
    let cursor = Cursor::new(bytes);
    let mut workbook = Xlsx::new(cursor).map_err(|err| SplitError::UpstreamDecode {
        reason: format!("failed to read xlsx workbook: {err}"),
    })?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(SplitError::UpstreamDecode {
            reason: "workbook has no sheets".to_string(),
        });
    };
    let range = match workbook.worksheet_range(&sheet_name) {
        Some(Ok(range)) => range,
        Some(Err(err)) => {
            return Err(SplitError::UpstreamDecode {
                reason: format!("failed to read sheet {sheet_name:?}: {err}"),
            });
        }
        None => {
            return Err(SplitError::UpstreamDecode {
                reason: format!("sheet {sheet_name:?} is not readable"),
            });
        }
    };

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(SplitError::UpstreamDecode {
            reason: "worksheet has no header row".to_string(),
        });
    };

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = cell_value(cell).as_text();
            if name.is_empty() {
                format!("Unnamed: {i}")
            } else {
                name
            }
        })
        .collect();

    let mut dataset = Dataset::new(columns);
    for row in rows {
        dataset.push_row(row.iter().map(cell_value).collect());
    }

    tracing::debug!(
        target: "sheetsplit::intake",
        columns = dataset.columns().len(),
        rows = dataset.row_count(),
        "decoded workbook"
    );
    Ok(dataset)
}
