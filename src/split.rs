//! Partitioning the deduplicated dataset and packaging it as a ZIP archive.
//!
//! Segments are contiguous, ordered row slices bounded by a maximum row count;
//! together they fully partition the dataset. Each segment becomes one
//! independently Deflate-compressed CSV entry, written in segment order so the
//! archive bytes are deterministic.

use std::io::{Cursor, Write};
use std::num::NonZeroUsize;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::constants::SEGMENT_EXTENSION;
use crate::error::{Result, SplitError};
use crate::types::{CellValue, Dataset};

/// One bounded slice of the dataset, destined for one archive entry.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    /// 1-indexed position, used for entry naming.
    pub index: usize,
    pub rows: &'a [Vec<CellValue>],
}

impl Segment<'_> {
    /// Archive entry name for this segment: `{base_name}_parte_{index}.csv`.
    #[must_use]
    pub fn entry_name(&self, base_name: &str) -> String {
        format!("{base_name}_parte_{}.{SEGMENT_EXTENSION}", self.index)
    }
}

/// The finished archive content plus the entry count for verification.
#[derive(Debug, Clone)]
pub struct Archive {
    pub bytes: Vec<u8>,
    pub entry_count: usize,
}

/// Partition the dataset into ordered segments of at most `lines_per_file` rows.
///
/// Every segment except possibly the last is full; a dataset with zero rows
/// yields no segments.
pub fn segments(
    dataset: &Dataset,
    lines_per_file: NonZeroUsize,
) -> impl Iterator<Item = Segment<'_>> {
    dataset
        .rows()
        .chunks(lines_per_file.get())
        .enumerate()
        .map(|(i, rows)| Segment { index: i + 1, rows })
}

/// Serialize one segment as CSV: a header row of column names, then one line
/// per data row. Quoting of separators and newlines comes from the csv crate.
fn serialize_segment(columns: &[String], rows: &[Vec<CellValue>]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(row.iter().map(CellValue::as_text))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    Ok(bytes)
}

/// Slice the dataset into segments and write each as a named, independently
/// compressed entry of an in-memory ZIP archive.
///
/// `lines_per_file == 0` is rejected with [`SplitError::InvalidParameter`]
/// before any bytes are produced. A dataset with zero rows yields a valid
/// archive with zero entries.
pub fn package(dataset: &Dataset, lines_per_file: usize, base_name: &str) -> Result<Archive> {
    let lines_per_file =
        NonZeroUsize::new(lines_per_file).ok_or_else(|| SplitError::InvalidParameter {
            name: "lines_per_file",
            reason: "must be a positive integer".to_string(),
        })?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut entry_count = 0;
    for segment in segments(dataset, lines_per_file) {
        let body = serialize_segment(dataset.columns(), segment.rows)?;
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(segment.entry_name(base_name), options)?;
        writer.write_all(&body)?;
        entry_count += 1;
    }

    let cursor = writer.finish()?;
    tracing::debug!(
        target: "sheetsplit::split",
        entry_count,
        rows = dataset.row_count(),
        lines_per_file = lines_per_file.get(),
        "packaged archive"
    );
    Ok(Archive {
        bytes: cursor.into_inner(),
        entry_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn dataset(rows: usize) -> Dataset {
        let mut ds = Dataset::new(vec!["CPF/CNPJ".into(), "Nome".into()]);
        for i in 0..rows {
            ds.push_row(vec![
                CellValue::Integer(i as i64),
                CellValue::Text(format!("pessoa {i}")),
            ]);
        }
        ds
    }

    fn entry_text(archive: &Archive, name: &str) -> String {
        let mut zip = ZipArchive::new(Cursor::new(archive.bytes.clone())).expect("readable zip");
        let mut entry = zip.by_name(name).expect("entry present");
        let mut text = String::new();
        entry.read_to_string(&mut text).expect("utf-8 entry");
        text
    }

    #[test]
    fn segments_partition_without_overlap_or_gaps() {
        let ds = dataset(7);
        let parts: Vec<_> = segments(&ds, NonZeroUsize::new(3).unwrap()).collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].rows.len(), 3);
        assert_eq!(parts[1].rows.len(), 3);
        assert_eq!(parts[2].rows.len(), 1);
        assert_eq!(parts[0].index, 1);
        assert_eq!(parts[2].index, 3);

        let total: usize = parts.iter().map(|s| s.rows.len()).sum();
        assert_eq!(total, ds.row_count());
    }

    #[test]
    fn entry_names_are_one_indexed_parte_csv() {
        let ds = dataset(2);
        let segment = segments(&ds, NonZeroUsize::new(1).unwrap())
            .next()
            .unwrap();
        assert_eq!(segment.entry_name("clientes"), "clientes_parte_1.csv");
    }

    #[test]
    fn each_entry_carries_header_plus_rows() {
        let ds = dataset(5);
        let archive = package(&ds, 2, "clientes").unwrap();
        assert_eq!(archive.entry_count, 3);

        let first = entry_text(&archive, "clientes_parte_1.csv");
        let mut lines = first.lines();
        assert_eq!(lines.next(), Some("CPF/CNPJ,Nome"));
        assert_eq!(lines.next(), Some("0,pessoa 0"));
        assert_eq!(lines.next(), Some("1,pessoa 1"));
        assert_eq!(lines.next(), None);

        let last = entry_text(&archive, "clientes_parte_3.csv");
        assert_eq!(last.lines().count(), 2); // header + one row
    }

    #[test]
    fn values_containing_the_separator_are_quoted() {
        let mut ds = Dataset::new(vec!["CPF/CNPJ".into(), "Nome".into()]);
        ds.push_row(vec![
            CellValue::Integer(1),
            CellValue::Text("Silva, João".into()),
        ]);

        let archive = package(&ds, 500, "clientes").unwrap();
        let text = entry_text(&archive, "clientes_parte_1.csv");
        assert!(text.contains("\"Silva, João\""));
    }

    #[test]
    fn zero_rows_yield_a_valid_empty_archive() {
        let ds = dataset(0);
        let archive = package(&ds, 500, "vazio").unwrap();
        assert_eq!(archive.entry_count, 0);

        let zip = ZipArchive::new(Cursor::new(archive.bytes)).expect("empty archive is valid");
        assert_eq!(zip.len(), 0);
    }

    #[test]
    fn zero_lines_per_file_is_rejected_before_any_work() {
        let ds = dataset(3);
        let err = package(&ds, 0, "clientes").unwrap_err();
        assert!(matches!(
            err,
            SplitError::InvalidParameter {
                name: "lines_per_file",
                ..
            }
        ));
    }
}
