//! In-memory tabular dataset flowing through the pipeline.

use serde::{Deserialize, Serialize};

/// A single cell value as decoded from a spreadsheet.
///
/// Spreadsheet exports are heterogeneous: an identifier column may arrive as
/// text, floats, or scientific-notation strings. `as_text` is the canonical
/// textual form used for CSV serialization and for deduplication keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    DateTime(String),
}

impl CellValue {
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Integer(v) => format!("{v}"),
            Self::Number(v) => format!("{v}"),
            Self::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
            Self::DateTime(s) => s.clone(),
        }
    }
}

/// An ordered sequence of rows sharing one fixed column set.
///
/// Row order is significant and preserved through normalization and
/// deduplication. Every row has exactly `columns.len()` cells: `push_row`
/// pads or truncates on insert, and deserialization routes through it too,
/// so column lookups may index rows directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

// Derived Deserialize would fill the private fields directly and bypass the
// fixed-width invariant; rebuild through push_row instead.
impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawDataset {
            #[serde(default)]
            columns: Vec<String>,
            #[serde(default)]
            rows: Vec<Vec<CellValue>>,
        }

        let raw = RawDataset::deserialize(deserializer)?;
        let mut dataset = Dataset::new(raw.columns);
        for row in raw.rows {
            dataset.push_row(row);
        }
        Ok(dataset)
    }
}

impl Dataset {
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the dataset carries no columns at all (a malformed upload).
    /// A dataset with columns but zero rows is *not* empty in this sense.
    #[must_use]
    pub fn has_no_columns(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row, padding with `Empty` or truncating to the column width.
    pub fn push_row(&mut self, mut cells: Vec<CellValue>) {
        cells.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(cells);
    }

    /// Rewrite every cell of one column. Caller guarantees `values` has one
    /// entry per row; extra entries are ignored.
    pub(crate) fn replace_column(&mut self, index: usize, values: Vec<CellValue>) {
        for (row, value) in self.rows.iter_mut().zip(values) {
            if let Some(cell) = row.get_mut(index) {
                *cell = value;
            }
        }
    }

    /// A new dataset with the same columns and no rows.
    #[must_use]
    pub(crate) fn empty_like(&self) -> Self {
        Self::new(self.columns.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn push_row_pads_and_truncates_to_column_width() {
        let mut ds = Dataset::new(vec!["a".into(), "b".into()]);
        ds.push_row(vec![text("1")]);
        ds.push_row(vec![text("1"), text("2"), text("3")]);

        assert_eq!(ds.rows()[0], vec![text("1"), CellValue::Empty]);
        assert_eq!(ds.rows()[1], vec![text("1"), text("2")]);
    }

    #[test]
    fn column_index_is_exact_match() {
        let ds = Dataset::new(vec!["CPF/CNPJ".into(), "Nome".into()]);
        assert_eq!(ds.column_index("CPF/CNPJ"), Some(0));
        assert_eq!(ds.column_index("cpf/cnpj"), None);
    }

    #[test]
    fn as_text_formats_integers_without_decimal_point() {
        assert_eq!(CellValue::Integer(123_456_789_00).as_text(), "12345678900");
        assert_eq!(CellValue::Empty.as_text(), "");
        assert_eq!(CellValue::Boolean(true).as_text(), "true");
    }

    #[test]
    fn deserialized_rows_are_padded_to_column_width() {
        let ds: Dataset = serde_json::from_str(
            r#"{"columns":["CPF/CNPJ","Nome"],"rows":[[{"integer":1}],[]]}"#,
        )
        .unwrap();

        assert_eq!(ds.rows()[0], vec![CellValue::Integer(1), CellValue::Empty]);
        assert_eq!(ds.rows()[1], vec![CellValue::Empty, CellValue::Empty]);
    }

    #[test]
    fn column_access_on_a_deserialized_short_row_does_not_panic() {
        let mut ds: Dataset = serde_json::from_str(
            r#"{"columns":["CPF/CNPJ","Nome"],"rows":[[{"text":"123"}]]}"#,
        )
        .unwrap();

        // Both stages index rows by column position; the padded Empty cell in
        // "Nome" must be reachable, and normalizing the padded identifier-less
        // column abandons cleanly instead of going out of bounds.
        let outcome = crate::normalize::normalize_identifier_column(&mut ds, "Nome");
        assert_eq!(
            outcome,
            crate::normalize::ColumnNormalization::Unparseable {
                row: 0,
                value: String::new()
            }
        );
        let deduped = crate::dedup::deduplicate(&ds, "Nome").unwrap();
        assert_eq!(deduped.row_count(), 1);
    }

    #[test]
    fn dataset_serde_round_trip_preserves_rows() {
        let mut ds = Dataset::new(vec!["CPF/CNPJ".into()]);
        ds.push_row(vec![CellValue::Integer(123)]);

        let json = serde_json::to_string(&ds).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ds);
    }
}
