//! Builder-style options and the pipeline's result types.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARCHIVE_EXTENSION, DEFAULT_BASE_NAME, DEFAULT_IDENTIFIER_COLUMN, DEFAULT_LINES_PER_FILE,
};

fn default_lines_per_file() -> usize {
    DEFAULT_LINES_PER_FILE
}

fn default_identifier_column() -> String {
    DEFAULT_IDENTIFIER_COLUMN.to_string()
}

fn default_base_name() -> String {
    DEFAULT_BASE_NAME.to_string()
}

/// Tunable options for one pipeline run. Builders make it easy to set only
/// what you need; defaults match the reference behavior (500 rows per part,
/// keyed on the CPF/CNPJ column).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Maximum data rows per archive entry. Must be at least 1.
    #[serde(default = "default_lines_per_file")]
    pub lines_per_file: usize,
    /// Column normalized and used as the deduplication key.
    #[serde(default = "default_identifier_column")]
    pub identifier_column: String,
    /// Stem for entry names (`{base_name}_parte_{i}.csv`) and the archive
    /// filename (`{base_name}.zip`). Sanitized upstream.
    #[serde(default = "default_base_name")]
    pub base_name: String,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            lines_per_file: DEFAULT_LINES_PER_FILE,
            identifier_column: DEFAULT_IDENTIFIER_COLUMN.to_string(),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}

impl SplitOptions {
    /// Start a fluent builder for `SplitOptions`.
    #[must_use]
    pub fn builder() -> SplitOptionsBuilder {
        SplitOptionsBuilder::default()
    }

    /// Filename suggested for the finished archive.
    #[must_use]
    pub fn suggested_filename(&self) -> String {
        format!("{}.{ARCHIVE_EXTENSION}", self.base_name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SplitOptionsBuilder {
    inner: SplitOptions,
}

impl SplitOptionsBuilder {
    #[must_use]
    pub fn lines_per_file(mut self, lines_per_file: usize) -> Self {
        self.inner.lines_per_file = lines_per_file;
        self
    }

    #[must_use]
    pub fn identifier_column<S: Into<String>>(mut self, column: S) -> Self {
        self.inner.identifier_column = column.into();
        self
    }

    #[must_use]
    pub fn base_name<S: Into<String>>(mut self, base_name: S) -> Self {
        self.inner.base_name = base_name.into();
        self
    }

    #[must_use]
    pub fn build(self) -> SplitOptions {
        self.inner
    }
}

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitStats {
    /// Rows received from the intake collaborator.
    pub input_rows: usize,
    /// Rows surviving deduplication.
    pub unique_rows: usize,
    /// Later duplicates dropped (first occurrence wins).
    pub duplicates_dropped: usize,
    /// Entries written into the archive.
    pub entry_count: usize,
    /// Whether the identifier column was rewritten to canonical integers.
    /// False when the column was missing or normalization was abandoned.
    pub identifier_normalized: bool,
}

/// The finished archive plus everything the caller needs to serve it.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// Complete ZIP archive content, ready for transmission.
    pub archive: Vec<u8>,
    /// `{base_name}.zip`.
    pub suggested_filename: String,
    pub stats: SplitStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_only_what_is_set() {
        let options = SplitOptions::builder()
            .base_name("clientes")
            .lines_per_file(300)
            .build();

        assert_eq!(options.lines_per_file, 300);
        assert_eq!(options.base_name, "clientes");
        assert_eq!(options.identifier_column, DEFAULT_IDENTIFIER_COLUMN);
    }

    #[test]
    fn suggested_filename_appends_zip_extension() {
        let options = SplitOptions::builder().base_name("clientes").build();
        assert_eq!(options.suggested_filename(), "clientes.zip");
    }
}
