//! Shared defaults for the split pipeline.

/// Rows per archive entry when the caller does not specify one.
pub const DEFAULT_LINES_PER_FILE: usize = 500;

/// The tax-identifier column used as the deduplication key.
pub const DEFAULT_IDENTIFIER_COLUMN: &str = "CPF/CNPJ";

/// Base name used when the caller supplies none.
pub const DEFAULT_BASE_NAME: &str = "planilha";

/// Extension of each archive entry.
pub const SEGMENT_EXTENSION: &str = "csv";

/// Extension of the archive itself.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Upload extensions accepted by the default intake configuration.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["xlsx"];
