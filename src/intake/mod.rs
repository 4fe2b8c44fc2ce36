//! Upstream collaborator for the split pipeline.
//!
//! Everything the surrounding service layer does before the core runs:
//! extension allow-listing, filename sanitization, and decoding the uploaded
//! workbook bytes into a [`Dataset`](crate::Dataset). HTTP routing and response
//! streaming stay outside this crate.

mod decode;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ALLOWED_EXTENSIONS;

pub use decode::decode_workbook;

/// Upload validation settings, passed explicitly instead of living in global
/// application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Lowercased extensions accepted for upload.
    pub allowed_extensions: HashSet<String>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}

impl IntakeConfig {
    /// True if the filename has an extension on the allow-list.
    /// Extension matching is case-insensitive; a name without a dot is rejected.
    #[must_use]
    pub fn allows(&self, filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .is_some_and(|(_, ext)| self.allowed_extensions.contains(&ext.to_ascii_lowercase()))
    }
}

/// Reduce an uploaded filename to a safe form for reuse in entry names.
///
/// Path components are stripped, whitespace becomes `_`, anything outside
/// `[A-Za-z0-9._-]` is dropped, and leading dots are removed so the result can
/// never traverse or hide. An empty result falls back to `"upload"`.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let last_component = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let mut out = String::with_capacity(last_component.len());
    for c in last_component.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            out.push(c);
        } else if c.is_whitespace() {
            out.push('_');
        }
    }

    let trimmed = out.trim_start_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// The filename stem used as the archive base name.
#[must_use]
pub fn base_name(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _)| stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_accepts_xlsx_case_insensitively() {
        let config = IntakeConfig::default();
        assert!(config.allows("clientes.xlsx"));
        assert!(config.allows("CLIENTES.XLSX"));
        assert!(!config.allows("clientes.csv"));
        assert!(!config.allows("clientes"));
    }

    #[test]
    fn sanitize_strips_path_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\boot.ini"), "boot.ini");
        assert_eq!(sanitize_filename(".hidden.xlsx"), "hidden.xlsx");
    }

    #[test]
    fn sanitize_replaces_whitespace_and_drops_the_rest() {
        assert_eq!(
            sanitize_filename("relatório de clientes.xlsx"),
            "relatrio_de_clientes.xlsx"
        );
        assert_eq!(sanitize_filename("????"), "upload");
    }

    #[test]
    fn base_name_strips_only_the_last_extension() {
        assert_eq!(base_name("clientes.2024.xlsx"), "clientes.2024");
        assert_eq!(base_name("clientes"), "clientes");
    }
}
