#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Strategic lint exceptions - these are allowed project-wide for pragmatic reasons:
//
// Documentation lints: Many internal/self-documenting functions don't need extensive docs.
// Public APIs should still have proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Cast safety: casts in this crate are bounded by real-world constraints
// (row counts, cell widths) and reviewed at the call site.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
//
// Performance/ergonomics trade-offs that are acceptable for this codebase:
#![allow(clippy::needless_pass_by_value)] // Builders take owned values intentionally
#![allow(clippy::return_self_not_must_use)]

/// The sheetsplit-core crate version (matches `Cargo.toml`).
pub const SHEETSPLIT_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod dedup;
pub mod error;
pub mod intake;
pub mod normalize;
pub mod pipeline;
pub mod split;
pub mod types;

pub use constants::*;
pub use dedup::deduplicate;
pub use error::{Result, SplitError};
pub use intake::{IntakeConfig, base_name, decode_workbook, sanitize_filename};
pub use normalize::{ColumnNormalization, normalize_identifier_column};
pub use pipeline::split_and_package;
pub use split::{Archive, Segment, package, segments};
pub use types::{CellValue, Dataset, SplitOptions, SplitOptionsBuilder, SplitOutcome, SplitStats};
