//! Public types exposed by the `sheetsplit-core` crate.

pub mod dataset;
pub mod options;

pub use dataset::{CellValue, Dataset};
pub use options::{SplitOptions, SplitOptionsBuilder, SplitOutcome, SplitStats};
