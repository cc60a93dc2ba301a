//! JSON language pack key comparison
//!
//! Compares the leaf keys of two JSON documents, addressed by dot-joined
//! paths, and reports which keys exist only in one file or in both.

pub mod cli;
pub mod comparison;
pub mod error;
pub mod parser;
pub mod report;

// Re-export commonly used types
pub use comparison::{
    compare, extract_keys, CompareConfig, ComparisonEngine, ComparisonOutcome, KeyComparison,
    KeyExtractor, KeySet, KeyStatistics, ReportFormat,
};
pub use error::{CompareError, CompareResult, ParseError};
pub use parser::JsonSource;

/// Compare two JSON files with default configuration
pub fn compare_files(
    a: impl AsRef<std::path::Path>,
    b: impl AsRef<std::path::Path>,
) -> CompareResult<ComparisonOutcome> {
    ComparisonEngine::default().compare_sources(
        &JsonSource::File(a.as_ref().to_path_buf()),
        &JsonSource::File(b.as_ref().to_path_buf()),
    )
}
