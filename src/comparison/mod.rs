//! JSON key comparison module
//!
//! This module contains key extraction, the set comparison, configuration,
//! and statistics.

pub mod config;
pub mod engine;
pub mod keys;
pub mod sets;
pub mod stats;

pub use config::{CompareConfig, ReportFormat};
pub use engine::{ComparisonEngine, ComparisonOutcome};
pub use keys::{extract_keys, KeyExtractor, KeySet};
pub use sets::{compare, KeyComparison};
pub use stats::KeyStatistics;
