//! Comparison engine: load, extract, compare

use crate::comparison::config::{CompareConfig, ReportFormat};
use crate::comparison::keys::KeyExtractor;
use crate::comparison::sets::{compare, KeyComparison};
use crate::comparison::stats::KeyStatistics;
use crate::error::{CompareError, CompareResult};
use crate::parser::JsonSource;
use crate::report;
use serde_json::Value;
use std::time::Instant;

/// Result of one comparison run
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pub name_a: String,
    pub name_b: String,
    pub comparison: KeyComparison,
}

impl ComparisonOutcome {
    pub fn statistics(&self) -> KeyStatistics {
        KeyStatistics::from(&self.comparison)
    }

    /// True when both files have exactly the same key paths
    pub fn is_identical(&self) -> bool {
        self.comparison.is_identical()
    }

    pub fn render(&self, format: ReportFormat) -> CompareResult<String> {
        report::render(format, &self.name_a, &self.name_b, &self.comparison)
    }
}

/// Main comparison engine
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    config: CompareConfig,
}

impl ComparisonEngine {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    fn extractor(&self) -> KeyExtractor {
        KeyExtractor::new().with_ignore_case(self.config.ignore_case)
    }

    /// Load both sources and compare their keys.
    ///
    /// Sources load in order and the first failure aborts the run.
    pub fn compare_sources(&self, a: &JsonSource, b: &JsonSource) -> CompareResult<ComparisonOutcome> {
        if *a == JsonSource::Stdin && *b == JsonSource::Stdin {
            return Err(CompareError::configuration(
                "Only one input can be read from standard input",
            ));
        }

        let value_a = a.load()?;
        let value_b = b.load()?;
        Ok(self.compare_values(a.name(), &value_a, b.name(), &value_b))
    }

    /// Compare two already parsed documents
    pub fn compare_values(
        &self,
        name_a: impl Into<String>,
        a: &Value,
        name_b: impl Into<String>,
        b: &Value,
    ) -> ComparisonOutcome {
        let start_time = Instant::now();
        let extractor = self.extractor();

        let keys_a = extractor.extract(a);
        let keys_b = extractor.extract(b);
        let comparison = compare(&keys_a, &keys_b);

        let outcome = ComparisonOutcome {
            name_a: name_a.into(),
            name_b: name_b.into(),
            comparison,
        };

        let stats = outcome.statistics();
        tracing::debug!(
            file_a = %outcome.name_a,
            file_b = %outcome.name_b,
            keys_a = stats.total_a,
            keys_b = stats.total_b,
            common = stats.common,
            differences = stats.difference_count(),
            coverage_percent = stats.coverage_percent() as f64,
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "keys compared"
        );

        outcome
    }
}
