//! Key count statistics for a comparison

use crate::comparison::sets::KeyComparison;
use serde::Serialize;

/// Counts shown in the statistics block of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KeyStatistics {
    /// Total keys in the first file
    pub total_a: usize,
    /// Total keys in the second file
    pub total_b: usize,
    /// Keys present in both files
    pub common: usize,
    pub only_in_a: usize,
    pub only_in_b: usize,
}

impl KeyStatistics {
    pub fn from_comparison(comparison: &KeyComparison) -> Self {
        Self {
            total_a: comparison.total_a(),
            total_b: comparison.total_b(),
            common: comparison.common.len(),
            only_in_a: comparison.only_in_a.len(),
            only_in_b: comparison.only_in_b.len(),
        }
    }

    /// Number of keys that appear in exactly one file
    pub fn difference_count(&self) -> usize {
        self.only_in_a + self.only_in_b
    }

    /// Share of the first file's keys also present in the second, in percent
    pub fn coverage_percent(&self) -> f32 {
        if self.total_a == 0 {
            100.0
        } else {
            self.common as f32 / self.total_a as f32 * 100.0
        }
    }
}

impl From<&KeyComparison> for KeyStatistics {
    fn from(comparison: &KeyComparison) -> Self {
        Self::from_comparison(comparison)
    }
}
