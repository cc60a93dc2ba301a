//! Report rendering for key comparisons
//!
//! Every key listing is sorted here, so a report is byte-for-byte
//! reproducible no matter how the underlying sets iterate.

use crate::comparison::sets::{sorted_keys, KeyComparison};
use crate::comparison::stats::KeyStatistics;
use crate::comparison::ReportFormat;
use crate::error::{CompareError, CompareResult};
use serde::Serialize;
use std::path::Path;

/// Width of the rule under each key listing heading
const SECTION_RULE_WIDTH: usize = 40;

/// Render a comparison in the requested format
pub fn render(
    format: ReportFormat,
    name_a: &str,
    name_b: &str,
    comparison: &KeyComparison,
) -> CompareResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(name_a, name_b, comparison)),
        ReportFormat::Json => render_json(name_a, name_b, comparison),
    }
}

/// Render the plain-text report
pub fn render_text(name_a: &str, name_b: &str, comparison: &KeyComparison) -> String {
    let stats = KeyStatistics::from(comparison);
    let mut lines: Vec<String> = Vec::new();

    let title = format!("JSON Key Comparison Report: {} vs {}", name_a, name_b);
    let rule = "=".repeat(title.chars().count());
    lines.push(title);
    lines.push(rule);
    lines.push(String::new());

    lines.push("Statistics:".to_string());
    lines.push(format!("  {} total keys: {}", name_a, stats.total_a));
    lines.push(format!("  {} total keys: {}", name_b, stats.total_b));
    lines.push(format!("  Common keys: {}", stats.common));
    lines.push(format!("  Keys only in {}: {}", name_a, stats.only_in_a));
    lines.push(format!("  Keys only in {}: {}", name_b, stats.only_in_b));
    lines.push(String::new());

    push_section(&mut lines, name_a, &sorted_keys(&comparison.only_in_a));
    push_section(&mut lines, name_b, &sorted_keys(&comparison.only_in_b));

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, name: &str, keys: &[&str]) {
    if keys.is_empty() {
        return;
    }

    lines.push(format!("Keys only in {}:", name));
    lines.push("-".repeat(SECTION_RULE_WIDTH));
    lines.extend(keys.iter().map(|key| format!("  {}", key)));
    lines.push(String::new());
}

/// Machine-readable form of a report
#[derive(Debug, Serialize)]
pub struct KeyReport<'a> {
    pub file_a: &'a str,
    pub file_b: &'a str,
    pub statistics: KeyStatistics,
    pub only_in_a: Vec<&'a str>,
    pub only_in_b: Vec<&'a str>,
    pub common: Vec<&'a str>,
}

impl<'a> KeyReport<'a> {
    pub fn new(file_a: &'a str, file_b: &'a str, comparison: &'a KeyComparison) -> Self {
        Self {
            file_a,
            file_b,
            statistics: KeyStatistics::from(comparison),
            only_in_a: sorted_keys(&comparison.only_in_a),
            only_in_b: sorted_keys(&comparison.only_in_b),
            common: sorted_keys(&comparison.common),
        }
    }
}

/// Render the report as pretty-printed JSON
pub fn render_json(name_a: &str, name_b: &str, comparison: &KeyComparison) -> CompareResult<String> {
    let report = KeyReport::new(name_a, name_b, comparison);
    serde_json::to_string_pretty(&report)
        .map_err(|e| CompareError::Other(anyhow::anyhow!("Failed to serialize report: {}", e)))
}

/// Save a rendered report, creating missing parent directories
pub fn write_report(path: &Path, content: &str) -> CompareResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CompareError::write(path, e))?;
    }
    std::fs::write(path, content).map_err(|e| CompareError::write(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "report written");
    Ok(())
}
