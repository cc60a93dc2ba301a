//! Configuration options for key comparison

/// Report output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareConfig {
    /// Compare key paths case-insensitively
    pub ignore_case: bool,
    /// Format used when rendering the report
    pub format: ReportFormat,
}

impl CompareConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}
