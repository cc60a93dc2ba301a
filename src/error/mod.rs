//! Error types and handling infrastructure for key comparison

use std::fmt;
use std::path::PathBuf;

/// Main error type for comparison operations
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("File '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{name}' must contain a JSON object at the top level, found {found}")]
    InvalidRoot { name: String, found: &'static str },

    #[error("Failed to write report to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CompareError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Message of the underlying I/O cause, or the full message when there is none
    pub fn source_message(&self) -> String {
        match self {
            Self::Io { source, .. } | Self::Write { source, .. } => source.to_string(),
            _ => self.to_string(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => {
                let mut message = match err.location {
                    Some((line, col)) => format!(
                        "'{}' is not valid JSON (line {}, column {}): {}",
                        err.source_name, line, col, err.message
                    ),
                    None => format!("'{}' is not valid JSON: {}", err.source_name, err.message),
                };
                if let Some(preview) = &err.input_preview {
                    message.push('\n');
                    message.push_str(preview);
                }
                message
            }
            Self::Other(err) => format!("Unexpected error: {}", err),
            _ => self.to_string(),
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Display name of the source that failed to parse
    pub source_name: String,
    pub message: String,
    /// One-based line and column reported by the parser
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(
        source_name: impl Into<String>,
        message: String,
        location: Option<(usize, usize)>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            message,
            location,
            input_preview: None,
        }
    }

    /// Build from a serde_json error, moving its position into `location`
    pub fn from_json(source_name: impl Into<String>, error: &serde_json::Error) -> Self {
        let mut message = error.to_string();
        let location = if error.line() > 0 {
            let suffix = format!(" at line {} column {}", error.line(), error.column());
            if message.ends_with(&suffix) {
                message.truncate(message.len() - suffix.len());
            }
            Some((error.line(), error.column()))
        } else {
            None
        };
        Self::new(source_name, message, location)
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid JSON in '{}': {}", self.source_name, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;
