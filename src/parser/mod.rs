//! JSON loading for comparison inputs

pub mod preview;

use crate::error::{CompareError, CompareResult, ParseError};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

const UTF8_BOM: char = '\u{feff}';

/// Source for loading operations
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    /// JSON file on disk
    File(PathBuf),
    /// Standard input stream
    Stdin,
    /// In-memory JSON text with a display name
    String { name: String, content: String },
}

impl JsonSource {
    /// Map a command-line argument to a source; `-` means standard input
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn from_string(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::String {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Name used in reports and error messages
    pub fn name(&self) -> String {
        match self {
            JsonSource::File(path) => path.display().to_string(),
            JsonSource::Stdin => "<stdin>".to_string(),
            JsonSource::String { name, .. } => name.clone(),
        }
    }

    /// Read content as string
    pub fn read_content(&self) -> CompareResult<String> {
        match self {
            JsonSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CompareError::not_found(path)
                } else {
                    CompareError::io(path, e)
                }
            }),
            JsonSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| CompareError::io("<stdin>", e))?;
                Ok(buffer)
            }
            JsonSource::String { content, .. } => Ok(content.clone()),
        }
    }

    /// Load and parse this source into a JSON object tree
    pub fn load(&self) -> CompareResult<Value> {
        let content = self.read_content()?;
        tracing::debug!(source = %self.name(), bytes = content.len(), "read source");
        parse_document(&self.name(), &content)
    }
}

/// Parse JSON text into a tree whose root must be an object
pub fn parse_document(name: &str, content: &str) -> CompareResult<Value> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let value: Value = serde_json::from_str(content).map_err(|e| {
        let mut error = ParseError::from_json(name, &e);
        if let Some((line, col)) = error.location {
            if let Some(preview) = preview::error_preview(content, line, col) {
                error = error.with_preview(preview);
            }
        }
        CompareError::Parse(error)
    })?;

    if !value.is_object() {
        return Err(CompareError::InvalidRoot {
            name: name.to_string(),
            found: value_kind(&value),
        });
    }

    Ok(value)
}

/// Human-readable name of a JSON value's type
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "an object",
        Value::Array(_) => "an array",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    }
}
