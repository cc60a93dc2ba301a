//! Leaf key path extraction

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Unordered set of dotted key paths
pub type KeySet = HashSet<String>;

/// Separator placed between nested object keys
pub const KEY_SEPARATOR: char = '.';

/// Collect the dotted path of every leaf value under `value`.
///
/// Arrays and scalars are leaves. A nested empty object contributes nothing,
/// and a non-object root yields an empty set.
pub fn extract_keys(value: &Value) -> KeySet {
    KeyExtractor::new().extract(value)
}

/// Walks JSON objects and produces key sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyExtractor {
    ignore_case: bool,
}

impl KeyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase every key segment, merging paths that differ only by case
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn extract(&self, value: &Value) -> KeySet {
        let mut keys = KeySet::new();
        if let Value::Object(map) = value {
            self.collect(map, "", &mut keys);
        }
        keys
    }

    fn collect(&self, map: &Map<String, Value>, prefix: &str, keys: &mut KeySet) {
        for (key, value) in map {
            let full_key = self.join(prefix, key);
            match value {
                Value::Object(nested) => self.collect(nested, &full_key, keys),
                _ => {
                    keys.insert(full_key);
                }
            }
        }
    }

    fn join(&self, prefix: &str, key: &str) -> String {
        let key = if self.ignore_case {
            key.to_lowercase()
        } else {
            key.to_string()
        };

        if prefix.is_empty() {
            key
        } else {
            format!("{}{}{}", prefix, KEY_SEPARATOR, key)
        }
    }
}
