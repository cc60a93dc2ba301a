//! Set algebra over two key sets

use crate::comparison::keys::KeySet;

/// Outcome of comparing the key sets of two documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyComparison {
    pub only_in_a: KeySet,
    pub only_in_b: KeySet,
    pub common: KeySet,
}

impl KeyComparison {
    /// True when neither side has keys the other lacks
    pub fn is_identical(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty()
    }

    pub fn total_a(&self) -> usize {
        self.only_in_a.len() + self.common.len()
    }

    pub fn total_b(&self) -> usize {
        self.only_in_b.len() + self.common.len()
    }
}

/// Compute `(A - B, B - A, A ∩ B)`
pub fn compare(keys_a: &KeySet, keys_b: &KeySet) -> KeyComparison {
    KeyComparison {
        only_in_a: keys_a.difference(keys_b).cloned().collect(),
        only_in_b: keys_b.difference(keys_a).cloned().collect(),
        common: keys_a.intersection(keys_b).cloned().collect(),
    }
}

/// Sorted copy of a key set for display
pub fn sorted_keys(keys: &KeySet) -> Vec<&str> {
    let mut sorted: Vec<&str> = keys.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}
