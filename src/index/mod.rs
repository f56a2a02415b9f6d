pub mod builder;

pub use builder::*;

use std::collections::HashMap;

/// Deduplicated affiliation strings in first-seen order, addressed by 1-based position.
///
/// Equality is exact string equality: no trimming, no case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffiliationRegistry {
    entries: Vec<String>,
    positions: HashMap<String, usize>,
}

impl AffiliationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an affiliation if unseen; returns its 1-based position either way
    pub fn insert(&mut self, affiliation: &str) -> usize {
        if let Some(&position) = self.positions.get(affiliation) {
            return position;
        }
        self.entries.push(affiliation.to_string());
        let position = self.entries.len();
        self.positions.insert(affiliation.to_string(), position);
        position
    }

    /// 1-based position of an affiliation, if registered
    pub fn position(&self, affiliation: &str) -> Option<usize> {
        self.positions.get(affiliation).copied()
    }

    /// Affiliation at a 1-based position
    pub fn get(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate as (1-based position, affiliation)
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, a)| (i + 1, a.as_str()))
    }
}
