// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single letter-to-letter substitution.
/// Applied to the whole working buffer: every `from` becomes `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub from: char,
    pub to: char,
}

impl SubstitutionRule {
    pub fn new(from: char, to: char) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Letter -> number of occurrences. Letters that never occur are absent.
pub type FrequencyMap = BTreeMap<char, usize>;

/// Grouping key (word length or unknown count) -> words in first-occurrence order.
pub type WordGroups = BTreeMap<usize, Vec<String>>;
