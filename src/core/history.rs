// File: src/core/history.rs
use crate::core::types::SubstitutionRule;

/// Stack of full rule-list snapshots, one per applied replacement.
#[derive(Debug, Clone, Default)]
pub struct RuleHistory {
    snapshots: Vec<Vec<SubstitutionRule>>,
}

impl RuleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a copy of the rule list as it was before a mutation.
    pub fn record(&mut self, rules: &[SubstitutionRule]) {
        self.snapshots.push(rules.to_vec());
    }

    /// Most recent snapshot, or `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<Vec<SubstitutionRule>> {
        self.snapshots.pop()
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
