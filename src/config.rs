// File: src/config.rs
use crate::core::alphabet::{CaseMode, ReferenceTable};
use crate::reference_io::load_table;
use anyhow::Result;
use std::path::Path;

/// Settings fixed for the lifetime of one analyzer session.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub case_mode: CaseMode,
    pub reference: ReferenceTable,
}

impl AnalyzerConfig {
    /// Builds the session config, reading the reference table from `table_path` if given.
    pub fn load(case_mode: CaseMode, table_path: Option<&Path>) -> Result<Self> {
        let reference = match table_path {
            Some(path) => load_table(path)?,
            None => ReferenceTable::default(),
        };
        Ok(Self { case_mode, reference })
    }
}
