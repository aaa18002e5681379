// src/lib.rs

pub mod config;
pub mod core;
pub mod input;
pub mod reference_io;
pub mod report;
pub use crate::config::AnalyzerConfig;
pub use crate::core::alphabet::{CaseMode, ReferenceTable};
pub use crate::core::engine::{apply_rules, CryptoAnalyzer};
pub use crate::core::types::SubstitutionRule;
