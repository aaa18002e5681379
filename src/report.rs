// File: src/report.rs
//! Human-readable and JSON renderings of what the analyzer knows.

use crate::core::alphabet::CaseMode;
use crate::core::engine::CryptoAnalyzer;
use crate::core::types::{FrequencyMap, SubstitutionRule, WordGroups};
use serde::Serialize;
use std::io::{self, Write};

/// Snapshot of every analysis the engine offers, for one-shot output.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ciphertext: String,
    pub case_mode: CaseMode,
    pub reference_letters: usize,
    pub frequencies: FrequencyMap,
    pub suggestions: Vec<SubstitutionRule>,
    pub words_by_length: WordGroups,
}

impl AnalysisReport {
    pub fn from_analyzer(analyzer: &CryptoAnalyzer) -> Self {
        Self {
            ciphertext: analyzer.ciphertext().to_string(),
            case_mode: analyzer.case_mode(),
            reference_letters: analyzer.reference().len(),
            frequencies: analyzer.analyze_frequency(),
            suggestions: analyzer.suggest_replacements(),
            words_by_length: analyzer.group_words_by_length(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Ciphertext: {}", self.ciphertext)?;
        writeln!(out, "{}", describe_settings(self.case_mode, self.reference_letters))?;
        writeln!(out)?;
        write_frequencies(out, &self.frequencies)?;
        writeln!(out)?;
        write_suggestions(out, &self.suggestions)?;
        writeln!(out)?;
        write_groups(out, "Words by length:", "letters", &self.words_by_length)
    }
}

/// One-line summary of how letters are counted and ranked.
pub fn describe_settings(case_mode: CaseMode, reference_letters: usize) -> String {
    let counting = match case_mode {
        CaseMode::Sensitive => "case-sensitive",
        CaseMode::Folded => "case-folded",
    };
    format!("Counting: {}, reference table: {} letters", counting, reference_letters)
}

/// Most frequent letters first.
pub fn write_frequencies<W: Write>(out: &mut W, frequencies: &FrequencyMap) -> io::Result<()> {
    writeln!(out, "Letter frequencies:")?;
    let mut ordered: Vec<(&char, &usize)> = frequencies.iter().collect();
    ordered.sort_by_key(|&(_, count)| std::cmp::Reverse(*count));
    for (letter, count) in ordered {
        writeln!(out, "  {}: {}", letter, count)?;
    }
    Ok(())
}

pub fn write_suggestions<W: Write>(out: &mut W, suggestions: &[SubstitutionRule]) -> io::Result<()> {
    writeln!(out, "Suggested replacements:")?;
    for rule in suggestions {
        writeln!(out, "  {}", rule)?;
    }
    Ok(())
}

pub fn write_groups<W: Write>(
    out: &mut W,
    title: &str,
    unit: &str,
    groups: &WordGroups,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    for (key, words) in groups {
        writeln!(out, "  {} {}: {}", key, unit, words.join(" "))?;
    }
    Ok(())
}
