// src/core/frequency.rs
use crate::core::alphabet::{is_alphabet_letter, is_lowercase_letter, CaseMode, ReferenceTable};
use crate::core::types::{FrequencyMap, SubstitutionRule};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Counts every alphabet letter in `text`. Other characters are ignored.
/// O(n) in the length of the text.
pub fn analyze_frequency(text: &str, mode: CaseMode) -> FrequencyMap {
    let mut freq = FrequencyMap::new();
    for c in text.chars().filter(|&c| is_alphabet_letter(c)) {
        *freq.entry(mode.key(c)).or_insert(0) += 1;
    }
    freq
}

/// Letters by descending count; equal counts keep ascending code point order.
pub fn rank_counts(freq: &FrequencyMap) -> Vec<(char, usize)> {
    let mut ranked: Vec<(char, usize)> = freq.iter().map(|(&c, &n)| (c, n)).collect();
    // BTreeMap yields ascending letters and the sort is stable.
    ranked.sort_by_key(|&(_, count)| Reverse(count));
    ranked
}

/// Reference letters by descending expected frequency, same tie-break as `rank_counts`.
pub fn rank_reference(table: &ReferenceTable) -> Vec<(char, f64)> {
    let mut ranked: Vec<(char, f64)> = table.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Pairs the i-th most frequent ciphertext letter with the i-th most frequent
/// reference letter. Most frequent pairing first.
///
/// In `CaseMode::Folded` the list starts with one rule per lowercase letter of
/// the ciphertext that turns it into its uppercase key, so the ranked rules
/// that follow reach both forms and never match their own lowercase output.
pub fn suggest_replacements(
    ciphertext: &str,
    table: &ReferenceTable,
    mode: CaseMode,
) -> Vec<SubstitutionRule> {
    let cipher_ranking = rank_counts(&analyze_frequency(ciphertext, mode));
    let reference_ranking = rank_reference(table);

    let mut rules = folding_rules(ciphertext, mode);
    rules.extend(
        cipher_ranking
            .iter()
            .zip(reference_ranking.iter())
            .map(|(&(from, _), &(to, _))| SubstitutionRule::new(from, to)),
    );
    rules
}

fn folding_rules(ciphertext: &str, mode: CaseMode) -> Vec<SubstitutionRule> {
    if mode != CaseMode::Folded {
        return Vec::new();
    }
    let lowercase: BTreeSet<char> = ciphertext.chars().filter(|&c| is_lowercase_letter(c)).collect();
    lowercase
        .into_iter()
        .map(|c| SubstitutionRule::new(c, mode.key(c)))
        .collect()
}
