// src/core/alphabet.rs
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Relative letter frequencies of Russian prose.
/// 'ё' is folded into 'е' and is not part of the alphabet.
const RUSSIAN_FREQUENCIES: [(char, f64); 32] = [
    ('о', 0.1097), ('е', 0.0845), ('а', 0.0801), ('и', 0.0735), ('н', 0.0670),
    ('т', 0.0626), ('с', 0.0547), ('р', 0.0473), ('в', 0.0454), ('л', 0.0440),
    ('к', 0.0349), ('м', 0.0321), ('д', 0.0298), ('п', 0.0281), ('у', 0.0262),
    ('я', 0.0201), ('ы', 0.0190), ('ь', 0.0174), ('г', 0.0170), ('з', 0.0165),
    ('б', 0.0159), ('ч', 0.0144), ('й', 0.0121), ('х', 0.0097), ('ж', 0.0094),
    ('ш', 0.0073), ('ю', 0.0064), ('ц', 0.0048), ('щ', 0.0036), ('э', 0.0032),
    ('ф', 0.0026), ('ъ', 0.0004),
];

static BUILTIN_TABLE: Lazy<ReferenceTable> =
    Lazy::new(|| ReferenceTable::from_entries(RUSSIAN_FREQUENCIES));

/// True for 'а'..='я'.
pub fn is_lowercase_letter(c: char) -> bool {
    ('а'..='я').contains(&c)
}

/// True for 'А'..='Я'.
pub fn is_uppercase_letter(c: char) -> bool {
    ('А'..='Я').contains(&c)
}

/// Letters of the recognized alphabet, in either case.
/// Everything else passes through frequency and grouping logic untouched.
pub fn is_alphabet_letter(c: char) -> bool {
    is_lowercase_letter(c) || is_uppercase_letter(c)
}

/// How frequency counting treats the two cases of the same letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaseMode {
    /// 'Ф' and 'ф' are separate keys.
    #[default]
    Sensitive,
    /// Both cases are counted under the uppercase letter.
    Folded,
}

impl CaseMode {
    /// The key a letter is counted under. Callers must pass alphabet letters only.
    pub fn key(self, c: char) -> char {
        match self {
            CaseMode::Sensitive => c,
            CaseMode::Folded if is_lowercase_letter(c) => c.to_uppercase().next().unwrap_or(c),
            CaseMode::Folded => c,
        }
    }
}

/// Expected frequency of every letter in plain text of the target language.
/// Immutable once built; the analyzer ranks suggestions against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    frequencies: BTreeMap<char, f64>,
}

impl ReferenceTable {
    /// The bundled Russian table, built on first use.
    pub fn builtin() -> &'static ReferenceTable {
        &BUILTIN_TABLE
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        Self {
            frequencies: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, letter: char) -> Option<f64> {
        self.frequencies.get(&letter).copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.frequencies.iter().map(|(&c, &f)| (c, f))
    }

    pub fn total(&self) -> f64 {
        self.frequencies.values().sum()
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_lowercase_alphabet() {
        let table = ReferenceTable::builtin();
        assert_eq!(table.len(), 32);
        assert!(table.iter().all(|(c, _)| is_lowercase_letter(c)));
        assert!(table.get('ё').is_none());
        assert!((table.total() - 1.0).abs() < 0.01);
    }

    #[test]
    fn alphabet_excludes_latin_digits_and_yo() {
        assert!(is_alphabet_letter('Ж'));
        assert!(is_alphabet_letter('ж'));
        assert!(!is_alphabet_letter('ё'));
        assert!(!is_alphabet_letter('Ё'));
        assert!(!is_alphabet_letter('a'));
        assert!(!is_alphabet_letter('7'));
        assert!(!is_alphabet_letter('*'));
    }

    #[test]
    fn folded_mode_counts_under_uppercase() {
        assert_eq!(CaseMode::Folded.key('ф'), 'Ф');
        assert_eq!(CaseMode::Folded.key('Ф'), 'Ф');
        assert_eq!(CaseMode::Sensitive.key('ф'), 'ф');
    }
}
