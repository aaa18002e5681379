// src/core/grouping.rs
use crate::core::types::WordGroups;

/// Marks a letter of the decrypted text that is still unresolved.
pub const PLACEHOLDER: char = '*';

/// Groups whitespace-separated words by their length in characters.
pub fn group_words_by_length(text: &str) -> WordGroups {
    group_by(text, |word| word.chars().count())
}

/// Groups words by how many placeholders they still contain.
/// Fully resolved words land under key 0.
pub fn group_words_by_unknown_letters(text: &str) -> WordGroups {
    group_by(text, |word| word.chars().filter(|&c| c == PLACEHOLDER).count())
}

fn group_by(text: &str, key: impl Fn(&str) -> usize) -> WordGroups {
    let mut groups = WordGroups::new();
    for word in text.split_whitespace() {
        groups.entry(key(word)).or_default().push(word.to_string());
    }
    groups
}
