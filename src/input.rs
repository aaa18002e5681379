// File: src/input.rs
//! Validation of text typed at the console before it reaches the engine.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Cryptogram bundled for demonstration runs.
pub const SAMPLE_CIPHERTEXT: &str = "КЩРНСИШЩХДТ РБУТЦИФЮСНЫ ШЙ ЬЙЛБ НСЙСТНСТОБНДЩМЩ ЙШЙЖТЛИ СБДНСИ ШЩ СЩЖЕДЩ БНЖТ ЩШ РЩНСЙСЩОШЩ РЖТШШИГ";

/// First character of a typed line, ignoring surrounding whitespace.
pub fn parse_letter(line: &str) -> Result<char> {
    match line.trim().chars().next() {
        Some(c) => Ok(c),
        None => bail!("Expected a letter, got an empty line"),
    }
}

/// Ciphertext as read from a console line: the line terminator is not part of it.
pub fn clean_ciphertext(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

pub fn read_ciphertext_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ciphertext from {:?}", path))?;
    Ok(clean_ciphertext(&text).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_first_character_of_trimmed_line() {
        assert_eq!(parse_letter("Ф\n").unwrap(), 'Ф');
        assert_eq!(parse_letter("  оля\n").unwrap(), 'о');
    }

    #[test]
    fn blank_lines_are_rejected() {
        assert!(parse_letter("").is_err());
        assert!(parse_letter(" \t\n").is_err());
    }

    #[test]
    fn console_line_loses_only_its_terminator() {
        assert_eq!(clean_ciphertext("ШЙ ЬЙЛБ \r\n"), "ШЙ ЬЙЛБ ");
    }
}
