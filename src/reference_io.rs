// File: src/reference_io.rs
use crate::core::alphabet::{is_lowercase_letter, ReferenceTable};
use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Allowed distance of a table's total from 1.0 before a warning is logged.
const TOTAL_TOLERANCE: f64 = 0.05;

/// Writes `table` as a JSON object of letter -> frequency.
/// The file is replaced atomically.
pub fn save_table(table: &ReferenceTable, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory {:?}", parent_dir))?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, table)?;
        writer.flush()?;
    }

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write reference table to {:?}", path))?;
    Ok(())
}

/// Reads and validates a reference table written by `save_table` or by hand.
pub fn load_table(path: &Path) -> Result<ReferenceTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open reference table {:?}", path))?;
    let table: ReferenceTable = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Malformed reference table {:?}", path))?;
    validate(&table)?;
    info!("loaded reference table with {} letters from {:?}", table.len(), path);
    Ok(table)
}

fn validate(table: &ReferenceTable) -> Result<()> {
    if table.is_empty() {
        bail!("Reference table is empty");
    }
    for (letter, frequency) in table.iter() {
        if !is_lowercase_letter(letter) {
            bail!("Letter {:?} is not a lowercase letter of the alphabet", letter);
        }
        if !frequency.is_finite() || frequency <= 0.0 || frequency > 1.0 {
            bail!("Frequency {} of {:?} is outside (0, 1]", frequency, letter);
        }
    }
    let total = table.total();
    if (total - 1.0).abs() > TOTAL_TOLERANCE {
        warn!("reference frequencies sum to {:.4}, expected about 1", total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_table_survives_a_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("russian.json");
        save_table(ReferenceTable::builtin(), &path).unwrap();
        let loaded = load_table(&path).unwrap();
        assert_eq!(&loaded, ReferenceTable::builtin());
    }

    #[test]
    fn rejects_letters_outside_the_alphabet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.json");
        fs::write(&path, r#"{"e": 0.5, "о": 0.5}"#).unwrap();
        assert!(load_table(&path).is_err());
    }

    #[test]
    fn rejects_bad_frequencies_and_empty_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");

        fs::write(&path, r#"{"о": 0.0}"#).unwrap();
        assert!(load_table(&path).is_err());

        fs::write(&path, r#"{"о": 1.5}"#).unwrap();
        assert!(load_table(&path).is_err());

        fs::write(&path, "{}").unwrap();
        assert!(load_table(&path).is_err());
    }

    #[test]
    fn accepts_tables_that_do_not_sum_to_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"о": 0.4, "е": 0.3}"#).unwrap();
        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get('е'), Some(0.3));
    }
}
