//! Catalog loading utilities
//!
//! Provides functions to load a catalog from a file using the same
//! `word|category|description` format as the embedded data.

use super::WordCatalog;
use crate::core::WordRecord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load a catalog from a file
///
/// Skips blank lines, `#` comments and entries that are not valid records.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_guess::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/catalog.txt").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordCatalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let records = parse_records(&content);
    debug!(path = %path.as_ref().display(), count = records.len(), "catalog loaded");
    Ok(WordCatalog::from_records(records))
}

/// Parse `word|category|description` lines into records
#[must_use]
pub fn parse_records(content: &str) -> Vec<WordRecord> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.splitn(3, '|').map(str::trim);
            let word = fields.next()?;
            let category = fields.next().unwrap_or_default();
            let description = fields.next().unwrap_or_default();
            WordRecord::new(word, description, category).ok()
        })
        .collect()
}
