//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a line-delimited file
///
/// Lines are trimmed and uppercased. Entries that are not five letters are
/// skipped, and repeats keep their first position.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use waffle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let words = dedup(content.lines().map(str::trim).filter(|line| !line.is_empty()));
    log::debug!("loaded {} words from file", words.len());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use waffle_solver::wordlists::loader::words_from_slice;
/// use waffle_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dedup(slice.iter().copied())
}

fn dedup<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    entries
        .filter_map(|entry| Word::new(entry).ok())
        .filter(|word| seen.insert(*word))
        .collect()
}
