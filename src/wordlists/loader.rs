//! Word list loading utilities
//!
//! Parses word lists from text (one word per line) and converts the
//! embedded constants. Every word coming out of here is trimmed, uppercase
//! and made of letters only.

use crate::core::normalize_word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize a single dictionary entry
///
/// Returns `None` for blank lines and for entries containing anything
/// other than letters.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::parse_word;
///
/// assert_eq!(parse_word("  castle "), Some("CASTLE".to_string()));
/// assert_eq!(parse_word("ice cream"), None);
/// assert_eq!(parse_word(""), None);
/// ```
#[must_use]
pub fn parse_word(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(normalize_word(trimmed))
}

/// Parse a word list, skipping invalid entries and duplicates
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .filter_map(parse_word)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Load words from a file
///
/// Returns the valid words in file order, skipping invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Convert embedded string slice to a word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| parse_word(s)).collect()
}
