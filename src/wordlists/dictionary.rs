//! Dictionary of secret words

use super::WORDS;
use super::loader::{load_from_file, parse_word, words_from_slice};
use crate::core::GameError;
use crate::manager::WordSource;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::info;

/// Error type for dictionary operations
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list file could not be read
    Io(io::Error),
    /// The word list contained no usable word
    NoValidWords,
    /// A word added by hand is blank or contains non-letters
    InvalidWord(String),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read word list: {e}"),
            Self::NoValidWords => write!(f, "Word list contains no valid word"),
            Self::InvalidWord(word) => {
                write!(f, "'{word}' is not a valid word (letters only)")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A list of normalized, unique words with random selection
///
/// Random picks use the thread-local generator from `rand`, which is
/// cryptographically secure, so a word cannot be predicted by the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Dictionary built from the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: words_from_slice(WORDS),
        }
    }

    /// Build a dictionary from arbitrary words, skipping invalid ones
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["rust", "Java", "c++", "RUST"]);
    /// assert_eq!(dictionary.words(), ["RUST", "JAVA"]);
    /// ```
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            // Invalid entries are skipped, like lines of a word list file
            let _ = dictionary.add_word(word.as_ref());
        }
        dictionary
    }

    /// Replace the content of the dictionary with the words of a file
    ///
    /// Returns the number of words loaded.
    ///
    /// # Errors
    /// - `DictionaryError::Io` if the file cannot be read
    /// - `DictionaryError::NoValidWords` if no line holds a valid word
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DictionaryError> {
        self.words.clear();
        self.words = load_from_file(path.as_ref())?;

        if self.words.is_empty() {
            return Err(DictionaryError::NoValidWords);
        }

        info!(
            path = %path.as_ref().display(),
            count = self.words.len(),
            "Loaded word list"
        );
        Ok(self.words.len())
    }

    /// Add a single word
    ///
    /// Duplicates are ignored.
    ///
    /// # Errors
    /// Returns `DictionaryError::InvalidWord` if the word is blank or
    /// contains anything other than letters.
    pub fn add_word(&mut self, word: &str) -> Result<(), DictionaryError> {
        let normalized =
            parse_word(word).ok_or_else(|| DictionaryError::InvalidWord(word.to_string()))?;

        if !self.words.contains(&normalized) {
            self.words.push(normalized);
        }
        Ok(())
    }

    /// Pick a word uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::EmptySource` if the dictionary is empty.
    pub fn random_word(&self) -> Result<String, GameError> {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(GameError::EmptySource)
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl WordSource for Dictionary {
    fn count(&self) -> usize {
        Self::count(self)
    }

    fn random_word(&self) -> Result<String, GameError> {
        Self::random_word(self)
    }
}
