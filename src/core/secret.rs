//! Secret word representation
//!
//! A `SecretWord` stores the word to guess along with the set of letters
//! revealed so far. Revelation is keyed by letter identity, so revealing a
//! letter uncovers every position where it occurs.

use super::{GameError, normalize_letter, normalize_word};
use rustc_hash::FxHashSet;
use std::fmt;

/// Mark shown in place of a letter that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// The word a player has to uncover, with its reveal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    revealed: FxHashSet<char>,
}

impl SecretWord {
    /// Create a new secret word, normalized to uppercase
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the word is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let mut secret = SecretWord::new("Algorithm").unwrap();
    /// assert_eq!(secret.text(), "ALGORITHM");
    ///
    /// secret.reveal_letter('a');
    /// secret.reveal_letter('g');
    /// assert_eq!(secret.display_form(), "A _ G _ _ _ _ _ _");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self, GameError> {
        if word.is_empty() {
            return Err(GameError::InvalidWord("word is empty"));
        }

        let text = normalize_word(word);
        let letters = text.chars().collect();

        Ok(Self {
            text,
            letters,
            revealed: FxHashSet::default(),
        })
    }

    /// Reveal every occurrence of `letter`
    ///
    /// Returns `true` if the letter occurs in the word. Revealing the same
    /// letter again returns `true` and changes nothing; a letter that does
    /// not occur leaves the state untouched and returns `false`.
    pub fn reveal_letter(&mut self, letter: char) -> bool {
        let letter = normalize_letter(letter);

        if self.letters.contains(&letter) {
            self.revealed.insert(letter);
            true
        } else {
            false
        }
    }

    /// Check if a letter has been revealed (case-insensitive)
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.revealed.contains(&normalize_letter(letter))
    }

    /// Each position of the word: the letter if revealed, `None` otherwise
    #[must_use]
    pub fn masked(&self) -> Vec<Option<char>> {
        self.letters
            .iter()
            .map(|letter| self.revealed.contains(letter).then_some(*letter))
            .collect()
    }

    /// The word as shown to the player, e.g. `J _ V _`
    #[must_use]
    pub fn display_form(&self) -> String {
        let shown: Vec<String> = self
            .masked()
            .into_iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER).to_string())
            .collect();
        shown.join(" ")
    }

    /// Whether every position of the word has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters
            .iter()
            .all(|letter| self.revealed.contains(letter))
    }

    /// The full word (normalized)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Number of different letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.iter().collect::<FxHashSet<_>>().len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_form())
    }
}
