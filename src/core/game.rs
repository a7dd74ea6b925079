//! Game session state machine
//!
//! A `GameSession` owns a [`SecretWord`], the letters attempted so far and
//! the error count. Its status moves one way, from in-progress to either
//! won or lost, and never changes afterwards.

use super::{GameError, SecretWord, is_guessable, normalize_letter};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Status of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and lost are terminal
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One complete game, from word selection to win or loss
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretWord,
    attempted: FxHashSet<char>,
    error_count: u32,
    max_errors: u32,
    status: GameStatus,
}

impl GameSession {
    /// Create a new session for `word` allowing `max_errors` wrong guesses
    ///
    /// # Errors
    /// - `GameError::InvalidConfiguration` if `max_errors` is zero
    /// - `GameError::InvalidWord` if the word is empty
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameSession, GameStatus};
    ///
    /// let mut game = GameSession::new("java", 6).unwrap();
    /// assert!(game.propose_letter('j').unwrap());
    /// assert!(!game.propose_letter('z').unwrap());
    /// assert_eq!(game.display_form(), "J _ _ _");
    /// assert_eq!(game.error_count(), 1);
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    pub fn new(word: &str, max_errors: u32) -> Result<Self, GameError> {
        if max_errors < 1 {
            return Err(GameError::InvalidConfiguration(
                "at least one error must be allowed",
            ));
        }

        let secret = SecretWord::new(word)?;

        Ok(Self {
            secret,
            attempted: FxHashSet::default(),
            error_count: 0,
            max_errors,
            status: GameStatus::InProgress,
        })
    }

    /// Propose a letter
    ///
    /// Returns whether the letter occurs in the word. A letter that was
    /// already attempted returns `false` without touching the error count,
    /// the attempted set or the status.
    ///
    /// # Errors
    /// - `GameError::InvalidGuess` if `letter` is not alphabetic
    /// - `GameError::GameOver` if the session is already won or lost
    pub fn propose_letter(&mut self, letter: char) -> Result<bool, GameError> {
        if !is_guessable(letter) {
            return Err(GameError::InvalidGuess(letter));
        }

        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }

        let letter = normalize_letter(letter);

        if !self.attempted.insert(letter) {
            debug!(%letter, "Letter already attempted");
            return Ok(false);
        }

        let present = self.secret.reveal_letter(letter);
        if !present {
            self.error_count += 1;
        }

        self.update_status();

        debug!(
            %letter,
            present,
            errors = self.error_count,
            max_errors = self.max_errors,
            status = %self.status,
            "Letter proposed"
        );

        Ok(present)
    }

    /// Win is checked before loss so a completing guess always wins
    fn update_status(&mut self) {
        if self.secret.is_complete() {
            self.status = GameStatus::Won;
        } else if self.error_count >= self.max_errors {
            self.status = GameStatus::Lost;
        }
    }

    /// Whether the letter was already proposed (case-insensitive)
    #[inline]
    #[must_use]
    pub fn is_already_attempted(&self, letter: char) -> bool {
        self.attempted.contains(&normalize_letter(letter))
    }

    /// The word as shown to the player, e.g. `J A _ A`
    #[must_use]
    pub fn display_form(&self) -> String {
        self.secret.display_form()
    }

    /// Each position of the word: the letter if revealed, `None` otherwise
    #[must_use]
    pub fn masked(&self) -> Vec<Option<char>> {
        self.secret.masked()
    }

    #[inline]
    #[must_use]
    pub const fn error_count(&self) -> u32 {
        self.error_count
    }

    #[inline]
    #[must_use]
    pub const fn max_errors(&self) -> u32 {
        self.max_errors
    }

    /// Wrong guesses still allowed before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_errors(&self) -> u32 {
        self.max_errors.saturating_sub(self.error_count)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Snapshot of every letter proposed so far, in alphabetical order
    #[must_use]
    pub fn attempted_letters(&self) -> BTreeSet<char> {
        self.attempted.iter().copied().collect()
    }

    /// The full secret word
    ///
    /// Meant for disclosure once the game is over.
    #[inline]
    #[must_use]
    pub fn revealed_word(&self) -> &str {
        self.secret.text()
    }

    /// Read-only access to the secret word and its reveal state
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }
}
