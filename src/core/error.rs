//! Error type for the game engine

use super::GameStatus;
use std::fmt;

/// Every way a game operation can be rejected
///
/// All errors are raised synchronously and leave the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The secret word is empty, blank or contains non-letters
    InvalidWord(&'static str),
    /// An error budget below one, or another unusable setting
    InvalidConfiguration(&'static str),
    /// The guess is not an alphabetic character
    InvalidGuess(char),
    /// A guess was proposed after the session reached a terminal status
    GameOver(GameStatus),
    /// A guess was proposed before any session was started
    NoActiveSession,
    /// A random word was requested from an empty word source
    EmptySource,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(reason) => write!(f, "Invalid word: {reason}"),
            Self::InvalidConfiguration(reason) => write!(f, "Invalid configuration: {reason}"),
            Self::InvalidGuess(letter) => {
                write!(f, "Only letters can be guessed, got {letter:?}")
            }
            Self::GameOver(status) => write!(f, "The game is over ({status})"),
            Self::NoActiveSession => write!(f, "No game in progress"),
            Self::EmptySource => write!(f, "The word source is empty"),
        }
    }
}

impl std::error::Error for GameError {}
