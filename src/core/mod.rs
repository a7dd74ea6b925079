//! Core domain types for hangman
//!
//! This module contains the game-state engine: the secret word with its
//! revealed letters, the game session state machine, and the error taxonomy.
//! Everything here is pure, synchronous and free of I/O.

mod error;
mod game;
mod letter;
mod secret;

pub use error::GameError;
pub use game::{GameSession, GameStatus};
pub use letter::{is_guessable, normalize_letter, normalize_word};
pub use secret::{PLACEHOLDER, SecretWord};
