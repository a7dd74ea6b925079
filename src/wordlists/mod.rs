//! Word lists for hangman
//!
//! Provides the dictionary used as the random word source, backed either by
//! the embedded list compiled into the binary or by a user-supplied file.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};
