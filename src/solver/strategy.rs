//! Guess selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use super::FrequencyGuesser;
use crate::core::GameSession;

/// Letters proposed by the automatic guessers
pub(crate) const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A strategy for choosing the next letter of a running game
pub trait Guesser {
    /// Select the next letter to propose
    ///
    /// Returns `None` when the guesser has no untried letter left.
    fn next_letter(&self, session: &GameSession) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum GuesserType<'a> {
    /// Letter frequency among the dictionary words still possible (default)
    Frequency(FrequencyGuesser<'a>),
    /// Uniformly random untried letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType<'_> {
    fn next_letter(&self, session: &GameSession) -> Option<char> {
        match self {
            Self::Frequency(g) => g.next_letter(session),
            Self::Random(g) => g.next_letter(session),
        }
    }
}

impl<'a> GuesserType<'a> {
    /// Create a guesser from its name
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, words: &'a [String]) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser::new(words)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Random strategy
///
/// Picks any letter of the alphabet that has not been tried yet.
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter(&self, session: &GameSession) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let untried: Vec<char> = ALPHABET
            .chars()
            .filter(|&letter| !session.is_already_attempted(letter))
            .collect();

        untried.choose(&mut rand::rng()).copied()
    }
}
