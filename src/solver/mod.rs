//! Automatic guessers
//!
//! Strategies that play a game on their own, used to benchmark how hard the
//! dictionary is for a given error budget.

mod frequency;
pub mod strategy;

pub use frequency::FrequencyGuesser;
pub use strategy::{Guesser, GuesserType, RandomGuesser};
