//! Word source abstraction

use crate::core::GameError;

/// Supplies secret words for single-player games
///
/// Words handed out by a source are expected to already be normalized
/// (uppercase, alphabetic only); the session manager does not re-validate
/// them.
pub trait WordSource {
    /// Number of words available
    fn count(&self) -> usize;

    /// Pick a word at random
    ///
    /// # Errors
    /// Returns `GameError::EmptySource` if `count()` is zero.
    fn random_word(&self) -> Result<String, GameError>;
}
