//! Single-session game manager

use super::WordSource;
use crate::core::{GameError, GameSession, GameStatus};
use tracing::{info, warn};

/// Error budget used when the caller does not supply one
pub const DEFAULT_MAX_ERRORS: u32 = 6;

/// Owns at most one game session and forwards guesses to it
///
/// Starting a game always builds the new session first and only then
/// replaces the previous one, so a failed start leaves the active session
/// untouched.
pub struct SessionManager<'a, S: WordSource + ?Sized> {
    source: &'a S,
    default_max_errors: u32,
    active: Option<GameSession>,
}

impl<'a, S: WordSource + ?Sized> SessionManager<'a, S> {
    /// Create a manager drawing random words from `source`
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `default_max_errors` is zero.
    ///
    /// # Examples
    /// ```
    /// use hangman::manager::SessionManager;
    /// use hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["java"]);
    /// let mut manager = SessionManager::new(&dictionary, 6).unwrap();
    ///
    /// manager.start_single_player().unwrap();
    /// assert!(manager.propose_letter('a').unwrap());
    /// assert_eq!(manager.active_session().unwrap().display_form(), "_ A _ A");
    /// ```
    pub fn new(source: &'a S, default_max_errors: u32) -> Result<Self, GameError> {
        if default_max_errors < 1 {
            return Err(GameError::InvalidConfiguration(
                "default error budget must be at least 1",
            ));
        }

        Ok(Self {
            source,
            default_max_errors,
            active: None,
        })
    }

    /// Start a single-player game on a random word with the default budget
    ///
    /// # Errors
    /// Returns `GameError::EmptySource` if the word source has no words.
    pub fn start_single_player(&mut self) -> Result<(), GameError> {
        self.start_single_player_with_error_budget(self.default_max_errors)
    }

    /// Start a single-player game on a random word with a custom budget
    ///
    /// # Errors
    /// - `GameError::EmptySource` if the word source has no words
    /// - `GameError::InvalidConfiguration` if `max_errors` is zero
    pub fn start_single_player_with_error_budget(
        &mut self,
        max_errors: u32,
    ) -> Result<(), GameError> {
        let word = self.source.random_word().inspect_err(|e| {
            warn!(error = %e, "Could not pick a random word");
        })?;
        let session = GameSession::new(&word, max_errors)?;

        info!(
            mode = "single-player",
            word_len = session.secret().len(),
            max_errors,
            "Starting new game"
        );
        self.active = Some(session);
        Ok(())
    }

    /// Start a two-player game on a word chosen by the first player
    ///
    /// The word is trimmed and must consist of letters only.
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the word is blank or contains
    /// anything other than letters.
    pub fn start_two_player(&mut self, word: &str) -> Result<(), GameError> {
        let word = word.trim();

        if word.is_empty() {
            return Err(GameError::InvalidWord("word is blank"));
        }
        if !word.chars().all(char::is_alphabetic) {
            return Err(GameError::InvalidWord("word must contain only letters"));
        }

        let session = GameSession::new(word, self.default_max_errors)?;

        info!(
            mode = "two-player",
            word_len = session.secret().len(),
            max_errors = self.default_max_errors,
            "Starting new game"
        );
        self.active = Some(session);
        Ok(())
    }

    /// Forward a guess to the active session
    ///
    /// # Errors
    /// - `GameError::NoActiveSession` if no game was started
    /// - any error raised by [`GameSession::propose_letter`]
    pub fn propose_letter(&mut self, letter: char) -> Result<bool, GameError> {
        let session = self.active.as_mut().ok_or(GameError::NoActiveSession)?;
        let present = session.propose_letter(letter)?;

        if session.status().is_terminal() {
            info!(
                status = %session.status(),
                errors = session.error_count(),
                "Game finished"
            );
        }

        Ok(present)
    }

    /// A session exists and is still being played
    #[must_use]
    pub fn has_active_in_progress_session(&self) -> bool {
        self.active_status() == Some(GameStatus::InProgress)
    }

    /// A session exists and is won or lost
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.active_status().is_some_and(GameStatus::is_terminal)
    }

    fn active_status(&self) -> Option<GameStatus> {
        self.active.as_ref().map(GameSession::status)
    }

    /// Read-only view of the active session
    #[inline]
    #[must_use]
    pub const fn active_session(&self) -> Option<&GameSession> {
        self.active.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn default_max_errors(&self) -> u32 {
        self.default_max_errors
    }

    #[inline]
    #[must_use]
    pub const fn word_source(&self) -> &'a S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out its words in order, cycling
    struct FixedSource {
        words: Vec<&'static str>,
        next: std::cell::Cell<usize>,
    }

    impl FixedSource {
        fn new(words: &[&'static str]) -> Self {
            Self {
                words: words.to_vec(),
                next: std::cell::Cell::new(0),
            }
        }
    }

    impl WordSource for FixedSource {
        fn count(&self) -> usize {
            self.words.len()
        }

        fn random_word(&self) -> Result<String, GameError> {
            if self.words.is_empty() {
                return Err(GameError::EmptySource);
            }
            let index = self.next.get();
            self.next.set((index + 1) % self.words.len());
            Ok(self.words[index].to_string())
        }
    }

    #[test]
    fn zero_default_budget_rejected() {
        let source = FixedSource::new(&["JAVA"]);
        assert!(matches!(
            SessionManager::new(&source, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn no_session_initially() {
        let source = FixedSource::new(&["JAVA"]);
        let manager = SessionManager::new(&source, 6).unwrap();
        assert!(manager.active_session().is_none());
        assert!(!manager.has_active_in_progress_session());
        assert!(!manager.is_finished());
    }

    #[test]
    fn guess_without_session_fails() {
        let source = FixedSource::new(&["JAVA"]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        assert_eq!(
            manager.propose_letter('A'),
            Err(GameError::NoActiveSession)
        );
    }

    #[test]
    fn single_player_uses_source_and_default_budget() {
        let source = FixedSource::new(&["JAVA"]);
        let mut manager = SessionManager::new(&source, 4).unwrap();
        manager.start_single_player().unwrap();

        let session = manager.active_session().unwrap();
        assert_eq!(session.revealed_word(), "JAVA");
        assert_eq!(session.max_errors(), 4);
        assert!(manager.has_active_in_progress_session());
    }

    #[test]
    fn single_player_with_custom_budget() {
        let source = FixedSource::new(&["JAVA"]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        manager.start_single_player_with_error_budget(10).unwrap();
        assert_eq!(manager.active_session().unwrap().max_errors(), 10);
    }

    #[test]
    fn custom_budget_of_zero_keeps_previous_session() {
        let source = FixedSource::new(&["JAVA", "RUST"]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        manager.start_single_player().unwrap();

        assert!(matches!(
            manager.start_single_player_with_error_budget(0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert_eq!(manager.active_session().unwrap().revealed_word(), "JAVA");
    }

    #[test]
    fn empty_source_fails_without_replacing_session() {
        let empty = FixedSource::new(&[]);
        let mut manager = SessionManager::new(&empty, 6).unwrap();
        assert_eq!(manager.start_single_player(), Err(GameError::EmptySource));
        assert!(manager.active_session().is_none());

        manager.start_two_player("rust").unwrap();
        manager.propose_letter('r').unwrap();
        assert_eq!(manager.start_single_player(), Err(GameError::EmptySource));

        let session = manager.active_session().unwrap();
        assert_eq!(session.revealed_word(), "RUST");
        assert!(session.is_already_attempted('R'));
    }

    #[test]
    fn two_player_word_is_trimmed_and_normalized() {
        let source = FixedSource::new(&[]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        manager.start_two_player("  pendu ").unwrap();
        assert_eq!(manager.active_session().unwrap().revealed_word(), "PENDU");
    }

    #[test]
    fn two_player_rejects_blank_and_non_letters() {
        let source = FixedSource::new(&[]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        for word in ["", "   ", "two words", "r2d2"] {
            assert!(matches!(
                manager.start_two_player(word),
                Err(GameError::InvalidWord(_))
            ));
        }
        assert!(manager.active_session().is_none());
    }

    #[test]
    fn new_game_replaces_previous_one() {
        let source = FixedSource::new(&["JAVA", "RUST"]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        manager.start_single_player().unwrap();
        manager.propose_letter('Z').unwrap();

        manager.start_single_player().unwrap();
        let session = manager.active_session().unwrap();
        assert_eq!(session.revealed_word(), "RUST");
        assert_eq!(session.error_count(), 0);
        assert!(session.attempted_letters().is_empty());
    }

    #[test]
    fn finished_after_win() {
        let source = FixedSource::new(&[]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        manager.start_two_player("ab").unwrap();
        manager.propose_letter('a').unwrap();
        assert!(!manager.is_finished());
        manager.propose_letter('b').unwrap();

        assert!(manager.is_finished());
        assert!(!manager.has_active_in_progress_session());
        assert_eq!(
            manager.propose_letter('c'),
            Err(GameError::GameOver(GameStatus::Won))
        );
    }

    #[test]
    fn guess_errors_are_propagated() {
        let source = FixedSource::new(&["JAVA"]);
        let mut manager = SessionManager::new(&source, 6).unwrap();
        manager.start_single_player().unwrap();
        assert_eq!(manager.propose_letter('#'), Err(GameError::InvalidGuess('#')));
    }

    #[test]
    fn works_through_a_trait_object() {
        let source = FixedSource::new(&["JAVA"]);
        let dyn_source: &dyn WordSource = &source;
        let mut manager = SessionManager::new(dyn_source, 6).unwrap();
        manager.start_single_player().unwrap();
        assert_eq!(manager.word_source().count(), 1);
        assert_eq!(manager.default_max_errors(), 6);
    }
}
