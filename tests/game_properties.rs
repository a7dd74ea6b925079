//! Property-based tests for the game rules.

use hangman::core::{GameError, GameSession, GameStatus, SecretWord};
use hangman::manager::SessionManager;
use hangman::wordlists::Dictionary;
use proptest::prelude::*;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn distinct_letters(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

fn absent_letters(word: &str) -> Vec<char> {
    ALPHABET.chars().filter(|&c| !word.contains(c)).collect()
}

// =============================================================================
// Outcomes
// =============================================================================

proptest! {
    /// Every letter of the word with fewer than max_errors misses wins.
    #[test]
    fn prop_covering_guesses_win(
        word in "[A-Z]{1,12}",
        max_errors in 1u32..10,
        misses in 0usize..10
    ) {
        let wrong: Vec<char> = absent_letters(&word)
            .into_iter()
            .take(misses.min(max_errors as usize - 1))
            .collect();

        let mut game = GameSession::new(&word, max_errors).unwrap();
        for &letter in &wrong {
            prop_assert!(!game.propose_letter(letter).unwrap());
        }
        for letter in distinct_letters(&word) {
            prop_assert!(game.propose_letter(letter).unwrap());
        }

        prop_assert_eq!(game.status(), GameStatus::Won);
        prop_assert!(!game.display_form().contains('_'));
        prop_assert_eq!(game.error_count() as usize, wrong.len());
    }

    /// max_errors distinct absent letters always lose.
    #[test]
    fn prop_absent_guesses_lose(
        word in "[A-M]{1,10}",
        max_errors in 1u32..=13
    ) {
        let mut game = GameSession::new(&word, max_errors).unwrap();

        for (i, letter) in "NOPQRSTUVWXYZ".chars().take(max_errors as usize).enumerate() {
            prop_assert_eq!(game.status(), GameStatus::InProgress);
            prop_assert!(!game.propose_letter(letter).unwrap());
            prop_assert_eq!(game.error_count() as usize, i + 1);
        }

        prop_assert_eq!(game.status(), GameStatus::Lost);
    }
}

// =============================================================================
// Repeats and case
// =============================================================================

proptest! {
    /// Proposing a letter again never changes errors, status or attempted letters.
    #[test]
    fn prop_repeat_is_noop(
        word in "[A-Z]{1,10}",
        guesses in prop::collection::vec(prop::sample::select(ALPHABET.chars().collect::<Vec<_>>()), 1..20)
    ) {
        let mut game = GameSession::new(&word, 6).unwrap();

        for letter in guesses {
            if game.status().is_terminal() {
                break;
            }
            game.propose_letter(letter).unwrap();
            if game.status().is_terminal() {
                break;
            }

            let errors = game.error_count();
            let status = game.status();
            let attempted = game.attempted_letters();

            prop_assert!(!game.propose_letter(letter).unwrap());
            prop_assert!(!game.propose_letter(letter.to_ascii_lowercase()).unwrap());
            prop_assert_eq!(game.error_count(), errors);
            prop_assert_eq!(game.status(), status);
            prop_assert_eq!(game.attempted_letters(), attempted);
        }
    }

    /// Lowercase and uppercase guesses play the same game.
    #[test]
    fn prop_guesses_are_case_insensitive(
        word in "[a-zA-Z]{1,10}",
        guesses in prop::collection::vec(prop::sample::select(ALPHABET.chars().collect::<Vec<_>>()), 1..15)
    ) {
        let mut upper = GameSession::new(&word, 8).unwrap();
        let mut lower = GameSession::new(&word.to_lowercase(), 8).unwrap();

        for letter in guesses {
            let a = upper.propose_letter(letter);
            let b = lower.propose_letter(letter.to_ascii_lowercase());
            prop_assert_eq!(a, b);
        }

        prop_assert_eq!(upper.display_form(), lower.display_form());
        prop_assert_eq!(upper.error_count(), lower.error_count());
        prop_assert_eq!(upper.status(), lower.status());
    }

    /// Revealing a letter twice answers the same and changes nothing more.
    #[test]
    fn prop_reveal_is_idempotent(
        word in "[A-Z]{1,10}",
        letter in prop::sample::select(ALPHABET.chars().collect::<Vec<_>>())
    ) {
        let mut secret = SecretWord::new(&word).unwrap();

        let first = secret.reveal_letter(letter);
        let masked = secret.masked();
        let second = secret.reveal_letter(letter);

        prop_assert_eq!(first, word.contains(letter));
        prop_assert_eq!(first, second);
        prop_assert_eq!(secret.masked(), masked);
    }
}

// =============================================================================
// Terminal sessions
// =============================================================================

proptest! {
    /// Any proposal after the game ends fails with GameOver.
    #[test]
    fn prop_terminal_session_rejects_guesses(
        word in "[A-Z]{1,8}",
        lose in any::<bool>(),
        letter in prop::sample::select(ALPHABET.chars().collect::<Vec<_>>())
    ) {
        let mut game = GameSession::new(&word, 1).unwrap();
        if lose {
            let miss = absent_letters(&word)[0];
            game.propose_letter(miss).unwrap();
        } else {
            for letter in distinct_letters(&word) {
                game.propose_letter(letter).unwrap();
            }
        }
        let status = game.status();
        prop_assert!(status.is_terminal());

        prop_assert_eq!(game.propose_letter(letter), Err(GameError::GameOver(status)));
        prop_assert_eq!(game.status(), status);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn java_is_won_in_three_guesses() {
    let mut game = GameSession::new("JAVA", 6).unwrap();

    assert!(game.propose_letter('J').unwrap());
    assert_eq!(game.display_form(), "J _ _ _");
    assert_eq!(game.status(), GameStatus::InProgress);

    assert!(game.propose_letter('A').unwrap());
    assert_eq!(game.display_form(), "J A _ A");

    assert!(game.propose_letter('V').unwrap());
    assert_eq!(game.display_form(), "J A V A");
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn java_is_lost_after_six_misses() {
    let mut game = GameSession::new("JAVA", 6).unwrap();

    for (i, letter) in "ZXWQBC".chars().enumerate() {
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.propose_letter(letter).unwrap());
        assert_eq!(game.error_count() as usize, i + 1);
    }
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn repeated_letter_in_other_case_is_ignored() {
    let mut game = GameSession::new("PENDU", 6).unwrap();

    assert!(game.propose_letter('P').unwrap());
    assert!(game.secret().is_revealed('P'));

    assert!(!game.propose_letter('p').unwrap());
    assert_eq!(game.attempted_letters().len(), 1);
    assert_eq!(game.error_count(), 0);
}

#[test]
fn empty_source_keeps_previous_session() {
    let dictionary = Dictionary::new();
    let mut manager = SessionManager::new(&dictionary, 6).unwrap();

    assert_eq!(manager.start_single_player(), Err(GameError::EmptySource));
    assert!(manager.active_session().is_none());

    manager.start_two_player("rust").unwrap();
    manager.propose_letter('r').unwrap();

    assert_eq!(manager.start_single_player(), Err(GameError::EmptySource));
    let session = manager.active_session().unwrap();
    assert_eq!(session.revealed_word(), "RUST");
    assert_eq!(session.display_form(), "R _ _ _");
}
