//! Letter-frequency guesser
//!
//! Narrows the dictionary to the words still consistent with the game and
//! proposes the untried letter found in the most of them.

use super::Guesser;
use super::strategy::ALPHABET;
use crate::core::GameSession;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;

/// English letters from most to least frequent, used once no word fits
const ENGLISH_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Frequency strategy over a word list
pub struct FrequencyGuesser<'a> {
    words: &'a [String],
}

impl<'a> FrequencyGuesser<'a> {
    #[must_use]
    pub const fn new(words: &'a [String]) -> Self {
        Self { words }
    }

    /// Words that could still be the secret
    ///
    /// A word fits when it has the same length, shows the revealed letter
    /// at every revealed position, and has no attempted letter anywhere
    /// else (a present letter is revealed at all of its positions).
    #[must_use]
    pub fn candidates(&self, session: &GameSession) -> Vec<&'a str> {
        let masked = session.masked();
        let attempted = session.attempted_letters();

        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| {
                word.chars().count() == masked.len()
                    && word.chars().zip(&masked).all(|(letter, slot)| match slot {
                        Some(revealed) => letter == *revealed,
                        None => !attempted.contains(&letter),
                    })
            })
            .collect()
    }
}

impl Guesser for FrequencyGuesser<'_> {
    fn next_letter(&self, session: &GameSession) -> Option<char> {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();

        for word in self.candidates(session) {
            let distinct: FxHashSet<char> = word
                .chars()
                .filter(|&letter| !session.is_already_attempted(letter))
                .collect();
            for letter in distinct {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        // Most common first, alphabetical on ties
        let best = counts
            .into_iter()
            .max_by_key(|&(letter, count)| (count, Reverse(letter)))
            .map(|(letter, _)| letter);

        best.or_else(|| {
            ENGLISH_ORDER
                .chars()
                .chain(ALPHABET.chars())
                .find(|&letter| !session.is_already_attempted(letter))
        })
    }
}
