//! Benchmark command
//!
//! Lets an automatic guesser play every dictionary word and reports how
//! often it survives the error budget.

use crate::core::{GameError, GameSession, GameStatus};
use crate::solver::Guesser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Number of lost words kept in the result
const HARDEST_WORDS_SHOWN: usize = 10;

/// Result of playing a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGameResult {
    pub word: String,
    pub status: GameStatus,
    pub errors: u32,
    pub letters_tried: usize,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub max_errors: u32,
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub average_errors: f64,
    pub error_distribution: BTreeMap<u32, usize>,
    pub hardest_words: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game to the end with `guesser`
///
/// A game the guesser gives up on (no letter left) keeps its
/// in-progress status.
///
/// # Errors
/// Returns an error if the session cannot be created for `word`.
pub fn play_word<G: Guesser + ?Sized>(
    guesser: &G,
    word: &str,
    max_errors: u32,
) -> Result<WordGameResult, GameError> {
    let mut session = GameSession::new(word, max_errors)?;

    while !session.status().is_terminal() {
        let Some(letter) = guesser.next_letter(&session) else {
            break;
        };
        session.propose_letter(letter)?;
    }

    Ok(WordGameResult {
        word: session.revealed_word().to_string(),
        status: session.status(),
        errors: session.error_count(),
        letters_tried: session.attempted_letters().len(),
    })
}

/// Run the guesser over `words` (or the first `limit` of them) in parallel
///
/// # Errors
/// Returns an error if a word cannot be played (empty word or zero budget).
pub fn run_benchmark<G: Guesser + Sync + ?Sized>(
    guesser: &G,
    strategy: &str,
    words: &[String],
    max_errors: u32,
    limit: Option<usize>,
) -> Result<BenchmarkResult, GameError> {
    let test_words = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let pb = ProgressBar::new(test_words.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let results = test_words
        .par_iter()
        .map(|word| {
            let result = play_word(guesser, word, max_errors);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let result = summarize(strategy, max_errors, &results, start.elapsed());
    debug!(
        games = result.total_games,
        won = result.won,
        "Benchmark finished"
    );
    Ok(result)
}

/// Aggregate individual game results
#[must_use]
pub fn summarize(
    strategy: &str,
    max_errors: u32,
    results: &[WordGameResult],
    duration: Duration,
) -> BenchmarkResult {
    let total_games = results.len();
    let won_games: Vec<&WordGameResult> = results
        .iter()
        .filter(|r| r.status == GameStatus::Won)
        .collect();
    let won = won_games.len();

    let mut error_distribution = BTreeMap::new();
    for game in &won_games {
        *error_distribution.entry(game.errors).or_insert(0) += 1;
    }

    let average_errors = if won > 0 {
        won_games.iter().map(|r| f64::from(r.errors)).sum::<f64>() / won as f64
    } else {
        0.0
    };

    let mut hardest_words: Vec<String> = results
        .iter()
        .filter(|r| r.status != GameStatus::Won)
        .map(|r| r.word.clone())
        .collect();
    hardest_words.sort();
    hardest_words.truncate(HARDEST_WORDS_SHOWN);

    let win_rate = if total_games > 0 {
        won as f64 / total_games as f64
    } else {
        0.0
    };

    let secs = duration.as_secs_f64();
    let games_per_second = if secs > 0.0 {
        total_games as f64 / secs
    } else {
        0.0
    };

    BenchmarkResult {
        strategy: strategy.to_string(),
        max_errors,
        total_games,
        won,
        lost: total_games - won,
        win_rate,
        average_errors,
        error_distribution,
        hardest_words,
        duration,
        games_per_second,
    }
}
