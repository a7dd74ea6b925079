//! Display functions for game state and command results

use super::Gallows;
use super::formatters::{create_progress_bar, error_bar, format_letters};
use crate::commands::BenchmarkResult;
use crate::core::{GameSession, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

const SEPARATOR: &str = "========================================";

/// Print the gallows, the word and the attempted letters of a running game
///
/// # Errors
/// Returns any error raised while writing to `out`.
pub fn print_game_state<W: Write>(
    out: &mut W,
    session: &GameSession,
    gallows: Gallows,
) -> io::Result<()> {
    writeln!(out, "\n{SEPARATOR}")?;
    writeln!(out, "{}", gallows.render(session.error_count()))?;
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "\nWord:   {}", session.display_form().bright_white().bold())?;
    writeln!(
        out,
        "Errors: {}/{} [{}]",
        session.error_count(),
        session.max_errors(),
        error_bar(session.error_count(), session.max_errors(), 12).red()
    )?;

    let attempted = session.attempted_letters();
    if !attempted.is_empty() {
        writeln!(out, "Letters tried: {}", format_letters(&attempted))?;
    }
    Ok(())
}

/// Print the final drawing, the outcome and the secret word
///
/// # Errors
/// Returns any error raised while writing to `out`.
pub fn print_game_summary<W: Write>(
    out: &mut W,
    session: &GameSession,
    gallows: Gallows,
) -> io::Result<()> {
    writeln!(out, "\n{SEPARATOR}")?;
    writeln!(out, "{}", gallows.render(session.error_count()))?;
    writeln!(out, "{SEPARATOR}")?;

    match session.status() {
        GameStatus::Won => {
            writeln!(out, "\n{}", "🎉 CONGRATULATIONS! You won!".green().bold())?;
            writeln!(out, "The word was: {}", session.revealed_word().bright_yellow())?;
            writeln!(
                out,
                "Errors: {}/{}",
                session.error_count(),
                session.max_errors()
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "\n{}", "💀 LOST! The hangman is complete...".red().bold())?;
            writeln!(out, "The word was: {}", session.revealed_word().bright_yellow())?;
        }
        GameStatus::InProgress => {
            writeln!(out, "\nGame still in progress: {}", session.display_form())?;
        }
    }
    Ok(())
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Error budget:     {}", result.max_errors);
    println!("   Words played:     {}", result.total_games);
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average errors:   {:.2} (won games)", result.average_errors);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.won > 0 {
        println!("\n📈 {}", "Errors in won games:".bright_cyan().bold());
        for (errors, &count) in &result.error_distribution {
            let pct = (count as f64 / result.won as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {errors:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest_words.is_empty() {
        println!("\n💀 {}", "Lost words:".bright_cyan().bold());
        for word in &result.hardest_words {
            println!("   • {}", word.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(print: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn state_shows_word_errors_and_letters() {
        let mut session = GameSession::new("JAVA", 6).unwrap();
        session.propose_letter('A').unwrap();
        session.propose_letter('Z').unwrap();

        let text = render(|out| print_game_state(out, &session, Gallows::new(6)));
        assert!(text.contains("Word:   _ A _ A"));
        assert!(text.contains("Errors: 1/6"));
        assert!(text.contains("Letters tried: A, Z"));
        assert!(text.contains("  O   |"));
    }

    #[test]
    fn state_without_attempts_hides_letters() {
        let session = GameSession::new("JAVA", 6).unwrap();
        let text = render(|out| print_game_state(out, &session, Gallows::new(6)));
        assert!(!text.contains("Letters tried"));
    }

    #[test]
    fn summary_for_won_game() {
        let mut session = GameSession::new("AB", 6).unwrap();
        session.propose_letter('A').unwrap();
        session.propose_letter('B').unwrap();

        let text = render(|out| print_game_summary(out, &session, Gallows::new(6)));
        assert!(text.contains("You won"));
        assert!(text.contains("The word was: AB"));
    }

    #[test]
    fn summary_for_lost_game() {
        let mut session = GameSession::new("AB", 1).unwrap();
        session.propose_letter('Z').unwrap();

        let text = render(|out| print_game_summary(out, &session, Gallows::new(1)));
        assert!(text.contains("LOST"));
        assert!(text.contains("The word was: AB"));
    }
}
