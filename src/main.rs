//! Hangman - CLI
//!
//! Hangman with TUI and console modes, plus a benchmark for the automatic
//! guessers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_benchmark, run_simple},
    manager::DEFAULT_MAX_ERRORS,
    output::print_benchmark_result,
    solver::GuesserType,
    wordlists::Dictionary,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word-guessing game (TUI, console and automatic benchmark)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wrong guesses allowed before the game is lost
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ERRORS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_errors: u32,

    /// Wordlist: 'default' (embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Let an automatic guesser play every dictionary word
    Benchmark {
        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,

        /// Guesser: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins over `--log-level`. The TUI owns the terminal, so logs
/// there should go to a file.
fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Load the dictionary selected by the -w flag
///
/// - "default": the embedded word list
/// - "<path>": words read from a file, one per line
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    if wordlist == "default" {
        return Ok(Dictionary::embedded());
    }

    let mut dictionary = Dictionary::new();
    dictionary
        .load_from_file(wordlist)
        .with_context(|| format!("cannot load word list {wordlist}"))?;
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let dictionary = load_dictionary(&cli.wordlist)?;
    info!(words = dictionary.count(), "Dictionary ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.max_errors),
        Commands::Simple => run_simple(&dictionary, cli.max_errors),
        Commands::Benchmark { limit, strategy } => {
            run_benchmark_command(&dictionary, cli.max_errors, limit, &strategy)
        }
    }
}

fn run_play_command(dictionary: &Dictionary, max_errors: u32) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(dictionary, max_errors)?;
    run_tui(app)
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    max_errors: u32,
    limit: Option<usize>,
    strategy_name: &str,
) -> Result<()> {
    let words = dictionary.words();
    let guesser = GuesserType::from_name(strategy_name, words);

    let count = limit.map_or(words.len(), |limit| limit.min(words.len()));
    println!(
        "Running {} benchmark on {count} words ({max_errors} errors allowed)...",
        guesser.name()
    );

    let result = run_benchmark(&guesser, guesser.name(), words, max_errors, limit)?;
    print_benchmark_result(&result);
    Ok(())
}
