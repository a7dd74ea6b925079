//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkResult, WordGameResult, play_word, run_benchmark};
pub use simple::{ConsoleGame, run_simple};
