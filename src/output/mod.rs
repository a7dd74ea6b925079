//! Terminal output formatting
//!
//! Gallows drawing, display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
mod gallows;

pub use display::{print_benchmark_result, print_game_state, print_game_summary};
pub use gallows::Gallows;
