//! Hangman
//!
//! A word-guessing game engine with a console front-end, a terminal UI and
//! an automatic guesser benchmark.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GameStatus};
//!
//! let mut game = GameSession::new("java", 6).unwrap();
//!
//! assert!(game.propose_letter('a').unwrap());
//! assert_eq!(game.display_form(), "_ A _ A");
//!
//! game.propose_letter('j').unwrap();
//! game.propose_letter('v').unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session lifecycle and word sources
pub mod manager;

// Word lists
pub mod wordlists;

// Automatic guessers
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
