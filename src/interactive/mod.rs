//! Interactive TUI mode
//!
//! Full-screen hangman built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, Statistics, run_tui};
pub use rendering::ui;
