//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Format attempted letters as a comma-separated list, e.g. `A, V, Z`
#[must_use]
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the error budget has been used
#[must_use]
pub fn error_bar(errors: u32, max_errors: u32, width: usize) -> String {
    create_progress_bar(f64::from(errors), f64::from(max_errors), width)
}
