//! Message text for terminal output
//!
//! Plain strings only; coloring happens where they are printed.

use crate::core::{GuessRange, Verdict};

/// Greeting shown once when a game starts
pub const WELCOME: &str = "Welcome to the Guess the Number game!";

/// Prompt shown before every guess
#[must_use]
pub fn prompt(range: GuessRange) -> String {
    format!("Enter your guess ({range}): ")
}

/// "1 attempt", "3 attempts"
#[must_use]
pub fn attempts_label(attempts: u32) -> String {
    if attempts == 1 {
        "1 attempt".to_string()
    } else {
        format!("{attempts} attempts")
    }
}

/// Feedback line for a verdict, `attempts` including the guess just made
#[must_use]
pub fn verdict_message(verdict: Verdict, attempts: u32) -> String {
    match verdict {
        Verdict::TooLow => "Too low! Try again.".to_string(),
        Verdict::TooHigh => "Too high! Try again.".to_string(),
        Verdict::Correct => format!(
            "Congratulations! You guessed the number in {}.",
            attempts_label(attempts)
        ),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
