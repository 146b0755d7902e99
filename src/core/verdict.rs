//! Feedback for a guess compared with the target

use super::Guess;
use std::cmp::Ordering;
use std::fmt;

/// The answer given to a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Guess is below the target
    TooLow,
    /// Guess is above the target
    TooHigh,
    /// Guess equals the target
    Correct,
}

impl Verdict {
    /// Compare `guess` with `target`
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{Guess, Verdict};
    ///
    /// assert_eq!(Verdict::calculate(Guess::new(10), 50), Verdict::TooLow);
    /// assert_eq!(Verdict::calculate(Guess::new(90), 50), Verdict::TooHigh);
    /// assert_eq!(Verdict::calculate(Guess::new(50), 50), Verdict::Correct);
    /// ```
    #[must_use]
    pub fn calculate(guess: Guess, target: u32) -> Self {
        match guess.value().cmp(&i64::from(target)) {
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal => Self::Correct,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TooLow => "too low",
            Self::TooHigh => "too high",
            Self::Correct => "correct",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_orders_guess_against_target() {
        assert_eq!(Verdict::calculate(Guess::new(1), 2), Verdict::TooLow);
        assert_eq!(Verdict::calculate(Guess::new(3), 2), Verdict::TooHigh);
        assert_eq!(Verdict::calculate(Guess::new(2), 2), Verdict::Correct);
    }

    #[test]
    fn calculate_handles_extreme_guesses() {
        assert_eq!(Verdict::calculate(Guess::new(i64::MIN), 1), Verdict::TooLow);
        assert_eq!(Verdict::calculate(Guess::new(i64::MAX), 100), Verdict::TooHigh);
    }

    #[test]
    fn only_correct_is_correct() {
        assert!(Verdict::Correct.is_correct());
        assert!(!Verdict::TooLow.is_correct());
        assert!(!Verdict::TooHigh.is_correct());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Verdict::TooLow.to_string(), "too low");
        assert_eq!(Verdict::TooHigh.to_string(), "too high");
    }
}
