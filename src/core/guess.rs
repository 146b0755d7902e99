//! A single player guess and how it is read from text

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A whole number submitted by the player
///
/// Any value that parses is a valid guess; values outside the game's range
/// are simply too low or too high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guess(i64);

/// Error type for input that is not a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a number.")]
    Empty,
    #[error("'{0}' is not a whole number. Try again.")]
    NotANumber(String),
}

impl Guess {
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Parse one line of player input
    ///
    /// Surrounding whitespace is ignored and a leading `+` or `-` is allowed.
    ///
    /// # Errors
    /// Returns `GuessError::Empty` for a blank line and
    /// `GuessError::NotANumber` for anything that is not a whole number
    /// representable as `i64`.
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{Guess, GuessError};
    ///
    /// assert_eq!(Guess::parse(" 42\n").unwrap().value(), 42);
    /// assert_eq!(Guess::parse(""), Err(GuessError::Empty));
    /// assert!(Guess::parse("forty").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(GuessError::Empty);
        }

        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| GuessError::NotANumber(trimmed.to_string()))
    }
}

impl From<u32> for Guess {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_number() {
        assert_eq!(Guess::parse("50"), Ok(Guess::new(50)));
    }

    #[test]
    fn parse_trims_whitespace_and_newline() {
        assert_eq!(Guess::parse("  7 \r\n"), Ok(Guess::new(7)));
    }

    #[test]
    fn parse_accepts_signs_and_out_of_range_values() {
        assert_eq!(Guess::parse("-12"), Ok(Guess::new(-12)));
        assert_eq!(Guess::parse("+3"), Ok(Guess::new(3)));
        assert_eq!(Guess::parse("1000"), Ok(Guess::new(1000)));
    }

    #[test]
    fn parse_empty_line() {
        assert_eq!(Guess::parse(""), Err(GuessError::Empty));
        assert_eq!(Guess::parse("   \n"), Err(GuessError::Empty));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert_eq!(
            Guess::parse("abc"),
            Err(GuessError::NotANumber("abc".to_string()))
        );
        assert!(Guess::parse("4.5").is_err());
        assert!(Guess::parse("12abc").is_err());
        assert!(Guess::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn error_messages_quote_input() {
        let err = Guess::parse(" twelve ").unwrap_err();
        assert_eq!(err.to_string(), "'twelve' is not a whole number. Try again.");
        assert_eq!(GuessError::Empty.to_string(), "Please enter a number.");
    }

    #[test]
    fn from_str_matches_parse() {
        let guess: Guess = "88".parse().unwrap();
        assert_eq!(guess, Guess::from(88));
    }

    #[test]
    fn display_shows_value() {
        assert_eq!(Guess::new(-4).to_string(), "-4");
        assert_eq!(format!("{:>4}", Guess::new(7)), "   7");
    }
}
