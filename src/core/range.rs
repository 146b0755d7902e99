//! Inclusive range of possible target numbers
//!
//! The same type describes the game's fixed range and the shrinking set of
//! targets a solver still considers possible.

use super::{Guess, Verdict};
use std::fmt;

/// A non-empty inclusive range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRange {
    min: u32,
    max: u32,
}

impl GuessRange {
    /// The range every game is played in: 1 to 100 inclusive
    pub const STANDARD: Self = Self { min: 1, max: 100 };

    /// Create a range, returning `None` if `min > max`
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::GuessRange;
    ///
    /// let range = GuessRange::new(1, 10).unwrap();
    /// assert_eq!(range.len(), 10);
    /// assert!(GuessRange::new(5, 4).is_none());
    /// ```
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    #[inline]
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Number of values in the range (never zero)
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.max - self.min + 1
    }

    /// Always false; present to pair with `len`
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether a (possibly negative or huge) guess falls inside the range
    #[inline]
    #[must_use]
    pub fn contains_guess(self, guess: Guess) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&guess.value())
    }

    /// Iterate over every value in the range in ascending order
    pub fn iter(self) -> impl Iterator<Item = u32> {
        self.min..=self.max
    }

    /// Shrink the range to the values consistent with `verdict` for `guess`
    ///
    /// Returns `None` when no value in the range is consistent, which means
    /// the feedback contradicts earlier feedback.
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{Guess, GuessRange, Verdict};
    ///
    /// let range = GuessRange::STANDARD.narrow(Guess::new(50), Verdict::TooLow).unwrap();
    /// assert_eq!((range.min(), range.max()), (51, 100));
    ///
    /// assert!(range.narrow(Guess::new(51), Verdict::TooHigh).is_none());
    /// ```
    #[must_use]
    pub fn narrow(self, guess: Guess, verdict: Verdict) -> Option<Self> {
        let value = guess.value();
        let (min, max) = match verdict {
            // Target is above the guess
            Verdict::TooLow => (
                i64::from(self.min).max(value.saturating_add(1)),
                i64::from(self.max),
            ),
            // Target is below the guess
            Verdict::TooHigh => (
                i64::from(self.min),
                i64::from(self.max).min(value.saturating_sub(1)),
            ),
            Verdict::Correct => (value, value),
        };

        if min > max
            || !self.contains_guess(Guess::new(min))
            || !self.contains_guess(Guess::new(max))
        {
            return None;
        }

        Self::new(u32::try_from(min).ok()?, u32::try_from(max).ok()?)
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
