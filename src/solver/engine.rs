//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Guess, GuessRange, Verdict};

/// Automatic player
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
    range: GuessRange,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy for targets in `range`
    pub const fn new(strategy: S, range: GuessRange) -> Self {
        Self { strategy, range }
    }

    #[must_use]
    pub const fn range(&self) -> GuessRange {
        self.range
    }

    /// Get the next guess given previous guesses and verdicts
    ///
    /// # Parameters
    /// - `history`: Slice of (guess, verdict) pairs from previous turns
    ///
    /// Returns the next guess, or None if no candidates remain.
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{Guess, GuessRange, Verdict};
    /// use guessing_game::solver::{BisectStrategy, Solver};
    ///
    /// let solver = Solver::new(BisectStrategy, GuessRange::STANDARD);
    /// assert_eq!(solver.next_guess(&[]), Some(Guess::new(50)));
    ///
    /// let history = [(Guess::new(50), Verdict::TooLow)];
    /// assert_eq!(solver.next_guess(&history), Some(Guess::new(75)));
    /// ```
    pub fn next_guess(&self, history: &[(Guess, Verdict)]) -> Option<Guess> {
        let candidates = self.candidates(history)?;

        // Only one possibility left, no need to ask the strategy
        if candidates.len() == 1 {
            return Some(Guess::from(candidates.min()));
        }

        Some(Guess::from(self.strategy.select_guess(candidates)))
    }

    /// Narrow the full range to the targets consistent with the history
    ///
    /// Returns `None` if the feedback is contradictory.
    pub fn candidates(&self, history: &[(Guess, Verdict)]) -> Option<GuessRange> {
        history
            .iter()
            .try_fold(self.range, |range, &(guess, verdict)| {
                range.narrow(guess, verdict)
            })
    }

    /// Count targets consistent with the history (zero if contradictory)
    pub fn count_candidates(&self, history: &[(Guess, Verdict)]) -> u32 {
        self.candidates(history).map_or(0, GuessRange::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{BisectStrategy, LinearStrategy};

    #[test]
    fn empty_history_uses_full_range() {
        let solver = Solver::new(BisectStrategy, GuessRange::STANDARD);
        assert_eq!(solver.candidates(&[]), Some(GuessRange::STANDARD));
        assert_eq!(solver.count_candidates(&[]), 100);
    }

    #[test]
    fn history_narrows_candidates() {
        let solver = Solver::new(BisectStrategy, GuessRange::STANDARD);
        let history = [
            (Guess::new(10), Verdict::TooLow),
            (Guess::new(90), Verdict::TooHigh),
        ];
        let candidates = solver.candidates(&history).unwrap();
        assert_eq!((candidates.min(), candidates.max()), (11, 89));
        assert_eq!(solver.count_candidates(&history), 79);
    }

    #[test]
    fn contradictory_history_has_no_guess() {
        let solver = Solver::new(BisectStrategy, GuessRange::STANDARD);
        let history = [
            (Guess::new(60), Verdict::TooLow),
            (Guess::new(40), Verdict::TooHigh),
        ];
        assert_eq!(solver.candidates(&history), None);
        assert_eq!(solver.count_candidates(&history), 0);
        assert_eq!(solver.next_guess(&history), None);
    }

    #[test]
    fn single_candidate_is_guessed_directly() {
        let solver = Solver::new(LinearStrategy, GuessRange::STANDARD);
        let history = [
            (Guess::new(41), Verdict::TooLow),
            (Guess::new(43), Verdict::TooHigh),
        ];
        assert_eq!(solver.next_guess(&history), Some(Guess::new(42)));
    }

    #[test]
    fn bisect_path_to_hundred() {
        let solver = Solver::new(BisectStrategy, GuessRange::STANDARD);
        let mut history = Vec::new();
        let mut path = Vec::new();

        while let Some(guess) = solver.next_guess(&history) {
            path.push(guess.value());
            let verdict = Verdict::calculate(guess, 100);
            history.push((guess, verdict));
            if verdict.is_correct() {
                break;
            }
        }

        assert_eq!(path, vec![50, 75, 88, 94, 97, 99, 100]);
    }
}
