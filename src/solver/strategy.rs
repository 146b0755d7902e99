//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::GuessRange;

/// A strategy for picking the next number to try
pub trait Strategy {
    /// Select a guess from the targets still possible
    ///
    /// The returned value is always contained in `candidates`.
    fn select_guess(&self, candidates: GuessRange) -> u32;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Binary search (default, at most 7 attempts on 1-100)
    Bisect(BisectStrategy),
    /// Uniform pick among the candidates
    Random(RandomStrategy),
    /// Count up from the smallest candidate
    Linear(LinearStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: GuessRange) -> u32 {
        match self {
            Self::Bisect(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
            Self::Linear(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "bisect", "binary", "random", "linear"
    /// Defaults to bisect if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "linear" => Self::Linear(LinearStrategy),
            "bisect" | "binary" => Self::Bisect(BisectStrategy),
            other => {
                log::warn!("unknown strategy '{other}', using bisect");
                Self::Bisect(BisectStrategy)
            }
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bisect(_) => "bisect",
            Self::Random(_) => "random",
            Self::Linear(_) => "linear",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Bisect(BisectStrategy)
    }
}

/// Binary search strategy
///
/// Always guesses the midpoint, rounding down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BisectStrategy;

impl Strategy for BisectStrategy {
    fn select_guess(&self, candidates: GuessRange) -> u32 {
        candidates.min() + (candidates.max() - candidates.min()) / 2
    }
}

/// Random strategy
///
/// Picks any remaining candidate with equal probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, candidates: GuessRange) -> u32 {
        use rand::Rng;

        rand::rng().random_range(candidates.min()..=candidates.max())
    }
}

/// Linear strategy
///
/// Guesses the smallest remaining candidate. Worst case tries every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearStrategy;

impl Strategy for LinearStrategy {
    fn select_guess(&self, candidates: GuessRange) -> u32 {
        candidates.min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: u32, max: u32) -> GuessRange {
        GuessRange::new(min, max).unwrap()
    }

    #[test]
    fn bisect_picks_midpoint() {
        let strategy = BisectStrategy;
        assert_eq!(strategy.select_guess(GuessRange::STANDARD), 50);
        assert_eq!(strategy.select_guess(range(51, 100)), 75);
        assert_eq!(strategy.select_guess(range(98, 100)), 99);
        assert_eq!(strategy.select_guess(range(100, 100)), 100);
    }

    #[test]
    fn bisect_does_not_overflow_at_top_of_u32() {
        let strategy = BisectStrategy;
        let top = range(u32::MAX - 1, u32::MAX);
        assert_eq!(strategy.select_guess(top), u32::MAX - 1);
    }

    #[test]
    fn random_stays_within_candidates() {
        let strategy = RandomStrategy;
        let candidates = range(20, 25);
        for _ in 0..200 {
            assert!(candidates.contains(strategy.select_guess(candidates)));
        }
    }

    #[test]
    fn random_single_candidate() {
        assert_eq!(RandomStrategy.select_guess(range(9, 9)), 9);
    }

    #[test]
    fn linear_picks_smallest() {
        assert_eq!(LinearStrategy.select_guess(range(37, 90)), 37);
    }

    #[test]
    fn from_name_known_names() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("linear").name(), "linear");
        assert_eq!(StrategyType::from_name("binary").name(), "bisect");
        assert_eq!(StrategyType::from_name("bisect").name(), "bisect");
    }

    #[test]
    fn from_name_unknown_defaults_to_bisect() {
        assert_eq!(
            StrategyType::from_name("telepathy"),
            StrategyType::default()
        );
    }

    #[test]
    fn enum_dispatches_to_inner_strategy() {
        let candidates = range(10, 20);
        assert_eq!(StrategyType::from_name("linear").select_guess(candidates), 10);
        assert_eq!(StrategyType::from_name("bisect").select_guess(candidates), 15);
    }
}
