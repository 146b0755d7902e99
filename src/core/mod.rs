//! Core domain types for the guessing game
//!
//! Pure value types with no I/O: the range targets are drawn from, a parsed
//! guess, and the verdict for a guess.

mod guess;
mod range;
mod verdict;

pub use guess::{Guess, GuessError};
pub use range::GuessRange;
pub use verdict::Verdict;
