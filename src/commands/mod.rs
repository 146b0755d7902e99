//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayError, PlayOutcome, run_interactive, run_play};
pub use solve::{SolveConfig, SolveError, SolveResult, SolveStep, solve_target};
