//! Target solving command
//!
//! Plays one game against a known target and returns the solution path.

use crate::core::{Guess, GuessRange, Verdict};
use crate::game::{Game, GameError};
use crate::solver::{Solver, Strategy};
use thiserror::Error;

/// Configuration for solving a target
pub struct SolveConfig {
    pub target: u32,
    pub max_attempts: u32,
}

impl SolveConfig {
    /// Solve `target` with enough attempts for any strategy on 1-100
    #[must_use]
    pub const fn new(target: u32) -> Self {
        Self {
            target,
            max_attempts: GuessRange::STANDARD.len(),
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Result of solving a target
pub struct SolveResult {
    pub target: u32,
    pub success: bool,
    pub steps: Vec<SolveStep>,
}

impl SolveResult {
    /// Number of guesses made
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.steps.len() as u32
    }
}

/// A single guess in the solution
pub struct SolveStep {
    pub guess: Guess,
    pub verdict: Verdict,
    pub candidates_before: u32,
    pub candidates_after: u32,
}

/// Errors from the solve command
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target: {0}")]
    Game(#[from] GameError),
    #[error("no candidates remain after {attempts} attempts")]
    NoCandidates { attempts: u32 },
}

/// Solve a specific target using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is outside the solver's range
/// - The solver runs out of candidates (contradictory feedback)
pub fn solve_target<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, SolveError> {
    let mut game = Game::new(solver.range(), config.target)?;

    // Build history as we go
    let mut history: Vec<(Guess, Verdict)> = Vec::new();
    let mut steps: Vec<SolveStep> = Vec::new();

    while game.attempts() < config.max_attempts {
        let candidates_before = solver.count_candidates(&history);

        let guess = solver
            .next_guess(&history)
            .ok_or(SolveError::NoCandidates {
                attempts: game.attempts(),
            })?;

        let verdict = game.submit(guess)?;
        history.push((guess, verdict));

        steps.push(SolveStep {
            guess,
            verdict,
            candidates_before,
            candidates_after: solver.count_candidates(&history),
        });

        if verdict.is_correct() {
            break;
        }
    }

    Ok(SolveResult {
        target: config.target,
        success: game.is_won(),
        steps,
    })
}
