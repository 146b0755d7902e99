//! The game state machine

use crate::core::{Guess, GuessRange, Verdict};
use rand::Rng;
use thiserror::Error;

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next guess (initial state)
    AwaitingGuess,
    /// The target was guessed; no further guesses are accepted
    Won,
}

/// Errors raised by the game itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("target {target} is outside the range {range}")]
    TargetOutOfRange { target: u32, range: GuessRange },
    #[error("the game is already won")]
    AlreadyWon,
}

/// One game: a hidden target and the number of attempts made so far
///
/// The target never changes after construction. `attempts` counts every
/// accepted guess including the winning one.
#[derive(Debug, Clone)]
pub struct Game {
    range: GuessRange,
    target: u32,
    attempts: u32,
    state: GameState,
}

impl Game {
    /// Start a game with a known target
    ///
    /// # Errors
    /// Returns `GameError::TargetOutOfRange` if `target` is not in `range`.
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{Guess, GuessRange, Verdict};
    /// use guessing_game::game::Game;
    ///
    /// let mut game = Game::new(GuessRange::STANDARD, 50).unwrap();
    /// assert_eq!(game.submit(Guess::new(10)).unwrap(), Verdict::TooLow);
    /// assert_eq!(game.submit(Guess::new(50)).unwrap(), Verdict::Correct);
    /// assert_eq!(game.attempts(), 2);
    /// assert!(game.is_won());
    /// ```
    pub const fn new(range: GuessRange, target: u32) -> Result<Self, GameError> {
        if !range.contains(target) {
            return Err(GameError::TargetOutOfRange { target, range });
        }

        Ok(Self {
            range,
            target,
            attempts: 0,
            state: GameState::AwaitingGuess,
        })
    }

    /// Start a game with a target drawn uniformly from `range`
    pub fn random<R: Rng>(range: GuessRange, rng: &mut R) -> Self {
        let target = rng.random_range(range.min()..=range.max());
        log::trace!("target drawn: {target}");

        Self {
            range,
            target,
            attempts: 0,
            state: GameState::AwaitingGuess,
        }
    }

    /// Submit a guess and get the verdict
    ///
    /// Every accepted guess counts as one attempt. A correct guess moves the
    /// game to `GameState::Won`.
    ///
    /// # Errors
    /// Returns `GameError::AlreadyWon` once the game has ended; the attempt
    /// count is left untouched.
    pub fn submit(&mut self, guess: Guess) -> Result<Verdict, GameError> {
        if self.state == GameState::Won {
            return Err(GameError::AlreadyWon);
        }

        self.attempts += 1;
        let verdict = Verdict::calculate(guess, self.target);
        if verdict.is_correct() {
            self.state = GameState::Won;
        }

        log::debug!("attempt {}: {guess} is {verdict}", self.attempts);
        Ok(verdict)
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    /// The hidden number; only meant to be revealed once play is over
    #[inline]
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    #[inline]
    #[must_use]
    pub const fn range(&self) -> GuessRange {
        self.range
    }
}
