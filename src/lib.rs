//! Guess the Number
//!
//! A console game: a number between 1 and 100 is drawn at random and the
//! player guesses until they find it, told "too low" or "too high" each time.
//! Automatic solvers can play the same game for demonstration and benchmarks.
//!
//! # Quick Start
//!
//! ```rust
//! use guessing_game::core::{Guess, GuessRange, Verdict};
//! use guessing_game::game::{Game, rng_from_seed};
//!
//! // Seeded source: the same seed always draws the same target
//! let (mut rng, _seed) = rng_from_seed(Some(42));
//! let mut game = Game::random(GuessRange::STANDARD, &mut rng);
//!
//! let verdict = game.submit(Guess::new(50)).unwrap();
//! assert!(matches!(verdict, Verdict::TooLow | Verdict::TooHigh | Verdict::Correct));
//! assert_eq!(game.attempts(), 1);
//! ```

// Core domain types
pub mod core;

// Game state and target drawing
pub mod game;

// Automatic guessing
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Stderr backend for the log facade
pub mod logging;
