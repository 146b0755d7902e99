//! Game engine
//!
//! Owns the hidden target and the attempt counter, and draws targets from an
//! injected random source.

mod engine;
mod source;

pub use engine::{Game, GameError, GameState};
pub use source::{rng_from_seed, time_seed};
