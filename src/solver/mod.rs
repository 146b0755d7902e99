//! Automatic guessing
//!
//! A solver keeps the range of targets still consistent with the feedback
//! and asks a strategy which of them to try next.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{BisectStrategy, LinearStrategy, RandomStrategy, Strategy, StrategyType};
