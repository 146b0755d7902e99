//! Terminal output formatting
//!
//! Message text and pretty-printing for command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_quit, print_solve_result};
