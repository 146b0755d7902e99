//! Benchmark command
//!
//! Solves every target in the range and collects attempt statistics.

use super::solve::{SolveConfig, solve_target};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_targets: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_attempts: u64,
    pub average_attempts: f64,
    pub min_attempts: u32,
    pub max_attempts: u32,
    /// Attempts needed → number of targets solved in exactly that many
    pub distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
    pub targets_per_second: f64,
}

/// Run the solver against every target in its range
///
/// Targets are solved in parallel. `show_progress` draws a progress bar on
/// stderr.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    show_progress: bool,
) -> BenchmarkResult {
    let range = solver.range();
    let targets: Vec<u32> = range.iter().collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message("Solving...");

    let start = Instant::now();

    let attempts: Vec<Option<u32>> = targets
        .par_iter()
        .map(|&target| {
            let config = SolveConfig::new(target).with_max_attempts(range.len());
            let outcome = match solve_target(config, solver) {
                Ok(result) if result.success => Some(result.attempts()),
                Ok(result) => {
                    log::warn!(
                        "target {target} unsolved after {} attempts",
                        result.attempts()
                    );
                    None
                }
                Err(e) => {
                    log::warn!("target {target} failed: {e}");
                    None
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut total_attempts = 0_u64;
    let mut min_attempts = u32::MAX;
    let mut max_attempts = 0;

    for &count in attempts.iter().flatten() {
        total_attempts += u64::from(count);
        min_attempts = min_attempts.min(count);
        max_attempts = max_attempts.max(count);
        *distribution.entry(count).or_insert(0) += 1;
    }

    let total_targets = targets.len();
    let solved = distribution.values().sum::<usize>();
    if solved == 0 {
        min_attempts = 0;
    }

    log::info!(
        "benchmarked {total_targets} targets in {:.3}s",
        duration.as_secs_f64()
    );

    BenchmarkResult {
        total_targets,
        solved,
        failed: total_targets - solved,
        total_attempts,
        average_attempts: if solved == 0 {
            0.0
        } else {
            total_attempts as f64 / solved as f64
        },
        min_attempts,
        max_attempts,
        distribution,
        duration,
        targets_per_second: total_targets as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRange;
    use crate::solver::{BisectStrategy, LinearStrategy, RandomStrategy};

    #[test]
    fn bisect_never_needs_more_than_seven() {
        let solver = Solver::new(BisectStrategy, GuessRange::STANDARD);
        let result = run_benchmark(&solver, false);

        assert_eq!(result.total_targets, 100);
        assert_eq!(result.solved, 100);
        assert_eq!(result.failed, 0);
        assert_eq!(result.min_attempts, 1);
        assert_eq!(result.max_attempts, 7);
    }

    #[test]
    fn bisect_distribution_is_exact() {
        let solver = Solver::new(BisectStrategy, GuessRange::STANDARD);
        let result = run_benchmark(&solver, false);

        let expected = [(1, 1), (2, 2), (3, 4), (4, 8), (5, 16), (6, 32), (7, 37)];
        for (attempts, count) in expected {
            assert_eq!(result.distribution.get(&attempts), Some(&count));
        }
        assert_eq!(result.distribution.len(), expected.len());
    }

    #[test]
    fn linear_average_is_midpoint() {
        let solver = Solver::new(LinearStrategy, GuessRange::STANDARD);
        let result = run_benchmark(&solver, false);

        assert_eq!(result.total_attempts, 5050);
        assert!((result.average_attempts - 50.5).abs() < f64::EPSILON);
        assert_eq!(result.max_attempts, 100);
    }

    #[test]
    fn distribution_sums_to_targets() {
        let solver = Solver::new(RandomStrategy, GuessRange::STANDARD);
        let result = run_benchmark(&solver, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_targets);
        assert!(result.average_attempts >= f64::from(result.min_attempts));
        assert!(result.average_attempts <= f64::from(result.max_attempts));
    }

    #[test]
    fn small_range() {
        let range = GuessRange::new(1, 3).unwrap();
        let solver = Solver::new(BisectStrategy, range);
        let result = run_benchmark(&solver, false);

        assert_eq!(result.total_targets, 3);
        assert_eq!(result.total_attempts, 5);
        assert_eq!(result.max_attempts, 2);
    }
}
