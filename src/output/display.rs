//! Display functions for command results

use super::formatters::{attempts_label, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Verdict;
use colored::Colorize;

/// Print the result of solving a target
pub fn print_solve_result(result: &SolveResult, strategy_name: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (strategy: {})",
        result.target.to_string().bright_yellow().bold(),
        strategy_name
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let verdict = match step.verdict {
            Verdict::TooLow => step.verdict.to_string().yellow(),
            Verdict::TooHigh => step.verdict.to_string().magenta(),
            Verdict::Correct => step.verdict.to_string().green().bold(),
        };
        println!(
            "Turn {:>3}: {:>4}  {:<9} candidates {} → {}",
            i + 1,
            step.guess,
            verdict,
            step.candidates_before,
            step.candidates_after
        );
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {}!", attempts_label(result.attempts()))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {}", attempts_label(result.attempts()))
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, strategy_name: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        strategy_name
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Targets tested:   {}", result.total_targets);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Targets/second:   {:.1}", result.targets_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rows: Vec<(u32, usize)> = result
        .distribution
        .iter()
        .map(|(&attempts, &count)| (attempts, count))
        .collect();
    rows.sort_unstable();

    for (attempts, count) in rows {
        let pct = (count as f64 / result.total_targets as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the reveal after the player gives up
pub fn print_quit(attempts: u32, target: u32) {
    println!(
        "\nThe number was {}. You gave up after {}.",
        target.to_string().bright_yellow().bold(),
        attempts_label(attempts)
    );
    println!("👋 Thanks for playing!\n");
}
