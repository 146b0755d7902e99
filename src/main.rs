//! Guess the Number - CLI
//!
//! Interactive guessing game, plus automatic solve and benchmark modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use guessing_game::{
    commands::{PlayOutcome, SolveConfig, run_benchmark, run_interactive, solve_target},
    core::GuessRange,
    logging,
    output::{print_benchmark_result, print_quit, print_solve_result},
    solver::{Solver, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "guessing_game",
    about = "Guess the number between 1 and 100",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver strategy: bisect (default), random, linear
    #[arg(short, long, global = true, default_value = "bisect")]
    strategy: String,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively (default)
    Play {
        /// Fix the random seed to replay the same number
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the solver find a specific number
    Solve {
        /// The number to find (1-100)
        target: u32,
    },

    /// Run the solver against every number from 1 to 100
    Benchmark {
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("failed to install logger")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play_command(seed),
        Commands::Solve { target } => run_solve_command(&cli.strategy, target),
        Commands::Benchmark { no_progress } => {
            run_benchmark_command(&cli.strategy, !no_progress);
            Ok(())
        }
    }
}

fn run_play_command(seed: Option<u64>) -> Result<()> {
    match run_interactive(seed)? {
        PlayOutcome::Won { attempts } => {
            log::info!("won after {attempts} attempts");
        }
        PlayOutcome::Quit { attempts, target } => print_quit(attempts, target),
    }
    Ok(())
}

fn run_solve_command(strategy_name: &str, target: u32) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, GuessRange::STANDARD);
    let result = solve_target(SolveConfig::new(target), &solver)?;

    print_solve_result(&result, strategy.name());
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, show_progress: bool) {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, GuessRange::STANDARD);

    println!(
        "Running benchmark on every number in {} with {}...",
        GuessRange::STANDARD,
        strategy.name()
    );
    let result = run_benchmark(&solver, show_progress);
    print_benchmark_result(&result, strategy.name());
}
