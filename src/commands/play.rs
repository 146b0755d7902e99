//! Interactive play mode
//!
//! The read-evaluate loop over any input and output stream. The binary wires
//! it to stdin and stdout; tests feed it in-memory buffers.

use crate::core::{Guess, GuessRange};
use crate::game::{Game, GameError, rng_from_seed};
use crate::output::formatters::{WELCOME, prompt, verdict_message};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Words that end the session without a win
const QUIT_COMMANDS: [&str; 3] = ["quit", "q", "exit"];

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The target was guessed
    Won { attempts: u32 },
    /// The player gave up
    Quit { attempts: u32, target: u32 },
}

/// Errors that end an interactive session early
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("failed to talk to the terminal: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before the number was guessed ({attempts} attempts made)")]
    InputClosed { attempts: u32 },
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Run the guessing loop until the target is guessed
///
/// Lines that are not whole numbers are answered with a hint and do not
/// count as attempts. Entering `quit`, `q` or `exit` ends the session.
///
/// # Errors
///
/// Returns `PlayError::InputClosed` if input ends before a win,
/// `PlayError::Io` if reading or writing fails, and `PlayError::Game` if
/// the game was already won.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    output: &mut W,
) -> Result<PlayOutcome, PlayError> {
    writeln!(output, "{}", WELCOME.bright_cyan().bold())?;
    writeln!(
        output,
        "I'm thinking of a number between {} and {}. Type 'quit' to give up.\n",
        game.range().min(),
        game.range().max()
    )?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt(game.range()))?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Err(PlayError::InputClosed {
                attempts: game.attempts(),
            });
        }

        let entry = line.trim();
        if QUIT_COMMANDS.contains(&entry.to_lowercase().as_str()) {
            return Ok(PlayOutcome::Quit {
                attempts: game.attempts(),
                target: game.target(),
            });
        }

        let guess = match Guess::parse(entry) {
            Ok(guess) => guess,
            Err(e) => {
                log::debug!("rejected input {entry:?}: {e}");
                writeln!(output, "{}", e.to_string().red())?;
                continue;
            }
        };

        let verdict = game.submit(guess)?;
        let message = verdict_message(verdict, game.attempts());

        if verdict.is_correct() {
            writeln!(output, "{}", message.bright_green().bold())?;
            return Ok(PlayOutcome::Won {
                attempts: game.attempts(),
            });
        }

        writeln!(output, "{}", message.yellow())?;
    }
}

/// Play one game on stdin/stdout with a freshly drawn target
///
/// `seed` fixes the random source; `None` seeds it from the clock.
///
/// # Errors
///
/// See [`run_play`].
pub fn run_interactive(seed: Option<u64>) -> Result<PlayOutcome, PlayError> {
    let (mut rng, seed) = rng_from_seed(seed);
    log::info!("starting game with seed {seed}");

    let mut game = Game::random(GuessRange::STANDARD, &mut rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut game, stdin.lock(), &mut stdout)
}
