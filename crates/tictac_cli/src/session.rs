//! Interactive and scripted play over generic readers and writers.

use crate::config::SessionConfig;
use crate::input::{Input, parse_input};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictac::{Game, Outcome};
use tracing::{debug, info, instrument, warn};

/// How the board is written after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The plain-text grid.
    #[default]
    Text,
    /// A JSON snapshot of the whole game, one per line.
    Json,
}

/// Writes the current board in the requested format.
pub fn render<W: Write>(game: &Game, format: OutputFormat, output: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write!(output, "{game}")?,
        OutputFormat::Json => {
            let snapshot = serde_json::to_string(game).context("Failed to serialize game")?;
            writeln!(output, "{snapshot}")?;
        }
    }
    Ok(())
}

/// Writes a one-line summary of the outcome.
pub fn announce<W: Write>(game: &Game, config: &SessionConfig, output: &mut W) -> Result<()> {
    match game.outcome() {
        Outcome::Won(player) => writeln!(output, "{} wins!", config.name_of(player))?,
        Outcome::Draw => writeln!(output, "It's a draw.")?,
        Outcome::InProgress => writeln!(
            output,
            "Game in progress, {} to move.",
            config.name_of(game.current_player())
        )?,
    }
    Ok(())
}

/// A local two-player session reading moves from `input`.
pub struct Session<R, W> {
    game: Game,
    config: SessionConfig,
    format: OutputFormat,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around a fresh game.
    pub fn new(config: SessionConfig, format: OutputFormat, input: R, output: W) -> Self {
        Self {
            game: Game::new(),
            config,
            format,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts for moves until the game ends.
    ///
    /// Returns `None` if the player quits or input runs out first.
    #[instrument(skip(self), fields(format = ?self.format))]
    pub fn run(&mut self) -> Result<Option<Outcome>> {
        info!("Session started");
        let mut needs_render = true;

        loop {
            if needs_render {
                render(&self.game, self.format, &mut self.output)?;
                needs_render = false;
            }
            if self.game.is_over() {
                announce(&self.game, &self.config, &mut self.output)?;
                let outcome = self.game.outcome();
                info!(%outcome, "Session finished");
                return Ok(Some(outcome));
            }

            let player = self.game.current_player();
            write!(
                self.output,
                "{} ({}) {}",
                self.config.name_of(player),
                player.mark(),
                self.config.prompt()
            )?;
            // Snapshots must start on a fresh line.
            if self.format == OutputFormat::Json {
                writeln!(self.output)?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).context("Failed to read move")? == 0 {
                info!("Input closed before the game ended");
                return Ok(None);
            }

            match parse_input(&line) {
                Ok(None) => continue,
                Ok(Some(Input::Quit)) => {
                    info!("Player quit");
                    return Ok(None);
                }
                Ok(Some(Input::Move { x, y })) => match self.game.play(x, y) {
                    Ok(()) => needs_render = true,
                    Err(err) => writeln!(self.output, "{err}")?,
                },
                Err(err) => {
                    debug!(%err, "Unparseable input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }
}

/// Applies `moves` (each `x,y` or `x y`) to a fresh game, then prints the board and outcome.
///
/// A rejected move is reported and the remaining moves are still applied.
#[instrument(skip(config, output))]
pub fn replay<W: Write>(
    moves: &[String],
    config: &SessionConfig,
    format: OutputFormat,
    mut output: W,
) -> Result<Game> {
    let mut game = Game::new();

    for mv in moves {
        match parse_input(mv) {
            Ok(Some(Input::Move { x, y })) => {
                if let Err(err) = game.play(x, y) {
                    writeln!(output, "{mv}: {err}")?;
                }
            }
            Ok(_) => {
                warn!(%mv, "Ignoring non-move in replay");
                writeln!(output, "{mv}: expected a move")?;
            }
            Err(err) => writeln!(output, "{mv}: {err}")?,
        }
    }

    render(&game, format, &mut output)?;
    announce(&game, config, &mut output)?;
    Ok(game)
}
