//! tictac - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictac_cli::SessionConfig;
use tictac_cli::cli::{Cli, Command};
use tictac_cli::session::{Session, replay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SessionConfig::default(),
    };

    match cli.command {
        Command::Play => {
            info!("Starting interactive game");
            let stdin = io::stdin();
            let mut session = Session::new(config, cli.format, stdin.lock(), io::stdout());
            session.run()?;
        }
        Command::Replay { moves } => {
            info!(moves = moves.len(), "Replaying moves");
            replay(&moves, &config, cli.format, io::stdout().lock())?;
        }
    }

    Ok(())
}
