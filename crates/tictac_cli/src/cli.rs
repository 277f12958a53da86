//! Command-line interface for tictac.

use crate::session::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config (player names, prompt)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How the board is printed
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading `x y` moves from stdin
    Play,

    /// Apply a list of `x,y` moves and print the resulting board
    Replay {
        /// Moves in order, Player 1 first
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["tictac", "play"]).unwrap();
        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_replay_with_globals() {
        let cli = Cli::try_parse_from([
            "tictac", "replay", "0,0", "1,1", "--format", "json", "--config", "game.toml",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        match cli.command {
            Command::Replay { moves } => assert_eq!(moves, vec!["0,0", "1,1"]),
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictac", "replay"]).is_err());
    }
}
