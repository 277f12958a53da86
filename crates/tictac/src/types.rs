//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const DIMENSION: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = DIMENSION * DIMENSION;

/// Moves that must be made before a line can possibly be completed.
pub const WIN_CHECK_THRESHOLD: usize = DIMENSION + 2;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// First player, plays `X`.
    #[display("Player 1")]
    Player1,
    /// Second player, plays `O`.
    #[display("Player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Returns the mark this player writes on the board.
    pub fn mark(self) -> Occupant {
        Occupant::from(self)
    }
}

/// Occupant of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Occupant {
    /// Marked by [`Player::Player1`].
    #[display("X")]
    Player1,
    /// Marked by [`Player::Player2`].
    #[display("O")]
    Player2,
    /// Nobody has played here yet.
    #[display(" ")]
    Empty,
}

impl Occupant {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Player1 => Some(Player::Player1),
            Occupant::Player2 => Some(Player::Player2),
            Occupant::Empty => None,
        }
    }

    /// Checks if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Occupant::Player1,
            Player::Player2 => Occupant::Player2,
        }
    }
}
