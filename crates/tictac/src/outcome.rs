//! Summary of where a game stands.

use crate::types::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Outcome of a game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Moves are still accepted.
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// The board filled up without a completed line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
