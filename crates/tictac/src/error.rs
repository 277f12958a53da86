//! Errors returned when a move is rejected.

use derive_more::{Display, Error};

/// Reason a call to [`Game::play`](crate::Game::play) was rejected.
///
/// The game state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum PlayError {
    /// The game has already been won or drawn.
    #[display("Game already over")]
    GameOver,

    /// A coordinate falls outside the board.
    #[display("Invalid coordinates ({x}, {y})")]
    InvalidCoordinates {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },

    /// The target cell is already marked.
    #[display("Field ({x}, {y}) already marked")]
    CellOccupied {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
    },
}

/// Result alias for move attempts.
pub type PlayResult<T> = Result<T, PlayError>;

/// A serialized game that no sequence of legal moves could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid game snapshot: {}", violations.join("; "))]
pub struct SnapshotError {
    /// Descriptions of the invariants the snapshot breaks.
    pub violations: Vec<String>,
}
