//! The tic-tac-toe game state machine.

use crate::board::{Board, Line};
use crate::contracts::{Contract, MoveContract};
use crate::error::{PlayResult, SnapshotError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::outcome::Outcome;
use crate::types::{CELLS, DIMENSION, Occupant, Player, WIN_CHECK_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// A game starts with an empty board and [`Player::Player1`] to move. It is
/// mutated only through [`Game::play`] and stops accepting moves once won or
/// drawn.
///
/// Deserializing goes through the same invariants as [`Game::play`], so a
/// snapshot is rejected unless legal play could have reached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) move_count: usize,
    pub(crate) game_over: bool,
    pub(crate) has_winner: bool,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Player1,
            move_count: 0,
            game_over: false,
            has_winner: false,
        }
    }

    /// Places the current player's mark at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Checked in this order, leaving the game untouched on failure:
    /// - [`PlayError::GameOver`](crate::PlayError::GameOver) if the game has ended.
    /// - [`PlayError::InvalidCoordinates`](crate::PlayError::InvalidCoordinates) if `x` or `y` is off the board.
    /// - [`PlayError::CellOccupied`](crate::PlayError::CellOccupied) if the cell is already marked.
    #[instrument(skip(self), fields(player = %self.current_player, move_count = self.move_count))]
    pub fn play(&mut self, x: usize, y: usize) -> PlayResult<()> {
        if let Err(err) = MoveContract::pre(self, &(x, y)) {
            warn!(%err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.current_player;
        self.board.place(x, y, mover.mark());
        self.move_count += 1;
        debug!(%mover, "Mark placed");

        self.check_status(x, y);
        if !self.game_over {
            self.current_player = mover.opponent();
        }

        #[cfg(debug_assertions)]
        crate::contracts::assert_postconditions(&before, self);

        Ok(())
    }

    /// Updates the terminal flags after a placement at `(x, y)` by the current player.
    fn check_status(&mut self, x: usize, y: usize) {
        if self.move_count < WIN_CHECK_THRESHOLD {
            return;
        }
        if self.move_count == CELLS {
            self.game_over = true;
        }

        let mover = self.current_player;
        if Line::through(x, y)
            .into_iter()
            .any(|line| self.board.is_owned_by(line, mover))
        {
            self.game_over = true;
            self.has_winner = true;
        }

        if self.game_over {
            info!(outcome = %self.outcome(), moves = self.move_count, "Game over");
        }
    }

    /// Returns the occupant at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is off the board.
    pub fn field_value(&self, x: usize, y: usize) -> Occupant {
        assert!(
            x < DIMENSION && y < DIMENSION,
            "field ({x}, {y}) is off the board"
        );
        self.board.at(x, y)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the player who made the final move once over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of successful moves so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Returns true if the game ended with a completed line.
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.has_winner.then_some(self.current_player)
    }

    /// Summarizes the game state.
    pub fn outcome(&self) -> Outcome {
        match (self.game_over, self.has_winner) {
            (false, _) => Outcome::InProgress,
            (true, true) => Outcome::Won(self.current_player),
            (true, false) => Outcome::Draw,
        }
    }
}

/// Unchecked serialized form of a [`Game`].
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    current_player: Player,
    move_count: usize,
    game_over: bool,
    has_winner: bool,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    #[instrument(skip_all)]
    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let game = Game {
            board: snapshot.board,
            current_player: snapshot.current_player,
            move_count: snapshot.move_count,
            game_over: snapshot.game_over,
            has_winner: snapshot.has_winner,
        };

        GameInvariants::check_all(&game).map_err(|violations| {
            warn!(?violations, "Rejected game snapshot");
            SnapshotError {
                violations: violations.into_iter().map(|v| v.description).collect(),
            }
        })?;
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
