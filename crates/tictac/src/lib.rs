//! Two-player tic-tac-toe engine.
//!
//! Tracks a 3x3 board, enforces turn order, validates moves and detects
//! wins and draws. There is no AI opponent and no rendering beyond a
//! plain-text board dump.
//!
//! # Example
//!
//! ```
//! use tictac::{Game, Occupant, PlayError};
//!
//! let mut game = Game::new();
//! game.play(1, 1)?;
//! assert_eq!(game.field_value(1, 1), Occupant::Player1);
//! assert_eq!(game.play(1, 1), Err(PlayError::CellOccupied { x: 1, y: 1 }));
//! print!("{game}");
//! # Ok::<(), PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod outcome;
mod types;

pub mod contracts;
pub mod invariants;

pub use board::{Board, Line};
pub use error::{PlayError, PlayResult, SnapshotError};
pub use game::Game;
pub use outcome::Outcome;
pub use types::{CELLS, DIMENSION, Occupant, Player, WIN_CHECK_THRESHOLD};
