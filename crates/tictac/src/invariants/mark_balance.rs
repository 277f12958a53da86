//! Mark balance invariant: the board agrees with the move counter.

use super::Invariant;
use crate::{Game, Occupant};

/// Invariant: each player has exactly as many marks as turns taken.
///
/// Player 1 moves first, so after `n` moves it owns `ceil(n / 2)` cells and
/// Player 2 owns `floor(n / 2)`.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.move_count();
        let board = game.board();

        board.count(Occupant::Player1) == moves.div_ceil(2)
            && board.count(Occupant::Player2) == moves / 2
    }

    fn description() -> &'static str {
        "Mark counts match the move counter (Player 1 first)"
    }
}
