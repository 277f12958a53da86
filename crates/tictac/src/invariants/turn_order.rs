//! Turn order invariant: players alternate, Player 1 first.

use super::Invariant;
use crate::{Game, Player};

/// Invariant: the current player follows from the move counter.
///
/// While the game runs, Player 1 is to move after an even number of moves.
/// Once it is over, the current player is whoever made the final move.
pub struct TurnOrderInvariant;

impl Invariant<Game> for TurnOrderInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.move_count();
        let expected = if game.is_over() {
            if moves % 2 == 1 {
                Player::Player1
            } else {
                Player::Player2
            }
        } else if moves % 2 == 0 {
            Player::Player1
        } else {
            Player::Player2
        };

        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (Player 1, Player 2, ...)"
    }
}
