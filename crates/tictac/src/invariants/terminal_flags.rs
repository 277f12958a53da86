//! Terminal flag invariant: the game ends exactly on a completed line or a full board.

use super::Invariant;
use crate::Game;
use crate::types::CELLS;

/// Invariant: the terminal flags are consistent with the board.
///
/// Only the final mover may own a completed line, and owning one is the same
/// as having a winner. The game is over exactly when there is a winner or the
/// board is full.
pub struct TerminalFlagsInvariant;

impl Invariant<Game> for TerminalFlagsInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let mover = game.current_player();
        let full = board.is_full();

        let winner_matches_lines = board.has_line(mover) == game.has_winner();
        let opponent_has_no_line = !board.has_line(mover.opponent());
        let over_when_decided = game.is_over() == (game.has_winner() || full);

        winner_matches_lines
            && opponent_has_no_line
            && over_when_decided
            && game.move_count() <= CELLS
    }

    fn description() -> &'static str {
        "Game is over exactly when a line is completed or the board is full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_holds() {
        let mut game = Game::new();
        for (x, y) in [
            (0, 0),
            (1, 0),
            (2, 0),
            (1, 1),
            (0, 1),
            (2, 1),
            (1, 2),
            (0, 2),
            (2, 2),
        ] {
            game.play(x, y).unwrap();
        }
        assert!(game.is_over());
        assert!(!game.has_winner());
        assert!(TerminalFlagsInvariant::holds(&game));
    }

    #[test]
    fn test_win_holds() {
        let mut game = Game::new();
        for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            game.play(x, y).unwrap();
        }
        assert!(TerminalFlagsInvariant::holds(&game));
    }

    #[test]
    fn test_completed_line_without_game_over_violates() {
        let mut game = Game::new();
        for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            game.play(x, y).unwrap();
        }
        game.game_over = false;
        game.has_winner = false;
        assert!(!TerminalFlagsInvariant::holds(&game));
    }

    #[test]
    fn test_game_over_without_cause_violates() {
        let mut game = Game::new();
        game.game_over = true;
        assert!(!TerminalFlagsInvariant::holds(&game));
    }

    #[test]
    fn test_winner_without_game_over_violates() {
        let mut game = Game::new();
        game.has_winner = true;
        assert!(!TerminalFlagsInvariant::holds(&game));
    }
}
