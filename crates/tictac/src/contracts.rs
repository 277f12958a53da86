//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::{PlayError, PlayResult};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::types::DIMENSION;
use crate::Game;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> PlayResult<()>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still accept moves.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`PlayError::GameOver`] once the game has ended.
    pub fn check(game: &Game) -> PlayResult<()> {
        if game.is_over() {
            Err(PlayError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates must lie on the board.
pub struct WithinBoard;

impl WithinBoard {
    /// Fails with [`PlayError::InvalidCoordinates`] if `x` or `y` is off the board.
    pub fn check(x: usize, y: usize) -> PlayResult<()> {
        if x >= DIMENSION || y >= DIMENSION {
            Err(PlayError::InvalidCoordinates { x, y })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`PlayError::CellOccupied`] if the cell is marked.
    pub fn check(game: &Game, x: usize, y: usize) -> PlayResult<()> {
        match game.board().get(x, y) {
            Some(occupant) if occupant.is_empty() => Ok(()),
            _ => Err(PlayError::CellOccupied { x, y }),
        }
    }
}

/// Composite precondition, checked in a fixed order: game over, then bounds, then occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(game: &Game, x: usize, y: usize) -> PlayResult<()> {
        GameInProgress::check(game)?;
        WithinBoard::check(x, y)?;
        CellIsEmpty::check(game, x, y)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: marked cells are never overwritten or cleared.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Checks that every marked cell in `before` is unchanged in `after`.
    pub fn holds(before: &Game, after: &Game) -> bool {
        before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .all(|(old, new)| old.is_empty() || old == new)
    }

    /// Human-readable description of the postcondition.
    pub fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// Contract for a move at `(x, y)`.
///
/// Preconditions:
/// - Game is not over
/// - Coordinates are on the board
/// - Cell is empty
///
/// Postconditions:
/// - Board remains monotonic
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<Game, (usize, usize)> for MoveContract {
    fn pre(game: &Game, &(x, y): &(usize, usize)) -> PlayResult<()> {
        LegalMove::check(game, x, y)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match GameInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !MonotonicBoard::holds(before, after) {
            violations.insert(0, InvariantViolation::new(MonotonicBoard::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Asserts the move postconditions (panics on violation in debug builds).
#[cfg(debug_assertions)]
pub(crate) fn assert_postconditions(before: &Game, after: &Game) {
    let result = MoveContract::post(before, after);
    if let Err(violations) = &result {
        tracing::warn!(?violations, "Move postcondition violated");
    }
    debug_assert!(result.is_ok(), "Move postcondition violated: {:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Occupant;

    #[test]
    fn test_precondition_order_game_over_first() {
        let mut game = Game::new();
        for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
            game.play(x, y).unwrap();
        }
        // Invalid and occupied at once: game over still wins.
        assert_eq!(MoveContract::pre(&game, &(5, 5)), Err(PlayError::GameOver));
        assert_eq!(MoveContract::pre(&game, &(0, 0)), Err(PlayError::GameOver));
    }

    #[test]
    fn test_precondition_bounds_before_occupancy() {
        let game = Game::new();
        assert_eq!(
            LegalMove::check(&game, 0, 3),
            Err(PlayError::InvalidCoordinates { x: 0, y: 3 })
        );
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = Game::new();
        game.play(2, 1).unwrap();
        assert_eq!(
            LegalMove::check(&game, 2, 1),
            Err(PlayError::CellOccupied { x: 2, y: 1 })
        );
        assert!(LegalMove::check(&game, 1, 2).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let mut after = before.clone();
        after.play(1, 1).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = Game::new();
        before.play(1, 1).unwrap();
        let mut after = before.clone();
        after.board.place(1, 1, Occupant::Player2);

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert_eq!(violations[0].description, MonotonicBoard::description());
    }
}
