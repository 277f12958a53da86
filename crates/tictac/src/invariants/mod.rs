//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 3-tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];
        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod terminal_flags;
pub mod turn_order;

pub use mark_balance::MarkBalanceInvariant;
pub use terminal_flags::TerminalFlagsInvariant;
pub use turn_order::TurnOrderInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    TerminalFlagsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Occupant};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        for (x, y) in [(0, 0), (1, 1), (2, 0)] {
            game.play(x, y).unwrap();
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_violations() {
        let mut game = Game::new();
        game.play(1, 1).unwrap();
        game.board.place(0, 0, Occupant::Player2);
        game.has_winner = true;

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, MarkBalanceInvariant::description());
        assert_eq!(violations[1].description, TerminalFlagsInvariant::description());
    }
}
