//! Contract-based validation for taps.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions reject bad taps before the board is touched;
//! postconditions check the transition against the invariant set.

use super::action::TapError;
use super::invariants::{InvariantSet, TapInvariants};
use super::{ApplicationState, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Output of a successful precondition check.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, TapError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), TapError>;
}

// ─────────────────────────────────────────────────────────────
//  Tap Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still be in progress.
pub struct GameNotFinished;

impl GameNotFinished {
    /// Rejects taps against a won or drawn game.
    #[instrument(skip(state))]
    pub fn check(state: &ApplicationState) -> Result<(), TapError> {
        if state.is_game_finished() {
            Err(TapError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index must name a cell.
pub struct CellInBounds;

impl CellInBounds {
    /// Resolves the index to a position.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, TapError> {
        Position::from_index(index).ok_or(TapError::OutOfBounds(index))
    }
}

/// Precondition: the cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects taps on a marked cell.
    #[instrument(skip(state))]
    pub fn check(position: Position, state: &ApplicationState) -> Result<(), TapError> {
        if state.board().is_empty(position) {
            Ok(())
        } else {
            Err(TapError::CellOccupied(position))
        }
    }
}

/// Composite precondition: a tap is legal if the game is live, the index
/// is on the board, and the cell is empty.
pub struct LegalTap;

impl LegalTap {
    /// Validates all preconditions for a tap, returning the tapped position.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &ApplicationState) -> Result<Position, TapError> {
        GameNotFinished::check(state)?;
        let position = CellInBounds::check(index)?;
        CellIsEmpty::check(position, state)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Tap Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for tap actions.
///
/// Preconditions:
/// - Game not finished
/// - Index in bounds
/// - Cell empty
///
/// Postconditions:
/// - Exactly one cell gained the mover's mark
/// - Only a win scores, for the mover
/// - Turn flips iff the game continues
pub struct TapContract;

impl Contract<ApplicationState, usize> for TapContract {
    type Checked = Position;

    fn pre(state: &ApplicationState, index: &usize) -> Result<Position, TapError> {
        LegalTap::check(*index, state)
    }

    fn post(before: &ApplicationState, after: &ApplicationState) -> Result<(), TapError> {
        TapInvariants::check_all(before, after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Tap postcondition failed");
            TapError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square, player_tapped};

    #[test]
    fn test_precondition_empty_cell() {
        let state = ApplicationState::new(Player::One);
        assert_eq!(TapContract::pre(&state, &4usize), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let state = player_tapped(4, &ApplicationState::new(Player::One)).unwrap();
        assert_eq!(
            TapContract::pre(&state, &4usize),
            Err(TapError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let state = ApplicationState::new(Player::One);
        assert_eq!(TapContract::pre(&state, &9usize), Err(TapError::OutOfBounds(9)));
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let mut state = ApplicationState::new(Player::One);
        state.is_game_finished = true;
        assert_eq!(TapContract::pre(&state, &42usize), Err(TapError::GameOver));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = ApplicationState::new(Player::One);
        let mut after = player_tapped(4, &before).unwrap();
        after.board.set(Position::TopLeft, Square::Occupied(Player::Two));

        assert!(matches!(
            TapContract::post(&before, &after),
            Err(TapError::InvariantViolation(_))
        ));
    }
}
