//! Single mark invariant: a tap fills exactly one empty cell with the mover's mark.

use super::super::{ApplicationState, Square};
use super::Invariant;

/// Invariant: exactly one cell changed, from empty to the mover's mark.
///
/// Cells never revert to empty and never change owner.
pub struct SingleMarkInvariant;

impl Invariant<ApplicationState> for SingleMarkInvariant {
    fn holds(before: &ApplicationState, after: &ApplicationState) -> bool {
        let mover = Square::Occupied(before.turn());
        let mut changed = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(old, new)| old != new);

        match (changed.next(), changed.next()) {
            (Some((old, new)), None) => *old == Square::Empty && *new == mover,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "A tap fills exactly one empty cell with the mover's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, player_tapped};

    #[test]
    fn test_single_tap_holds() {
        let before = ApplicationState::new(Player::One);
        let after = player_tapped(8, &before).unwrap();
        assert!(SingleMarkInvariant::holds(&before, &after));
    }

    #[test]
    fn test_unchanged_board_violates() {
        let state = ApplicationState::new(Player::One);
        assert!(!SingleMarkInvariant::holds(&state, &state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let before = ApplicationState::new(Player::One);
        let mut after = before.clone();
        after.board.set(Position::Center, Square::Occupied(Player::Two));
        assert!(!SingleMarkInvariant::holds(&before, &after));
    }
}
