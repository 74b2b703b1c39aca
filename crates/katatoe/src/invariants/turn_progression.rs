//! Turn progression invariant: turn flips iff the game goes on.

use super::super::ApplicationState;
use super::Invariant;

/// Invariant: a continuing game hands the turn to the opponent; a
/// finishing tap keeps it with the mover.
pub struct TurnProgressionInvariant;

impl Invariant<ApplicationState> for TurnProgressionInvariant {
    fn holds(before: &ApplicationState, after: &ApplicationState) -> bool {
        if after.is_game_finished() {
            after.turn() == before.turn()
        } else {
            after.turn() == before.turn().opponent()
        }
    }

    fn description() -> &'static str {
        "Turn flips while the game continues and stays put when it ends"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, player_tapped};

    #[test]
    fn test_continuing_tap_flips() {
        let before = ApplicationState::new(Player::One);
        let after = player_tapped(0, &before).unwrap();
        assert_eq!(after.turn(), Player::Two);
        assert!(TurnProgressionInvariant::holds(&before, &after));
    }

    #[test]
    fn test_stuck_turn_violates() {
        let before = ApplicationState::new(Player::One);
        let mut after = player_tapped(0, &before).unwrap();
        after.turn = Player::One;
        assert!(!TurnProgressionInvariant::holds(&before, &after));
    }
}
