//! Actions dispatched against the application state.
//!
//! Actions are plain data describing user intent. They carry no
//! behavior; the reducer decides what they do.

use super::Position;
use serde::{Deserialize, Serialize};

/// Something the presentation layer asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Clear the board, keep the scores, pick a new first player.
    NewGame,
    /// The current player tapped the cell at this index (0-8).
    PlayerTapped(usize),
}

impl Action {
    /// Tap on a known-valid cell.
    pub fn tap(position: Position) -> Self {
        Action::PlayerTapped(position.to_index())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::NewGame => write!(f, "new game"),
            Action::PlayerTapped(index) => match Position::from_index(*index) {
                Some(pos) => write!(f, "tap {} ({})", index, pos.label()),
                None => write!(f, "tap {}", index),
            },
        }
    }
}

/// A tap the current state cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TapError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// A transition broke a state invariant (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for TapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::NewGame.to_string(), "new game");
        assert_eq!(Action::tap(Position::Center).to_string(), "tap 4 (Center)");
        assert_eq!(Action::PlayerTapped(11).to_string(), "tap 11");
    }

    #[test]
    fn test_error_messages() {
        assert!(TapError::CellOccupied(Position::TopLeft).to_string().contains("occupied"));
        assert!(TapError::OutOfBounds(9).to_string().contains("9"));
    }
}
