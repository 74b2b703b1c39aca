//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// The reducer only asks this after the win check, so a full board
/// reaching it is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn fill(pattern: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(pattern.chars()) {
            let square = match c {
                'X' => Square::Occupied(Player::One),
                'O' => Square::Occupied(Player::Two),
                _ => Square::Empty,
            };
            board.set(*pos, square);
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&fill("XO.......")));
    }

    #[test]
    fn test_one_gap_not_full() {
        assert!(!is_full(&fill("XOXOXOOX.")));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&fill("XOXOXOOXO")));
    }
}
