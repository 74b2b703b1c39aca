//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square};
use tracing::instrument;

/// Three cells in ascending index order.
pub type Line = [Position; 3];

/// Every winning line: rows, then columns, then diagonals.
///
/// The order is fixed; when one move completes two lines at once the
/// earlier entry is reported.
pub static LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Lines passing through `pos`, in `LINES` order (2 to 4 of them).
pub fn lines_through(pos: Position) -> impl Iterator<Item = &'static Line> {
    LINES.iter().filter(move |line| line.contains(&pos))
}

/// Returns the line completed by the move at `last_move`, if any.
///
/// Only lines through `last_move` are examined. An empty `last_move`
/// cell never completes a line.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, last_move: Position) -> Option<Line> {
    let mark = board.get(last_move);
    if mark == Square::Empty {
        return None;
    }

    lines_through(last_move)
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied()
}
