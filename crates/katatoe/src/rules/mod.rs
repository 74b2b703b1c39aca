//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. They never touch scores
//! or turns; the reducer composes them into state transitions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, LINES, lines_through, winning_line};
