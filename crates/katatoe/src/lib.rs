//! Katatoe - tic-tac-toe as a pure state machine
//!
//! Actions are dispatched against a single application state; a pure
//! reducer computes the successor, and whoever owns the state redraws.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection on a 3x3 board
//! - **Reducer**: `new_game` and `player_tapped` transitions
//! - **Contracts**: tap preconditions and transition invariants
//! - **Store**: owned state holder with seeded randomness and listeners
//!
//! # Example
//!
//! ```
//! use katatoe::{Action, Store};
//!
//! let mut store = Store::seeded(42);
//! let first = store.state().turn();
//! let state = store.dispatch(Action::PlayerTapped(4)).unwrap();
//! assert_eq!(state.turn(), first.opponent());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
pub mod invariants;
mod position;
mod reducer;
pub mod rules;
mod state;
mod store;
mod types;

pub use action::{Action, TapError};
pub use position::Position;
pub use reducer::{new_game, player_tapped, reduce};
pub use rules::{Line, winning_line};
pub use state::{ApplicationState, WIN_POINTS};
pub use store::{Listener, Store};
pub use types::{Board, GameStatus, Player, Square};
