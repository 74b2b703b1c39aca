//! Pure state transitions.
//!
//! Every function here takes the current state by reference and returns
//! a whole successor. The caller decides whether to keep it.

use super::action::{Action, TapError};
use super::contracts::{Contract, TapContract};
use super::rules::{is_full, winning_line};
use super::state::{ApplicationState, WIN_POINTS};
use super::types::{Player, Square};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Starts a new game, carrying both scores over.
///
/// The first player is drawn uniformly from `rng`.
#[instrument(skip(state, rng))]
pub fn new_game<R: Rng + ?Sized>(state: &ApplicationState, rng: &mut R) -> ApplicationState {
    let next = ApplicationState::new(Player::random(rng))
        .with_scores(state.player1_score(), state.player2_score());
    info!(first = %next.turn(), "New game");
    next
}

/// Applies the current player's tap at `cell_index`.
///
/// The successor is exactly one of: won (line recorded, mover +10, turn
/// kept), drawn (board full, no line), or continuing (turn flipped).
///
/// # Errors
///
/// - `TapError::GameOver` if the game is already finished
/// - `TapError::OutOfBounds` if `cell_index` is not 0-8
/// - `TapError::CellOccupied` if the cell already holds a mark
/// - `TapError::InvariantViolation` if a postcondition fails (debug builds)
#[instrument(skip(state), fields(turn = ?state.turn()))]
pub fn player_tapped(
    cell_index: usize,
    state: &ApplicationState,
) -> Result<ApplicationState, TapError> {
    let position = TapContract::pre(state, &cell_index)?;

    let mover = state.turn();
    let mut next = state.clone();
    next.board.set(position, Square::Occupied(mover));

    if let Some(line) = winning_line(&next.board, position) {
        next.is_game_finished = true;
        next.winning_line = Some(line);
        next.award(mover, WIN_POINTS);
        info!(winner = %mover, ?line, "Line completed");
    } else if is_full(&next.board) {
        next.is_game_finished = true;
        info!("Board full, game drawn");
    } else {
        next.turn = mover.opponent();
        debug!(%position, next = %next.turn, "Turn passes");
    }

    #[cfg(debug_assertions)]
    TapContract::post(state, &next)?;

    Ok(next)
}

/// Routes an action to its transition.
#[instrument(skip(state, rng))]
pub fn reduce<R: Rng + ?Sized>(
    state: &ApplicationState,
    action: Action,
    rng: &mut R,
) -> Result<ApplicationState, TapError> {
    match action {
        Action::NewGame => Ok(new_game(state, rng)),
        Action::PlayerTapped(index) => player_tapped(index, state),
    }
}
