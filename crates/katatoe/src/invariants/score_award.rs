//! Score award invariant: only a winning tap scores, and only for the mover.

use super::super::{ApplicationState, WIN_POINTS};
use super::Invariant;

/// Invariant: a winning tap adds exactly `WIN_POINTS` to the mover;
/// any other tap leaves both scores alone.
pub struct ScoreAwardInvariant;

impl Invariant<ApplicationState> for ScoreAwardInvariant {
    fn holds(before: &ApplicationState, after: &ApplicationState) -> bool {
        let mover = before.turn();
        let other = mover.opponent();
        let gained = if after.winning_line().is_some() {
            WIN_POINTS
        } else {
            0
        };

        after.score(mover) == before.score(mover) + gained
            && after.score(other) == before.score(other)
    }

    fn description() -> &'static str {
        "Only a winning tap scores, for the mover only"
    }
}
