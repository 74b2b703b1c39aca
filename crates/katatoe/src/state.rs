//! Whole-application state.

use super::rules::Line;
use super::types::{Board, GameStatus, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Points awarded for completing a line.
pub const WIN_POINTS: u32 = 10;

/// Everything the presentation layer needs to draw the game.
///
/// Replaced as a whole on every transition. Scores survive new games;
/// everything else is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationState {
    pub(crate) is_game_finished: bool,
    pub(crate) turn: Player,
    pub(crate) board: Board,
    pub(crate) winning_line: Option<Line>,
    pub(crate) player1_score: u32,
    pub(crate) player2_score: u32,
}

impl ApplicationState {
    /// Fresh game with zeroed scores and `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            is_game_finished: false,
            turn: first,
            board: Board::new(),
            winning_line: None,
            player1_score: 0,
            player2_score: 0,
        }
    }

    /// Fresh game with zeroed scores and a randomly chosen first player.
    #[instrument(skip(rng))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Player::random(rng))
    }

    /// Returns true once the game is won or drawn.
    pub fn is_game_finished(&self) -> bool {
        self.is_game_finished
    }

    /// The player entitled to move next (or the winner, once won).
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// The completed line as board indices.
    pub fn winning_indices(&self) -> Option<[usize; 3]> {
        self.winning_line.map(|line| line.map(|pos| pos.to_index()))
    }

    /// Player one's session score.
    pub fn player1_score(&self) -> u32 {
        self.player1_score
    }

    /// Player two's session score.
    pub fn player2_score(&self) -> u32 {
        self.player2_score
    }

    /// Session score of `player`.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player1_score,
            Player::Two => self.player2_score,
        }
    }

    pub(crate) fn award(&mut self, player: Player, points: u32) {
        match player {
            Player::One => self.player1_score += points,
            Player::Two => self.player2_score += points,
        }
    }

    /// Returns a copy with the given session scores.
    pub fn with_scores(mut self, player1: u32, player2: u32) -> Self {
        self.player1_score = player1;
        self.player2_score = player2;
        self
    }

    /// Derived game status.
    ///
    /// Turn does not advance on a winning move, so a finished game with a
    /// line belongs to `turn`.
    pub fn status(&self) -> GameStatus {
        match (self.is_game_finished, self.winning_line) {
            (false, _) => GameStatus::InProgress,
            (true, Some(_)) => GameStatus::Won(self.turn),
            (true, None) => GameStatus::Draw,
        }
    }
}

impl std::fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.status() {
            GameStatus::InProgress => writeln!(f, "{} to move", self.turn)?,
            status => writeln!(f, "{}", status)?,
        }
        write!(
            f,
            "Score: {} {} / {} {}",
            Player::One,
            self.player1_score,
            Player::Two,
            self.player2_score
        )
    }
}
