//! Tests for the new-game and cell-tapped transitions.

use katatoe::{
    ApplicationState, GameStatus, Player, Position, Square, TapError, WIN_POINTS, new_game,
    player_tapped,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

fn play(state: ApplicationState, taps: &[usize]) -> ApplicationState {
    taps.iter().fold(state, |state, &i| {
        player_tapped(i, &state).unwrap_or_else(|e| panic!("tap {i} rejected: {e}"))
    })
}

#[test]
fn test_top_row_scenario() {
    let state = play(ApplicationState::new(Player::One), &[0, 4, 1, 5]);
    assert_eq!(state.turn(), Player::One);

    let state = player_tapped(2, &state).unwrap();
    assert!(state.is_game_finished());
    assert_eq!(state.winning_indices(), Some([0, 1, 2]));
    assert_eq!(state.player1_score(), WIN_POINTS);
    assert_eq!(state.player2_score(), 0);
}

#[test]
fn test_win_on_last_empty_cell_is_not_a_draw() {
    // X X . / O O X / X O O, One to fill the top-right corner.
    let state = play(
        ApplicationState::new(Player::One),
        &[0, 3, 1, 4, 5, 7, 6, 8],
    );
    assert_eq!(state.board().occupied(), 8);
    assert_eq!(state.turn(), Player::One);

    let state = player_tapped(2, &state).unwrap();
    assert_eq!(state.board().occupied(), 9);
    assert_eq!(state.status(), GameStatus::Won(Player::One));
    assert_eq!(state.winning_indices(), Some([0, 1, 2]));
    assert_eq!(state.player1_score(), 10);
    assert_eq!(state.player2_score(), 0);
}

#[test]
fn test_draw_scenario() {
    // X O X / O X O / O X O
    let before_last = play(
        ApplicationState::new(Player::Two).with_scores(30, 40),
        &[1, 0, 3, 2, 5, 4, 6, 7],
    );
    assert!(!before_last.is_game_finished());

    let state = player_tapped(8, &before_last).unwrap();
    assert!(state.is_game_finished());
    assert_eq!(state.winning_line(), None);
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.player1_score(), 30);
    assert_eq!(state.player2_score(), 40);
}

#[test]
fn test_winning_tap_scores_only_winner_and_keeps_turn() {
    for winner in Player::iter() {
        let loser = winner.opponent();
        // Winner takes the left column, loser dabbles in the middle column.
        let state = play(
            ApplicationState::new(winner).with_scores(5, 7),
            &[0, 1, 3, 4],
        );
        let before = state.clone();
        let after = player_tapped(6, &state).unwrap();

        assert_eq!(after.score(winner), before.score(winner) + 10);
        assert_eq!(after.score(loser), before.score(loser));
        assert_eq!(after.turn(), winner);
        assert_eq!(after.status(), GameStatus::Won(winner));
        assert_eq!(after.winning_indices(), Some([0, 3, 6]));
    }
}

#[test]
fn test_non_terminal_tap_changes_one_cell() {
    let before = play(ApplicationState::new(Player::One), &[4, 0]);
    let after = player_tapped(8, &before).unwrap();

    let changed: Vec<usize> = (0..9)
        .filter(|&i| before.board().squares()[i] != after.board().squares()[i])
        .collect();
    assert_eq!(changed, vec![8]);
    assert_eq!(
        after.board().get(Position::BottomRight),
        Square::Occupied(Player::One)
    );
    assert_eq!(after.turn(), Player::Two);
    assert!(!after.is_game_finished());
}

#[test]
fn test_occupied_cell_rejected() {
    let state = play(ApplicationState::new(Player::One), &[4]);
    assert_eq!(
        player_tapped(4, &state),
        Err(TapError::CellOccupied(Position::Center))
    );
}

#[test]
fn test_out_of_bounds_rejected() {
    let state = ApplicationState::new(Player::One);
    assert_eq!(player_tapped(9, &state), Err(TapError::OutOfBounds(9)));
}

#[test]
fn test_tap_after_draw_rejected() {
    let state = play(
        ApplicationState::new(Player::Two),
        &[1, 0, 3, 2, 5, 4, 6, 7, 8],
    );
    assert_eq!(player_tapped(0, &state), Err(TapError::GameOver));
}

#[test]
fn test_new_game_resets_everything_but_scores() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let won = play(ApplicationState::new(Player::Two), &[0, 3, 1, 4, 2]);
    assert_eq!(won.player2_score(), 10);

    for _ in 0..16 {
        let fresh = new_game(&won, &mut rng);
        assert!(fresh.board().squares().iter().all(|s| *s == Square::Empty));
        assert!(!fresh.is_game_finished());
        assert_eq!(fresh.winning_line(), None);
        assert_eq!(fresh.player1_score(), won.player1_score());
        assert_eq!(fresh.player2_score(), won.player2_score());
    }
}

#[test]
fn test_new_game_first_player_varies_and_repeats_per_seed() {
    let state = ApplicationState::new(Player::One);
    let firsts = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..32)
            .map(|_| new_game(&state, &mut rng).turn())
            .collect::<Vec<_>>()
    };

    let a = firsts(17);
    assert_eq!(a, firsts(17));
    assert!(a.contains(&Player::One));
    assert!(a.contains(&Player::Two));
}

#[test]
fn test_scores_accumulate_across_games() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut state = ApplicationState::new(Player::One);
    for _ in 0..3 {
        let first = state.turn();
        state = play(state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), GameStatus::Won(first));
        state = new_game(&state, &mut rng);
    }
    assert_eq!(state.player1_score() + state.player2_score(), 30);
}
