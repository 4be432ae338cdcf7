//! Tests for perfect-play move selection.

use unbeatable_core::search::WIN_SCORE;
use unbeatable_core::{Board, GameState, Outcome, Position, Side, best_move, search};

#[test]
fn test_reply_to_corner_opening_is_center() {
    let board: Board = "X../.../...".parse().unwrap();
    let result = search(&board, Side::Ai).unwrap();

    assert_ne!(result.position, Position::TopLeft);
    assert_eq!(result.position, Position::Center);
    assert_eq!(result.score, 0);
    // Every other reply loses against perfect play.
    assert!(
        result
            .candidates
            .iter()
            .filter(|(pos, _)| *pos != Position::Center)
            .all(|(_, score)| *score < 0)
    );
}

#[test]
fn test_completes_own_line() {
    // Computer holds (1,0) and (1,1); (1,2) wins at once.
    let board: Board = "XX./OO./X..".parse().unwrap();
    let result = search(&board, Side::Ai).unwrap();

    assert_eq!(result.position, Position::MiddleRight);
    assert_eq!(result.score, WIN_SCORE);
    assert_eq!(result.score_of(Position::MiddleRight), Some(WIN_SCORE));
}

#[test]
fn test_takes_open_win_in_middle_row() {
    // (1,2) completes the computer's row; nothing else scores as high.
    let board: Board = "X.X/OO./X..".parse().unwrap();
    let result = search(&board, Side::Ai).unwrap();

    assert_eq!(result.position, Position::MiddleRight);
    assert_eq!(result.score, WIN_SCORE);
    assert!(
        result
            .candidates
            .iter()
            .filter(|(pos, _)| *pos != Position::MiddleRight)
            .all(|(_, score)| *score < WIN_SCORE)
    );
}

#[test]
fn test_prefers_immediate_win_over_block() {
    // Both sides threaten; winning now beats blocking.
    let board: Board = "XX./OO./..X".parse().unwrap();
    assert_eq!(best_move(&board, Side::Ai), Some(Position::MiddleRight));
}

#[test]
fn test_blocks_immediate_threat() {
    let board: Board = "XX./.O./...".parse().unwrap();
    assert_eq!(best_move(&board, Side::Ai), Some(Position::TopRight));
}

#[test]
fn test_full_board_returns_none() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(best_move(&board, Side::Ai), None);
}

#[test]
fn test_ties_go_to_first_cell_in_row_major_order() {
    // Empty board: every opening draws, so the first cell wins the tie.
    let result = search(&Board::new(), Side::Ai).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.position, Position::TopLeft);
    assert_eq!(result.candidates.len(), 9);
}

#[test]
fn test_search_is_deterministic() {
    let board: Board = "X../.O./..X".parse().unwrap();
    assert_eq!(search(&board, Side::Ai), search(&board, Side::Ai));
}

/// Counts finished games by outcome, for every human line against the engine.
fn explore(game: &GameState, tally: &mut [usize; 3]) {
    let slot = match game.outcome() {
        Outcome::PlayerWin => Some(0),
        Outcome::AiWin => Some(1),
        Outcome::Draw => Some(2),
        Outcome::InProgress => None,
    };
    if let Some(slot) = slot {
        tally[slot] += 1;
        return;
    }

    match game.turn() {
        Side::Player => {
            for pos in game.board().empty_positions() {
                let mut next = game.clone();
                next.apply_at(pos).unwrap();
                explore(&next, tally);
            }
        }
        Side::Ai => {
            let reply = best_move(&game.snapshot(), Side::Ai).unwrap();
            let mut next = game.clone();
            next.apply_at(reply).unwrap();
            explore(&next, tally);
        }
    }
}

#[test]
fn test_computer_never_loses() {
    let mut tally = [0usize; 3];
    explore(&GameState::new(), &mut tally);

    let [player_wins, ai_wins, draws] = tally;
    assert_eq!(player_wins, 0);
    assert!(ai_wins > 0);
    assert!(draws > 0);
}
