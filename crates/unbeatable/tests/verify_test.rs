//! Whole-session checks through the public API.

use unbeatable::{Session, SessionEvent, VerifyReport, suggest, verify};
use unbeatable_core::{MoveError, Outcome, Position, Side};

#[test]
fn test_computer_never_loses_any_line() {
    let report = verify();
    assert!(report.computer_never_lost(), "{report}");
    assert_eq!(report.player_wins, 0);
    assert!(report.ai_wins > 0);
    assert!(report.draws > 0);
    assert_eq!(report.games, report.ai_wins + report.draws);
}

#[test]
fn test_report_display() {
    let report = VerifyReport {
        games: 3,
        player_wins: 0,
        ai_wins: 2,
        draws: 1,
    };
    assert_eq!(
        report.to_string(),
        "3 games: 0 player wins, 2 AI wins, 1 draws"
    );
}

#[test]
fn test_session_plays_to_a_recorded_result() {
    let mut session = Session::new();
    let mut finished = None;

    // Always take the first free cell; the computer punishes this quickly.
    while !session.game().is_over() {
        let Some(position) = session.game().board().empty_positions().next() else {
            break;
        };
        match session.human_move(position).unwrap() {
            SessionEvent::Moved { outcome, .. } if outcome.is_over() => finished = Some(outcome),
            SessionEvent::Moved { .. } => {}
            SessionEvent::Ignored(err) => panic!("free cell ignored: {err}"),
        }
    }

    let outcome = finished.unwrap();
    assert_ne!(outcome, Outcome::PlayerWin);
    assert_eq!(session.scores().games(), 1);

    // Further input is ignored and does not count the game twice.
    let event = session.human_move(Position::BottomRight).unwrap();
    assert!(matches!(
        event,
        SessionEvent::Ignored(MoveError::GameAlreadyOver(_) | MoveError::CellOccupied(_))
    ));
    assert_eq!(session.scores().games(), 1);

    session.restart();
    assert_eq!(session.game().turn(), Side::Player);
    assert_eq!(session.scores().games(), 1);
}

#[test]
fn test_suggest_blocks_a_threat() {
    // The player threatens the top row.
    let suggestion = suggest::suggest("XX./.O./...", None).unwrap();
    assert_eq!(suggestion.side, Side::Ai);
    assert_eq!(suggestion.result.unwrap().position, Position::TopRight);
}

#[test]
fn test_suggest_hint_for_player() {
    let suggestion = suggest::suggest("X../OO./X..", Some(Side::Player)).unwrap();
    assert_eq!(suggestion.result.unwrap().position, Position::MiddleRight);
}
