//! Tests for headless replay and its JSON form.

use tictactoe_history::{GameError, Player, Position, ReplayReport, Status, parse_positions, replay};

#[test]
fn test_replay_from_labels() {
    let positions = parse_positions(&["top-left", "4", "top center", "8", "top_right"]).unwrap();
    let report = replay(&positions).unwrap();

    assert_eq!(report.boards.len(), 6);
    assert_eq!(report.status.winner(), Some(Player::X));
}

#[test]
fn test_replay_rejects_move_after_win() {
    let positions = parse_positions(&["0", "4", "1", "8", "2", "5"]).unwrap();
    assert!(matches!(replay(&positions), Err(GameError::IllegalMove(_))));
}

#[test]
fn test_replay_error_message() {
    let err = parse_positions(&["north"]).unwrap_err();
    assert_eq!(err.to_string(), "Unknown position: \"north\"");
}

#[test]
fn test_report_json_shape() {
    let report = replay(&[Position::Center]).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["moves"][0]["player"], "X");
    assert_eq!(json["moves"][0]["position"], "Center");
    assert_eq!(json["boards"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["status"]["InProgress"], "O");

    let back: ReplayReport = serde_json::from_value(json).unwrap();
    assert_eq!(back.status, Status::InProgress(Player::O));
}
