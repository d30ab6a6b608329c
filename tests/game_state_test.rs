//! Tests for game history, time travel and status.

use tictactoe_history::{
    Board, GameState, HistoryInvariants, IllegalMove, InvariantSet, OutOfRange, Player, Position,
    Square, Status,
};

use Position::*;

fn play(positions: &[Position]) -> GameState {
    GameState::replay(positions).expect("Valid moves")
}

#[test]
fn test_column_win_scenario() {
    // X@0, O@1, X@3, O@4, X@6
    let game = play(&[TopLeft, TopCenter, MiddleLeft, Center, BottomLeft]);

    let expected = [
        Square::Occupied(Player::X),
        Square::Occupied(Player::O),
        Square::Empty,
        Square::Occupied(Player::X),
        Square::Occupied(Player::O),
        Square::Empty,
        Square::Occupied(Player::X),
        Square::Empty,
        Square::Empty,
    ];
    assert_eq!(game.current_board().squares(), &expected);

    match game.status() {
        Status::Winner(win) => {
            assert_eq!(win.winner, Player::X);
            assert_eq!(win.line.map(Position::to_index), [0, 3, 6]);
        }
        other => panic!("Expected a winner, got {:?}", other),
    }
}

#[test]
fn test_no_moves_after_win() {
    let mut game = play(&[TopLeft, TopCenter, MiddleLeft, Center, BottomLeft]);
    let before = game.clone();

    assert_eq!(game.apply_move(BottomRight), Err(IllegalMove::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_draw_scenario() {
    // Final board X O X / X O O / O X X
    let mut game = play(&[
        TopLeft,
        TopCenter,
        TopRight,
        Center,
        MiddleLeft,
        MiddleRight,
        BottomCenter,
        BottomLeft,
        BottomRight,
    ]);

    let board = game.current_board();
    assert_eq!(board.display(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
    assert_eq!(game.current_move(), 9);
    assert_eq!(game.status(), Status::Draw);
    assert!(game.valid_moves().is_empty());

    // A full board reports the game as over, not the square as taken.
    let before = game.clone();
    assert_eq!(game.apply_move(Center), Err(IllegalMove::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    // X completes the top row with the ninth mark.
    let game = play(&[
        TopLeft,
        MiddleLeft,
        TopCenter,
        Center,
        MiddleRight,
        BottomLeft,
        BottomCenter,
        BottomRight,
        TopRight,
    ]);

    assert_eq!(game.current_move(), 9);
    assert_eq!(game.status().winner(), Some(Player::X));
}

#[test]
fn test_double_apply_is_rejected() {
    let mut game = GameState::new();
    game.apply_move(Center).unwrap();
    let len = game.history_len();

    assert_eq!(game.apply_move(Center), Err(IllegalMove::SquareOccupied(Center)));
    assert_eq!(game.history_len(), len);
    assert_eq!(game.current_move(), len - 1);
}

#[test]
fn test_each_move_appends_one_snapshot() {
    let mut game = GameState::new();
    for (i, pos) in [Center, TopLeft, BottomRight, TopRight].into_iter().enumerate() {
        game.apply_move(pos).unwrap();
        assert_eq!(game.history_len(), i + 2);
        assert_eq!(game.current_move(), game.history_len() - 1);
    }
}

#[test]
fn test_time_travel_then_move_truncates() {
    for k in 0..5 {
        let mut game = play(&[Center, TopLeft, BottomRight, TopRight, BottomLeft]);
        game.select_move(k).unwrap();

        let free = game.valid_moves()[0];
        game.apply_move(free).unwrap();

        assert_eq!(game.history_len(), k + 2, "branching from move {}", k);
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_rewind_to_start_and_play_square_used_later() {
    let mut game = play(&[TopLeft, TopCenter, MiddleLeft, Center, BottomLeft]);
    game.select_move(0).unwrap();

    // Cell 0 is empty on the starting board, so the move succeeds.
    game.apply_move(TopLeft).unwrap();
    assert_eq!(game.history_len(), 2);
    assert_eq!(game.status(), Status::InProgress(Player::O));
}

#[test]
fn test_rewind_to_mid_game_and_play_filled_square() {
    let mut game = play(&[TopLeft, TopCenter, MiddleLeft, Center, BottomLeft]);
    game.select_move(1).unwrap();

    assert_eq!(game.apply_move(TopLeft), Err(IllegalMove::SquareOccupied(TopLeft)));
    assert_eq!(game.history_len(), 6);
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_select_move_bounds() {
    let mut game = play(&[Center, TopLeft]);

    assert!(game.select_move(2).is_ok());
    assert_eq!(
        game.select_move(3),
        Err(OutOfRange {
            requested: 3,
            len: 3
        })
    );
    assert_eq!(game.current_move(), 2);
}

#[test]
fn test_review_after_win() {
    let mut game = play(&[TopLeft, TopCenter, MiddleLeft, Center, BottomLeft]);

    game.select_move(2).unwrap();
    assert_eq!(game.status(), Status::InProgress(Player::X));

    game.select_move(5).unwrap();
    assert!(game.status().is_over());
}

#[test]
fn test_board_at() {
    let game = play(&[Center]);
    assert_eq!(game.board_at(0), Some(&Board::new()));
    assert_eq!(
        game.board_at(1).map(|b| b.get(Center)),
        Some(Square::Occupied(Player::X))
    );
    assert_eq!(game.board_at(2), None);
}

#[test]
fn test_status_display() {
    let mut game = GameState::new();
    assert_eq!(game.status().to_string(), "Next player: X");
    game.apply_move(Center).unwrap();
    assert_eq!(game.status().to_string(), "Next player: O");
}
