//! Exhaustive checks of win evaluation against a brute-force reference.

use tictactoe_history::{Board, LINES, Player, Position, Square, evaluate, is_full};

/// Decodes a base-3 number into a board (0 empty, 1 X, 2 O per square).
fn board_from_code(mut code: u32) -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        let square = match code % 3 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        };
        board.set(pos, square);
        code /= 3;
    }
    board
}

fn uniform(board: &Board, line: [Position; 3]) -> Option<Player> {
    match board.get(line[0]) {
        Square::Occupied(p) if line.iter().all(|&pos| board.get(pos) == Square::Occupied(p)) => {
            Some(p)
        }
        _ => None,
    }
}

#[test]
fn test_evaluate_matches_first_uniform_line_on_every_board() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let expected = LINES
            .iter()
            .find_map(|&line| uniform(&board, line).map(|p| (p, line)));

        let actual = evaluate(&board).map(|win| (win.winner, win.line));
        assert_eq!(actual, expected, "board:\n{}", board.display());
    }
}

#[test]
fn test_line_order_is_rows_columns_diagonals() {
    let indices: Vec<[usize; 3]> = LINES.iter().map(|l| l.map(Position::to_index)).collect();
    assert_eq!(
        indices,
        vec![
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}

#[test]
fn test_is_full_only_without_empty_squares() {
    assert!(!is_full(&board_from_code(0)));
    assert!(is_full(&board_from_code(3u32.pow(9) - 1)));
}
