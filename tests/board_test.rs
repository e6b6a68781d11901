//! Tests for the board: moves, lines, draws and copies.

use tictaco::{Board, BoardError, CELL_COUNT, Figure, RandomAgent};

fn x() -> Figure {
    Figure::new("X")
}

fn o() -> Figure {
    Figure::new("O")
}

fn play(board: &mut Board, moves: &[(usize, &Figure)]) {
    for (pos, figure) in moves {
        assert!(board.make_move(*pos, figure), "move {pos} refused");
    }
}

#[test]
fn test_initial_board_empty() {
    let board = Board::new();
    assert_eq!(board.available_moves(), (1..=9).collect::<Vec<_>>());
    assert_eq!(board.check_winner(), None);
    assert!(!board.is_full());
}

#[test]
fn test_make_valid_move() {
    let mut board = Board::new();
    assert!(board.make_move(1, &x()));
    assert!(!board.is_valid_move(1));
    assert!(!board.available_moves().contains(&1));
}

#[test]
fn test_reject_invalid_move_numbers() {
    let mut board = Board::new();
    assert!(!board.make_move(0, &x()));
    assert!(!board.make_move(10, &x()));
    assert_eq!(board, Board::new());
}

#[test]
fn test_reject_occupied_cell() {
    let mut board = Board::new();
    assert!(board.make_move(1, &x()));
    let before = board.clone();
    assert!(!board.make_move(1, &o()));
    assert_eq!(board, before);
    assert_eq!(board.try_move(1, &o()), Err(BoardError::Occupied(1)));
}

#[test]
fn test_row_win() {
    let mut board = Board::new();
    play(&mut board, &[(1, &x()), (2, &x()), (3, &x())]);
    assert_eq!(board.check_winner(), Some(x()));
}

#[test]
fn test_col_win() {
    let mut board = Board::new();
    play(&mut board, &[(1, &o()), (4, &o()), (7, &o())]);
    assert_eq!(board.check_winner(), Some(o()));
}

#[test]
fn test_diag_win() {
    let mut board = Board::new();
    play(&mut board, &[(1, &x()), (5, &x()), (9, &x())]);
    assert_eq!(board.check_winner(), Some(x()));
}

#[test]
fn test_antidiag_win() {
    let mut board = Board::new();
    play(&mut board, &[(3, &o()), (5, &o()), (7, &o())]);
    assert_eq!(board.check_winner(), Some(o()));
}

#[test]
fn test_draw() {
    let (x, o) = (x(), o());
    let mut board = Board::new();
    play(
        &mut board,
        &[
            (1, &x),
            (2, &o),
            (3, &x),
            (6, &o),
            (5, &x),
            (4, &x),
            (7, &o),
            (8, &x),
            (9, &o),
        ],
    );
    assert_eq!(board.check_winner(), None);
    assert!(board.is_full());
    assert!(board.available_moves().is_empty());
}

#[test]
fn test_available_moves_complement_occupied() {
    let mut board = Board::new();
    play(&mut board, &[(2, &x()), (9, &o()), (4, &x())]);
    let available = board.available_moves();
    assert_eq!(available, vec![1, 3, 5, 6, 7, 8]);
    assert_eq!(available.len() + 3, CELL_COUNT);
    assert!(available.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_clone_is_independent() {
    let mut board = Board::new();
    play(&mut board, &[(5, &x())]);
    let mut copy = board.clone();
    assert_eq!(copy, board);

    assert!(copy.make_move(1, &o()));
    assert!(board.is_valid_move(1));
    assert!(board.make_move(9, &o()));
    assert!(copy.is_valid_move(9));
}

#[test]
fn test_only_three_by_three() {
    assert!(Board::with_size(3).is_ok());
    assert_eq!(Board::with_size(4), Err(BoardError::UnsupportedSize(4)));
}

#[test]
fn test_cursor_move_respects_occupancy() {
    let mut board = Board::new();
    assert!(board.apply_cursor_move(&x()));
    assert!(!board.apply_cursor_move(&o()));
    assert_eq!(board.cursor_position(), 1);
}

#[test]
fn test_available_moves_agree_with_is_valid_move() {
    let figures = [x(), o()];
    for seed in 0..25 {
        let mut agent = RandomAgent::seeded(seed);
        let mut board = Board::new();
        for turn in 0..CELL_COUNT {
            let available = board.available_moves();
            let valid: Vec<usize> = (1..=CELL_COUNT).filter(|&p| board.is_valid_move(p)).collect();
            assert_eq!(available, valid);
            assert_eq!(available.len() + turn, CELL_COUNT);

            let figure = &figures[turn % 2];
            let pos = agent.choose_move(&board, figure).unwrap();
            assert!(board.make_move(pos, figure));
        }
        assert!(board.is_full());
    }
}
