//! Rotation engine tests - kick order and failure behavior

use blockfall::core::{rotate_clockwise, try_rotate, try_rotate_with, ActivePiece, Board};
use blockfall::types::{PieceKind, WALL_KICKS};

/// Horizontal I at (3, 10) rotates into board column 6, rows 10-13.
fn horizontal_i() -> ActivePiece {
    ActivePiece::at(PieceKind::I, (3, 10))
}

fn block(board: &mut Board, cells: &[(i32, i32)]) {
    for &(x, y) in cells {
        board.set(x, y, true);
    }
}

#[test]
fn test_in_place_rotation_is_preferred() {
    let board = Board::default();
    let mut piece = horizontal_i();
    assert_eq!(try_rotate_with(&board, &mut piece, &WALL_KICKS), Some((0, 0)));
    let cells: Vec<_> = piece.cells().collect();
    assert_eq!(cells, vec![(6, 10), (6, 11), (6, 12), (6, 13)]);
}

#[test]
fn test_left_two_is_tried_after_earlier_kicks() {
    let mut board = Board::default();
    // Columns 5-7 blocked at row 12 defeat the first six candidates.
    block(&mut board, &[(5, 12), (6, 12), (7, 12)]);

    let mut piece = horizontal_i();
    assert_eq!(try_rotate_with(&board, &mut piece, &WALL_KICKS), Some((-2, 0)));
    assert_eq!((piece.x, piece.y), (1, 10));
    assert!(piece.cells().all(|(x, _)| x == 4));
}

#[test]
fn test_right_two_is_the_last_resort() {
    let mut board = Board::default();
    block(&mut board, &[(4, 12), (5, 12), (6, 12), (7, 12)]);

    let mut piece = horizontal_i();
    assert_eq!(try_rotate_with(&board, &mut piece, &WALL_KICKS), Some((2, 0)));
    assert!(piece.cells().all(|(x, _)| x == 8));
}

#[test]
fn test_failed_rotation_leaves_piece_unchanged() {
    let mut board = Board::default();
    block(&mut board, &[(4, 12), (5, 12), (6, 12), (7, 12), (8, 12)]);

    let mut piece = horizontal_i();
    let before = piece;
    assert!(!try_rotate(&board, &mut piece));
    assert_eq!(piece, before);
}

#[test]
fn test_o_rotation_keeps_its_cells() {
    let board = Board::default();
    let mut piece = ActivePiece::at(PieceKind::O, (3, 5));
    let before: Vec<_> = piece.cells().collect();
    assert!(try_rotate(&board, &mut piece));
    let after: Vec<_> = piece.cells().collect();
    assert_eq!(before, after);
}

#[test]
fn test_rotation_is_clockwise() {
    // T points down in its canonical mask; one clockwise turn points it left.
    let t = blockfall::core::canonical_mask(PieceKind::T);
    let r = rotate_clockwise(&t);
    let cells: Vec<_> = (0..4)
        .flat_map(|row| (0..4).map(move |col| (col, row)))
        .filter(|&(col, row)| r[row][col])
        .collect();
    assert_eq!(cells, vec![(2, 1), (1, 2), (2, 2), (2, 3)]);
}
