//! Rotation engine - clockwise mask rotation with wall kicks
//!
//! A rotation first tries the rotated mask in place, then each kick offset in
//! table order, and applies the first placement that does not collide. If none
//! fits the piece is left exactly as it was.

use crate::board::Board;
use crate::pieces::{ActivePiece, Mask};
use crate::types::WALL_KICKS;

/// Rotate a 4x4 mask 90° clockwise (transpose, then reverse each row).
pub fn rotate_clockwise(mask: &Mask) -> Mask {
    let mut out = [[false; 4]; 4];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = mask[3 - j][i];
        }
    }
    out
}

/// Rotate `piece` clockwise using the reference kick table.
///
/// Returns true if the piece was rotated.
pub fn try_rotate(board: &Board, piece: &mut ActivePiece) -> bool {
    try_rotate_with(board, piece, &WALL_KICKS).is_some()
}

/// Rotate `piece` clockwise, trying `kicks` after the in-place placement.
///
/// Returns the applied offset (`(0, 0)` for an in-place rotation), or None if
/// every candidate collided and the piece is unchanged.
pub fn try_rotate_with(
    board: &Board,
    piece: &mut ActivePiece,
    kicks: &[(i32, i32)],
) -> Option<(i32, i32)> {
    let rotated = rotate_clockwise(&piece.mask);

    let offset = std::iter::once((0, 0))
        .chain(kicks.iter().copied())
        .find(|&(dx, dy)| !board.collides(&rotated, piece.x + dx, piece.y + dy))?;

    piece.mask = rotated;
    piece.x += offset.0;
    piece.y += offset.1;
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{canonical_mask, mask_cells};
    use crate::types::PieceKind;

    #[test]
    fn rotating_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let start = canonical_mask(kind);
            let mut m = start;
            for _ in 0..4 {
                m = rotate_clockwise(&m);
            }
            assert_eq!(m, start, "{kind:?}");
        }
    }

    #[test]
    fn i_piece_rotates_into_last_column() {
        let rotated = rotate_clockwise(&canonical_mask(PieceKind::I));
        let cells: Vec<_> = mask_cells(&rotated).collect();
        assert_eq!(cells, vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn in_place_rotation_wins_on_open_board() {
        let board = Board::default();
        let mut piece = ActivePiece::at(PieceKind::T, (3, 5));
        assert_eq!(try_rotate_with(&board, &mut piece, &WALL_KICKS), Some((0, 0)));
        assert_eq!((piece.x, piece.y), (3, 5));
        assert_eq!(piece.mask, rotate_clockwise(&canonical_mask(PieceKind::T)));
    }

    #[test]
    fn failed_rotation_leaves_piece_untouched() {
        let mut board = Board::default();
        // Fill everything except the T's current cells.
        let piece0 = ActivePiece::at(PieceKind::T, (3, 5));
        let own: Vec<_> = piece0.cells().collect();
        for y in 0..20 {
            for x in 0..10 {
                if !own.contains(&(x, y)) {
                    board.set(x, y, true);
                }
            }
        }
        let mut piece = piece0;
        assert!(!try_rotate(&board, &mut piece));
        assert_eq!(piece, piece0);
    }

    #[test]
    fn kick_table_is_only_consulted_after_in_place_fails() {
        let mut board = Board::default();
        // Vertical I (mask column 3) standing in board column 9.
        let mut vertical = ActivePiece::at(PieceKind::I, (6, 5));
        vertical.mask = rotate_clockwise(&vertical.mask);
        // Rotating back lands on mask row 3, i.e. board row 8, columns 6..=9.
        board.set(7, 8, true);

        let mut piece = vertical;
        assert_eq!(try_rotate_with(&board, &mut piece, &[]), None);
        assert_eq!(piece, vertical);

        // Left 1 still hits (7, 8), right 1 leaves the board, up 1 fits.
        assert_eq!(
            try_rotate_with(&board, &mut piece, &WALL_KICKS),
            Some((0, -1))
        );
        assert_eq!((piece.x, piece.y), (6, 4));
    }
}
