//! Pieces module - the tetromino catalog and the falling piece
//!
//! Every shape is a fixed 4x4 occupancy mask, whatever its true bounding box,
//! so rotation is the same matrix operation for all seven kinds.

use crate::types::{PieceKind, Rgb, SPAWN_POSITION};

/// 4x4 occupancy mask, indexed `[row][col]`
pub type Mask = [[bool; 4]; 4];

/// Catalog entry for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub mask: Mask,
    pub color: Rgb,
}

/// Display color of every locked cell
pub const LOCKED_COLOR: Rgb = Rgb::new(0, 240, 240);

const fn mask(rows: [[u8; 4]; 4]) -> Mask {
    let mut out = [[false; 4]; 4];
    let mut r = 0;
    while r < 4 {
        let mut c = 0;
        while c < 4 {
            out[r][c] = rows[r][c] == 1;
            c += 1;
        }
        r += 1;
    }
    out
}

/// Canonical (unrotated) shapes and colors, in [`PieceKind::ALL`] order
static CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        mask: mask([[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Rgb::new(0, 240, 240),
    },
    PieceDef {
        kind: PieceKind::O,
        mask: mask([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
        color: Rgb::new(240, 240, 0),
    },
    PieceDef {
        kind: PieceKind::T,
        mask: mask([[0, 0, 0, 0], [0, 1, 1, 1], [0, 0, 1, 0], [0, 0, 0, 0]]),
        color: Rgb::new(160, 0, 240),
    },
    PieceDef {
        kind: PieceKind::S,
        mask: mask([[0, 0, 0, 0], [0, 0, 1, 1], [0, 1, 1, 0], [0, 0, 0, 0]]),
        color: Rgb::new(0, 240, 0),
    },
    PieceDef {
        kind: PieceKind::Z,
        mask: mask([[0, 0, 0, 0], [0, 1, 1, 0], [0, 0, 1, 1], [0, 0, 0, 0]]),
        color: Rgb::new(240, 0, 0),
    },
    PieceDef {
        kind: PieceKind::J,
        mask: mask([[0, 0, 0, 0], [0, 1, 1, 1], [0, 0, 0, 1], [0, 0, 0, 0]]),
        color: Rgb::new(0, 0, 240),
    },
    PieceDef {
        kind: PieceKind::L,
        mask: mask([[0, 0, 0, 0], [0, 1, 1, 1], [0, 1, 0, 0], [0, 0, 0, 0]]),
        color: Rgb::new(240, 160, 0),
    },
];

/// Catalog entry for a piece kind
pub fn piece_def(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.index()]
}

/// Copy of the canonical mask for a piece kind
pub fn canonical_mask(kind: PieceKind) -> Mask {
    piece_def(kind).mask
}

/// Display color for a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    piece_def(kind).color
}

/// Occupied cells of a mask as `(col, row)` offsets
pub fn mask_cells(mask: &Mask) -> impl Iterator<Item = (i32, i32)> + '_ {
    mask.iter().enumerate().flat_map(|(r, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(move |(c, _)| (c as i32, r as i32))
    })
}

/// The falling piece: a working copy of a catalog mask plus its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub mask: Mask,
    /// Board column of the mask's left edge
    pub x: i32,
    /// Board row of the mask's top edge
    pub y: i32,
}

impl ActivePiece {
    /// New piece of `kind` at the reference spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_POSITION)
    }

    /// New piece of `kind` with its canonical mask at `anchor`
    pub fn at(kind: PieceKind, anchor: (i32, i32)) -> Self {
        Self {
            kind,
            mask: canonical_mask(kind),
            x: anchor.0,
            y: anchor.1,
        }
    }

    pub fn color(&self) -> Rgb {
        piece_color(self.kind)
    }

    /// Board coordinates `(x, y)` of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        mask_cells(&self.mask).map(move |(c, r)| (self.x + c, self.y + r))
    }
}
