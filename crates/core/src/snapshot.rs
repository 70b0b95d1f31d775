use crate::pieces::{mask_cells, ActivePiece, Mask};
use crate::session::Phase;
use crate::types::{PieceKind, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl ActiveSnapshot {
    /// Board coordinates `(x, y)` of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        mask_cells(&self.mask).map(move |(c, r)| (self.x + c, self.y + r))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            mask: value.mask,
            x: value.x,
            y: value.y,
            color: value.color(),
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major occupancy, `height * width` cells
    pub board: Vec<bool>,
    pub active: Option<ActiveSnapshot>,
    pub player: String,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Occupancy of locked cell (x, y); false when out of bounds
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.board[y * self.width + x]
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            player: String::new(),
            score: 0,
            lines: 0,
            phase: Phase::Falling,
        }
    }
}
