//! Board module - the occupancy grid
//!
//! Each cell is either empty or occupied; locked pieces lose their identity.
//! Cells live in a flat row-major vector sized once at construction.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Rows above the board (y < 0) are legal for piece cells.

use crate::pieces::Mask;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Fixed-size occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy at (x, y), or None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set occupancy at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Within bounds and occupied
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    /// Would `mask` anchored at (x, y) overlap a wall, the floor or a locked cell?
    ///
    /// Cells above the top edge only collide through their column.
    pub fn collides(&self, mask: &Mask, x: i32, y: i32) -> bool {
        for (c, r) in crate::pieces::mask_cells(mask) {
            let col = x + c;
            let row = y + r;
            if col < 0 || col as usize >= self.width {
                return true;
            }
            if row >= self.height as i32 {
                return true;
            }
            if row >= 0 && self.is_occupied(col, row) {
                return true;
            }
        }
        false
    }

    /// Write the occupied cells of `mask` anchored at (x, y) into the grid.
    ///
    /// Cells outside the board (including rows above it) are dropped.
    pub fn lock(&mut self, mask: &Mask, x: i32, y: i32) {
        for (c, r) in crate::pieces::mask_cells(mask) {
            self.set(x + c, y + r, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).map_or(false, |row| row.iter().all(|&cell| cell))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Remove row `y`: every row above it moves down by one and row 0 empties.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }
        let width = self.width;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(false);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top; after a clear the same index is checked again
    /// because the row above has just moved into it.
    pub fn clear_completed_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
