//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Phase, LOCKED_COLOR};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

/// Draws the board, the falling piece and a score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up typical terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::default().cell(' '));

        let board_w = snap.width as u16 * self.cell_w;
        let board_h = snap.height as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let empty = CellStyle::new(Rgb::new(70, 70, 80), PLAYFIELD_BG);
        let locked = CellStyle::new(LOCKED_COLOR, PLAYFIELD_BG);
        for y in 0..snap.height {
            for x in 0..snap.width {
                let (ch, style) = if snap.occupied(x, y) {
                    (BLOCK, locked)
                } else {
                    ('·', empty)
                };
                self.fill_cell(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }

        if let Some(active) = snap.active.as_ref() {
            let style = CellStyle::new(active.color, PLAYFIELD_BG).bold();
            for (x, y) in active.cells() {
                // Cells above the top edge are not drawn.
                if x >= 0 && y >= 0 && (x as usize) < snap.width && (y as usize) < snap.height {
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, BLOCK, style);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        match snap.phase {
            Phase::GameOver => self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
            Phase::Quit => self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "QUIT"),
            Phase::Falling => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for dx in x + 1..right {
            fb.put_char(dx, y, '─', style);
            fb.put_char(dx, bottom, '─', style);
        }
        for dy in y + 1..bottom {
            fb.put_char(x, dy, '│', style);
            fb.put_char(right, dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "PLAYER", label);
        fb.put_str(panel_x, y + 1, &snap.player, value);
        y += 3;

        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        for line in ["←/→ move", "↓ drop", "↑ rotate", "esc quit"] {
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, start_y + frame_h / 2, text, style);
    }
}
