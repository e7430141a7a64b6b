//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, COLS, ROWS};

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

/// Draws the board frame, column headers, the next/peek panel, the move
/// counter and the diagnostic line.
pub struct GameView {
    /// Board cell width in terminal columns; wide enough for " 4096 ".
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 6 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render a snapshot into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (COLS as u16) * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = ROWS as u16 + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 3) / 2 + 1;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, ROWS as u16, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_headers(&mut fb, start_x, start_y);
        self.draw_cells(&mut fb, snap, start_x, start_y);
        self.draw_panel(&mut fb, snap, start_x + frame_w + 2, start_y);

        // Diagnostic line under the frame.
        fb.put_str(
            start_x + 1,
            start_y + frame_h,
            snap.message,
            CellStyle::default(),
        );

        if snap.status == GameStatus::Lost {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_headers(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let style = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        let y = start_y.saturating_sub(1);
        for col in 0..COLS as u16 {
            let x = start_x + 1 + col * self.cell_w + self.cell_w / 2;
            fb.put_str(x, y, &format!("{}", col + 1), style);
        }
    }

    fn draw_cells(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16) {
        let value_style = CellStyle {
            fg: Rgb::new(240, 220, 80),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        let empty_style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };

        for col in 0..COLS {
            for row in 0..ROWS {
                // Row 0 is the bottom of the board, the last screen row.
                let x = start_x + 1 + (col as u16) * self.cell_w;
                let y = start_y + 1 + (ROWS - 1 - row) as u16;
                let v = snap.board[col][row];
                if v == 0 {
                    fb.put_char(x + self.cell_w / 2, y, '·', empty_style);
                } else {
                    fb.put_str(x, y, &format!("{:>5} ", v), value_style);
                }
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16, start_y: u16) {
        if panel_x + PANEL_W > fb.width() {
            return;
        }
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        fb.put_str(panel_x, y, &format!("[[ {} ]] {}", snap.next, snap.peek), value);
        y += 2;
        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_str(panel_x, y, &format!("{}", snap.moves), value);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Width reserved for the next/peek panel to the right of the frame.
const PANEL_W: u16 = 16;
