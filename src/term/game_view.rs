//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The color palette lives here: the core only knows color indices 1..=6,
//! and this view decides what they look like on screen.

use crate::core::GameState;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{COLOR_COUNT, EMPTY_CELL, GRID_HEIGHT, GRID_WIDTH};

/// Fixed palette for the six block colors, indexed by `color - 1`.
pub const PALETTE: [Rgb; COLOR_COUNT as usize] = [
    Rgb::new(255, 107, 107),
    Rgb::new(78, 205, 196),
    Rgb::new(69, 183, 209),
    Rgb::new(255, 160, 122),
    Rgb::new(152, 216, 200),
    Rgb::new(247, 220, 111),
];

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

/// A lightweight terminal view of the game state.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid_px_w = (GRID_WIDTH as u16) * self.cell_w;
        let grid_px_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(26, 26, 46),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        // Play area background and border.
        fb.fill_rect(start_x + 1, start_y + 1, grid_px_w, grid_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked grid cells.
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let color = state.grid().get(x, y);
                if color != EMPTY_CELL {
                    self.draw_grid_cell(&mut fb, start_x, start_y, x as u16, y as u16, color);
                }
            }
        }

        // Active piece; rows still above the grid are not drawn.
        if let Some(piece) = state.active() {
            for (x, y) in piece.cells() {
                if x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8 {
                    self.draw_grid_cell(&mut fb, start_x, start_y, x as u16, y as u16, piece.color);
                }
            }
        }

        self.draw_side_panel(&mut fb, state, viewport, start_x, start_y, frame_w);

        // Overlays.
        if !state.running() && !state.game_over() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER");
        } else if state.paused() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if state.game_over() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
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

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: u8,
    ) {
        debug_assert!(color >= 1 && color <= COLOR_COUNT);
        let style = CellStyle {
            fg: PALETTE[(color - 1) as usize],
            bg: Rgb::new(26, 26, 46),
            bold: true,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &state.score().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &state.level().to_string(), value);
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
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;

    fn screen_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).unwrap().ch);
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_screen_prompts_for_enter() {
        let state = GameState::new(1);
        let view = GameView::default();
        let fb = view.render(&state, Viewport::new(80, 24));

        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
        assert!(screen_text(&fb).contains("PRESS ENTER"));
    }

    #[test]
    fn running_screen_shows_score_labels_and_piece() {
        let mut state = GameState::new(1);
        state.start();

        let view = GameView::default();
        let fb = view.render(&state, Viewport::new(80, 24));
        let text = screen_text(&fb);

        assert!(text.contains("SCORE"));
        assert!(text.contains("LEVEL"));
        assert!(text.contains('█'));
        assert!(!text.contains("PRESS ENTER"));
    }

    #[test]
    fn paused_overlay_is_drawn() {
        let mut state = GameState::new(1);
        state.start();
        state.apply_action(GameAction::TogglePause);

        let view = GameView::default();
        let fb = view.render(&state, Viewport::new(80, 24));
        assert!(screen_text(&fb).contains("PAUSED"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut state = GameState::new(1);
        state.start();

        let view = GameView::new(1, 1);
        let fb = view.render(&state, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
    }
}
