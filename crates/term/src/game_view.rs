//! GameView: maps a core [`Board`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_snek_core::{Board, GridConfig, Phase, Segment};

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

/// Session facts the header and overlays display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView {
    pub score: u32,
    /// Ticks per second, shown with one decimal.
    pub speed: f32,
    pub phase: Phase,
    pub paused: bool,
}

// Green head, gray body, blue tail, red apple, brown droppings.
const HEAD: Rgb = Rgb::new(0, 160, 0);
const BODY: Rgb = Rgb::new(128, 128, 128);
const BODY_FED: Rgb = Rgb::new(160, 160, 160);
const TAIL: Rgb = Rgb::new(60, 60, 220);
const APPLE: Rgb = Rgb::new(200, 0, 0);
const DROPPING: Rgb = Rgb::new(139, 69, 19);
const FIELD_BG: Rgb = Rgb::new(18, 22, 18);

/// A lightweight terminal view for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
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

    /// Render one frame into an existing framebuffer.
    ///
    /// `board` is `None` while the session is idle; the play area still
    /// draws so the prompt overlay has somewhere to sit.
    pub fn render_into(
        &self,
        board: Option<&Board>,
        grid: GridConfig,
        hud: HudView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let field_w = grid.width * self.cell_w;
        let field_h = grid.height * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // One row above the frame is reserved for the header.
        let start_y = 1 + viewport.height.saturating_sub(frame_h + 1) / 2;

        let field = CellStyle::plain(Rgb::new(70, 80, 70), FIELD_BG);
        let border = CellStyle::plain(Rgb::new(120, 200, 120), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_header(fb, hud, start_x, start_y, frame_w);

        if let Some(board) = board {
            for cell in board.droppings.iter() {
                self.fill_board_cell(
                    fb,
                    start_x,
                    start_y,
                    cell.x,
                    cell.y,
                    '▒',
                    CellStyle::plain(DROPPING, FIELD_BG),
                );
            }

            self.fill_board_cell(
                fb,
                start_x,
                start_y,
                board.apple.x,
                board.apple.y,
                '●',
                CellStyle::plain(APPLE, FIELD_BG),
            );

            let tail_index = board.len() - 1;
            for (i, segment) in board.snake.iter().enumerate() {
                let (ch, style) = self.segment_glyph(segment, i, tail_index);
                self.fill_board_cell(fb, start_x, start_y, segment.cell.x, segment.cell.y, ch, style);
            }
        }

        if hud.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else {
            match hud.phase {
                Phase::Idle => {
                    self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS AN ARROW KEY")
                }
                Phase::Dead => {
                    self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER - R RESTARTS")
                }
                Phase::Active => {}
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        board: Option<&Board>,
        grid: GridConfig,
        hud: HudView,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, grid, hud, viewport, &mut fb);
        fb
    }

    /// Pick glyph and color for one snake segment.
    ///
    /// Turns (where the segment entered and left on non-collinear headings)
    /// render shaded; a segment still carrying its meal renders brighter; the
    /// head goes bold while something edible is straight ahead.
    fn segment_glyph(&self, segment: &Segment, index: usize, tail_index: usize) -> (char, CellStyle) {
        if index == 0 {
            let mut style = CellStyle::plain(HEAD, FIELD_BG);
            style.bold = segment.about_to_eat;
            return ('█', style);
        }

        let color = if index == tail_index {
            TAIL
        } else if segment.has_eaten {
            BODY_FED
        } else {
            BODY
        };

        let straight = match segment.exited_to {
            Some(to) => to == segment.entered_from.opposite(),
            None => true,
        };
        let ch = if straight { '█' } else { '▓' };

        (ch, CellStyle::plain(color, FIELD_BG))
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_header(&self, fb: &mut FrameBuffer, hud: HudView, start_x: u16, start_y: u16, frame_w: u16) {
        let header_y = start_y.saturating_sub(1);
        let style = CellStyle::default();

        let speed = format!("Speed: {:.1}", hud.speed);
        let score = format!("Score: {}", hud.score);
        let title = "S N E K";

        fb.put_str(start_x, header_y, &speed, style);
        let title_x = start_x + (frame_w.saturating_sub(title.len() as u16)) / 2;
        let mut bold = style;
        bold.bold = true;
        fb.put_str(title_x, header_y, title, bold);
        let score_x = start_x + frame_w.saturating_sub(score.len() as u16);
        fb.put_str(score_x, header_y, &score, style);
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
        let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
        let y = start_y + frame_h / 2;
        let mut style = CellStyle::default();
        style.bold = true;
        fb.put_str(x, y, text, style);
    }
}
