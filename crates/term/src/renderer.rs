//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full-frame redraws with style-run coalescing. The board is small enough
//! that diffing against the previous frame buys nothing at a 100ms cadence.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
///
/// Style changes are only emitted when the style actually changes, so runs
/// of same-styled cells cost one escape sequence.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let glyph = fb.get(x, y).unwrap_or_default();
            if current_style != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current_style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_emits_every_glyph() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        for (i, ch) in ['a', 'b', 'c', 'd', 'e', 'f'].into_iter().enumerate() {
            fb.put_char((i % 3) as u16, (i / 3) as u16, ch, style);
        }

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        for ch in ['a', 'b', 'c', 'd', 'e', 'f'] {
            assert!(text.contains(ch), "missing {ch}");
        }
    }

    #[test]
    fn test_style_runs_are_coalesced() {
        let mut fb = FrameBuffer::new(4, 1);
        let style = CellStyle::default();
        for x in 0..4 {
            fb.put_char(x, 0, '#', style);
        }

        let mut uniform = Vec::new();
        encode_frame_into(&fb, &mut uniform).unwrap();

        let mut alternating_fb = FrameBuffer::new(4, 1);
        let mut red = CellStyle::default();
        red.fg = Rgb::new(255, 0, 0);
        for x in 0..4 {
            let s = if x % 2 == 0 { style } else { red };
            alternating_fb.put_char(x, 0, '#', s);
        }
        let mut alternating = Vec::new();
        encode_frame_into(&alternating_fb, &mut alternating).unwrap();

        // Same glyphs, more style switches, more bytes.
        assert!(alternating.len() > uniform.len());
    }
}
