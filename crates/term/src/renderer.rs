//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs are
//! written. The renderer also owns the terminal modes (raw mode, alternate
//! screen, mouse capture) and the bell used as the flip cue.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use tracing::{debug, warn};

use crate::fb::{CellStyle, FrameBuffer};

const BEL: u8 = 0x07;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame on screen; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
    bell_failed: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
            bell_failed: false,
        }
    }

    /// Raw mode, alternate screen and mouse capture for the board.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo `enter`. Called on every exit path, including errors.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint the whole board (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents; the caller renders the next frame
    /// into it, so no frame is ever cloned after the first.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.shown.as_mut() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_changed(prev, fb, &mut self.buf)?;
                std::mem::swap(prev, fb);
            }
            _ => {
                debug!(width = fb.width(), height = fb.height(), "full repaint");
                encode_all(fb, &mut self.buf)?;
                self.shown = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    /// Ring the terminal bell. Failures are logged once and otherwise ignored.
    pub fn bell(&mut self) {
        let res = self
            .stdout
            .write_all(&[BEL])
            .and_then(|_| self.stdout.flush());
        if let Err(e) = res {
            if !self.bell_failed {
                warn!(error = %e, "flip cue unavailable, continuing without sound");
                self.bell_failed = true;
            }
        }
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

/// Clear the screen and paint every row of `fb`.
fn encode_all(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = None;
    for y in 0..fb.height() {
        paint_run(fb, 0, y, fb.width(), &mut pen, out)?;
    }
    finish(out)
}

/// Paint only the runs of cells that differ between two same-sized frames.
fn encode_changed(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for (x, y, len) in changed_runs(prev, next) {
        paint_run(next, x, y, len, &mut pen, out)?;
    }
    finish(out)
}

fn paint_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    pen: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *pen != Some(cell.style) {
            set_pen(out, cell.style)?;
            *pen = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn set_pen(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    let (fg, bg) = (style.fg, style.bg);
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(Color::Rgb {
        r: fg.r,
        g: fg.g,
        b: fg.b,
    }))?;
    out.queue(SetBackgroundColor(Color::Rgb {
        r: bg.r,
        g: bg.g,
        b: bg.b,
    }))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// `(x, y, len)` for each horizontal run of differing cells, row by row.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let width = next.width();
    (0..next.height()).flat_map(move |y| {
        let differs = move |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        std::iter::from_fn(move || {
            while x < width && !differs(x) {
                x += 1;
            }
            if x >= width {
                return None;
            }
            let start = x;
            while x < width && differs(x) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn adjacent_changes_form_one_run() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(8, 2);
        let mut b = FrameBuffer::new(8, 2);

        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        b.set(7, 1, Cell { ch: 'Y', style });

        let runs: Vec<_> = changed_runs(&a, &b).collect();
        assert_eq!(runs, vec![(1, 0, 3), (7, 1, 1)]);
    }

    #[test]
    fn identical_frames_paint_nothing() {
        let a = FrameBuffer::new(8, 2);
        let b = a.clone();
        assert_eq!(changed_runs(&a, &b).count(), 0);

        let mut out = Vec::new();
        encode_changed(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        // Only the trailing style reset, no cursor moves.
        assert!(!text.contains('H'));
    }

    #[test]
    fn full_repaint_contains_text() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_str(0, 0, "PAIRS", CellStyle::default());
        let mut out = Vec::new();
        encode_all(&fb, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("PAIRS"));
    }

    #[test]
    fn changed_cells_are_painted_in_place() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(4, 3);
        let mut b = a.clone();
        b.set(2, 1, Cell { ch: '7', style });

        let mut out = Vec::new();
        encode_changed(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        // MoveTo is 1-based on the wire: row 2, column 3.
        assert!(text.contains("\x1b[2;3H"));
        assert!(text.contains('7'));
    }
}
