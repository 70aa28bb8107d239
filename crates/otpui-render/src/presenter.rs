#![forbid(unsafe_code)]

//! Serializes a frame to ANSI escape sequences.
//!
//! Full-repaint presenter: every `present` call repositions to the origin
//! and rewrites the grid row by row, coalescing SGR changes across runs of
//! identically-styled cells. The scratch buffer is reused across calls so
//! steady-state presenting does not allocate.

use core::fmt::Write as _;
use std::io::{self, Write};

use crate::cell::{PackedRgba, StyleFlags};
use crate::frame::Frame;

const SGR_RESET: &str = "\x1b[0m";
const CURSOR_HIDE: &str = "\x1b[?25l";
const CURSOR_SHOW: &str = "\x1b[?25h";

/// Writes frames to a terminal as ANSI escape sequences.
#[derive(Debug, Default)]
pub struct Presenter {
    scratch: String,
}

impl Presenter {
    /// Create a new presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the frame and write it to `out` in a single syscall.
    pub fn present<W: Write>(&mut self, frame: &Frame, out: &mut W) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "present",
            w = frame.buffer.width(),
            h = frame.buffer.height()
        )
        .entered();

        self.scratch.clear();
        self.scratch.push_str(CURSOR_HIDE);

        let width = frame.buffer.width();
        let height = frame.buffer.height();
        for y in 0..height {
            push_cursor_to(&mut self.scratch, 0, y);
            let mut last_sgr: Option<(PackedRgba, PackedRgba, StyleFlags)> = None;
            for x in 0..width {
                let Some(cell) = frame.buffer.get(x, y) else {
                    continue;
                };
                let key = (cell.fg, cell.bg, cell.attrs.flags());
                if last_sgr != Some(key) {
                    push_sgr(&mut self.scratch, cell.fg, cell.bg, cell.attrs.flags());
                    last_sgr = Some(key);
                }
                self.scratch.push(cell.content.as_char().unwrap_or(' '));
            }
        }

        self.scratch.push_str(SGR_RESET);
        if let Some((x, y)) = frame.cursor_position {
            push_cursor_to(&mut self.scratch, x, y);
            self.scratch.push_str(CURSOR_SHOW);
        }

        out.write_all(self.scratch.as_bytes())?;
        out.flush()
    }
}

fn push_cursor_to(buf: &mut String, x: u16, y: u16) {
    // CUP is 1-indexed.
    let _ = write!(buf, "\x1b[{};{}H", y as u32 + 1, x as u32 + 1);
}

fn push_sgr(buf: &mut String, fg: PackedRgba, bg: PackedRgba, flags: StyleFlags) {
    buf.push_str("\x1b[0");
    if flags.contains(StyleFlags::BOLD) {
        buf.push_str(";1");
    }
    if flags.contains(StyleFlags::DIM) {
        buf.push_str(";2");
    }
    if flags.contains(StyleFlags::ITALIC) {
        buf.push_str(";3");
    }
    if flags.contains(StyleFlags::UNDERLINE) {
        buf.push_str(";4");
    }
    if flags.contains(StyleFlags::REVERSE) {
        buf.push_str(";7");
    }
    if flags.contains(StyleFlags::STRIKETHROUGH) {
        buf.push_str(";9");
    }
    if !fg.is_default() {
        let _ = write!(buf, ";38;2;{};{};{}", fg.r(), fg.g(), fg.b());
    }
    if !bg.is_default() {
        let _ = write!(buf, ";48;2;{};{};{}", bg.r(), bg.g(), bg.b());
    }
    buf.push('m');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, StyleFlags};

    fn present_to_string(frame: &Frame) -> String {
        let mut presenter = Presenter::new();
        let mut out = Vec::new();
        presenter
            .present(frame, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("presenter emits valid UTF-8")
    }

    #[test]
    fn presents_cell_content() {
        let mut frame = Frame::new(3, 1);
        frame.buffer.set(0, 0, Cell::from_char('4'));
        frame.buffer.set(1, 0, Cell::from_char('2'));
        let out = present_to_string(&frame);
        assert!(out.contains("42 "));
    }

    #[test]
    fn hides_cursor_without_position() {
        let frame = Frame::new(2, 1);
        let out = present_to_string(&frame);
        assert!(out.starts_with(CURSOR_HIDE));
        assert!(!out.contains(CURSOR_SHOW));
    }

    #[test]
    fn shows_cursor_at_position() {
        let mut frame = Frame::new(5, 2);
        frame.set_cursor(Some((3, 1)));
        let out = present_to_string(&frame);
        assert!(out.contains(CURSOR_SHOW));
        // CUP is 1-indexed: (3, 1) -> row 2, column 4.
        assert!(out.ends_with(&format!("\x1b[2;4H{CURSOR_SHOW}")));
    }

    #[test]
    fn truecolor_sequence_for_colored_cell() {
        let mut frame = Frame::new(1, 1);
        let mut cell = Cell::from_char('x');
        cell.fg = PackedRgba::rgb(1, 2, 3);
        frame.buffer.set(0, 0, cell);
        let out = present_to_string(&frame);
        assert!(out.contains("38;2;1;2;3"));
    }

    #[test]
    fn sgr_coalesced_across_identical_run() {
        let mut frame = Frame::new(3, 1);
        let mut cell = Cell::from_char('a');
        cell.attrs = cell.attrs.with_flags(StyleFlags::BOLD);
        for x in 0..3 {
            frame.buffer.set(x, 0, cell);
        }
        let out = present_to_string(&frame);
        // One SGR for the run, not one per cell.
        assert_eq!(out.matches("\x1b[0;1m").count(), 1);
    }

    #[test]
    fn ends_with_reset_when_cursor_hidden() {
        let frame = Frame::new(1, 1);
        let out = present_to_string(&frame);
        assert!(out.ends_with(SGR_RESET));
    }
}
