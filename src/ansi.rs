//! ANSI output for display frames.
//!
//! Frames are painted inline (no alternate screen): each line is written with
//! the SGR attributes its segment kind resolves to, and a repaint moves the
//! cursor back to the first line of the previous frame before overwriting it.

use crate::layout::{DisplayFrame, FrameLine};
use crate::style::{StyleHooks, TextAttributes};
use std::io::{self, Write};

/// Reset all attributes to default.
pub const RESET: &str = "\x1b[0m";

/// Clear entire line.
pub const CLEAR_LINE: &str = "\x1b[2K";

/// Hide cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Synchronous update sequences (for flicker-free rendering).
pub mod sync {
    /// Begin synchronized update.
    pub const BEGIN: &str = "\x1b[?2026h";
    /// End synchronized update.
    pub const END: &str = "\x1b[?2026l";
}

/// Move the cursor up `n` rows (no-op sequence for zero).
#[must_use]
pub fn cursor_up(n: usize) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("\x1b[{n}A")
    }
}

/// SGR sequence enabling `attrs`; empty string for no attributes.
#[must_use]
pub fn sgr(attrs: TextAttributes) -> String {
    let codes = attrs.sgr_codes();
    if codes.is_empty() {
        return String::new();
    }
    let params: Vec<String> = codes.iter().map(u8::to_string).collect();
    format!("\x1b[{}m", params.join(";"))
}

fn write_line<W: Write>(out: &mut W, line: &FrameLine, hooks: &StyleHooks) -> io::Result<()> {
    for segment in &line.segments {
        let attrs = hooks.resolve(segment.kind);
        if attrs.is_empty() {
            out.write_all(segment.text.as_bytes())?;
        } else {
            write!(out, "{}{}{RESET}", sgr(attrs), segment.text)?;
        }
    }
    Ok(())
}

/// Write a frame at the cursor, lines separated by CR LF.
pub fn paint_frame<W: Write>(out: &mut W, frame: &DisplayFrame, hooks: &StyleHooks) -> io::Result<()> {
    for (i, line) in frame.lines.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\r\n")?;
        }
        write_line(out, line, hooks)?;
    }
    Ok(())
}

/// Overwrite a frame previously painted with `previous_lines` lines.
///
/// Leaves the cursor at the end of the last line and returns the number of
/// lines painted, to pass as `previous_lines` next time. Pass `0` for the
/// first paint.
pub fn repaint_inline<W: Write>(
    out: &mut W,
    frame: &DisplayFrame,
    hooks: &StyleHooks,
    previous_lines: usize,
) -> io::Result<usize> {
    out.write_all(sync::BEGIN.as_bytes())?;
    out.write_all(cursor_up(previous_lines.saturating_sub(1)).as_bytes())?;
    for (i, line) in frame.lines.iter().enumerate() {
        if i > 0 {
            out.write_all(b"\r\n")?;
        }
        write!(out, "\r{CLEAR_LINE}")?;
        write_line(out, line, hooks)?;
    }
    out.write_all(sync::END.as_bytes())?;
    out.flush()?;
    Ok(frame.lines.len())
}
