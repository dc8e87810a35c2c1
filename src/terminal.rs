//! Minimal terminal queries for inline painting.

// Required for libc FFI (isatty, ioctl).
#![allow(unsafe_code)]

use std::io;
use std::os::unix::io::AsRawFd;

/// Check if a file descriptor is a TTY.
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Get the terminal size as `(columns, rows)`.
///
/// Fails when stdout is not a terminal or reports zero dimensions.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    // SAFETY: winsize is plain old data; all-zero is a valid value
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

/// Truncate `line` to at most `columns` display columns.
#[must_use]
pub fn clip_to_width(line: &str, columns: usize) -> &str {
    use unicode_width::UnicodeWidthChar;

    let mut used = 0;
    for (idx, c) in line.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            return &line[..idx];
        }
        used += w;
    }
    line
}
