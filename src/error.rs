//! Error types for decrypt_text.
//!
//! The animation core never fails; errors only come from the outer surfaces
//! (parsing option names, writing frames to a terminal).

use std::fmt;
use std::io;

/// Result type alias for decrypt_text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for decrypt_text operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while painting to the terminal.
    Io(io::Error),
    /// An option value that could not be parsed (e.g. `--direction sideways`).
    InvalidOption {
        option: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidOption { option, value } => {
                write!(f, "invalid value for {option}: {value:?}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidOption { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
