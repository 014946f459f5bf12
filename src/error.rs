//! Error types for braille contraction.

use std::fmt;
use std::io;

/// Result type alias for contraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for contraction operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while locating translation tables.
    Io(io::Error),
    /// The translation capability cannot be used at all (e.g. no tables).
    Configuration(String),
    /// The translation capability failed on one input.
    PortFailure { table: String, message: String },
    /// Cursor offset beyond the end of the line.
    CursorOutOfRange { cursor: usize, len: usize },
    /// Position arrays that break the indexing convention.
    InvalidMapping(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Configuration(s) => write!(f, "translation not configured: {s}"),
            Self::PortFailure { table, message } => {
                write!(f, "translation with table '{table}' failed: {message}")
            }
            Self::CursorOutOfRange { cursor, len } => {
                write!(f, "cursor {cursor} out of range for line of length {len}")
            }
            Self::InvalidMapping(s) => write!(f, "invalid position mapping: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
