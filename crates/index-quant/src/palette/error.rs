//! Error types for palette operations

use std::fmt;
use std::io;

/// Error type for palette loading.
///
/// Returned when a palette byte source cannot be read or does not hold
/// exactly 256 RGB triples.
#[derive(Debug)]
pub enum PaletteError {
    /// Byte source length differs from 768 (256 entries x 3 bytes)
    InvalidPaletteSize {
        /// Required length in bytes
        expected: usize,
        /// Length actually provided
        actual: usize,
    },
    /// Reading the byte source failed
    Io(io::Error),
}

impl From<io::Error> for PaletteError {
    fn from(err: io::Error) -> Self {
        PaletteError::Io(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidPaletteSize { expected, actual } => {
                write!(
                    f,
                    "invalid palette size: expected {} bytes, got {}",
                    expected, actual
                )
            }
            PaletteError::Io(err) => {
                write!(f, "failed to read palette: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::Io(err) => Some(err),
            _ => None,
        }
    }
}
