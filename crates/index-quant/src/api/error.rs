//! Unified error type for the index-quant public API.
//!
//! [`QuantizeError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::palette::PaletteError;
use std::fmt;

/// Unified error type for the index-quant public API.
///
/// # Example
///
/// ```
/// use index_quant::{Palette, QuantizeError};
///
/// fn load(bytes: &[u8]) -> Result<Palette, QuantizeError> {
///     let palette = Palette::from_bytes(bytes)?;
///     Ok(palette)
/// }
///
/// assert!(load(&[0u8; 10]).is_err());
/// ```
#[derive(Debug)]
pub enum QuantizeError {
    /// Palette could not be loaded
    Palette(PaletteError),
    /// Pixel count does not match the stated dimensions
    DimensionMismatch {
        /// `width * height`
        expected: usize,
        /// Number of pixels supplied
        actual: usize,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Palette(err) => write!(f, "palette error: {}", err),
            QuantizeError::DimensionMismatch { expected, actual } => write!(
                f,
                "pixel count mismatch: expected {} pixels, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Palette(err) => Some(err),
            QuantizeError::DimensionMismatch { .. } => None,
        }
    }
}

impl From<PaletteError> for QuantizeError {
    fn from(err: PaletteError) -> Self {
        QuantizeError::Palette(err)
    }
}
