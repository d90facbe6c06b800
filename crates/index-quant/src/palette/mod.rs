//! Palette types and utilities
//!
//! This module provides the fixed 256-entry [`Palette`] and the error type
//! for loading it from raw bytes.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PALETTE_BYTES, PALETTE_LEN};
