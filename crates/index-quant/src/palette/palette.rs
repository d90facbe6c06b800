//! Fixed 256-entry palette with nearest-color matching.
//!
//! The palette is loaded once from a flat byte source (256 consecutive
//! R, G, B triples, no header) and never changes afterwards. Because the
//! entries live in a `[Rgb8; 256]`, a palette of any other length cannot be
//! constructed, and every `u8` is a valid index.

use std::io::Read;

use super::error::PaletteError;
use crate::color::Rgb8;

/// Number of entries in every palette.
pub const PALETTE_LEN: usize = 256;

/// Size of the raw palette byte source (256 entries x 3 bytes).
pub const PALETTE_BYTES: usize = PALETTE_LEN * 3;

/// An ordered set of exactly 256 reference colors.
///
/// # Example
///
/// ```
/// use index_quant::{Palette, Rgb8};
///
/// let bytes: Vec<u8> = (0..=255u8).flat_map(|i| [i, i, i]).collect();
/// let palette = Palette::from_bytes(&bytes).unwrap();
///
/// assert_eq!(palette.len(), 256);
/// assert_eq!(palette.get(10), Rgb8::new(10, 10, 10));
/// assert_eq!(palette.find_nearest(Rgb8::new(11, 9, 10)), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb8; PALETTE_LEN],
}

impl Palette {
    /// Create a palette from 256 colors.
    #[inline]
    pub const fn new(entries: [Rgb8; PALETTE_LEN]) -> Self {
        Self { entries }
    }

    /// Load a palette from raw bytes.
    ///
    /// The bytes are read as 256 consecutive (R, G, B) triples in the order
    /// given. Any byte value is a valid channel value.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidPaletteSize`] if `bytes` is not exactly
    /// [`PALETTE_BYTES`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        if bytes.len() != PALETTE_BYTES {
            return Err(PaletteError::InvalidPaletteSize {
                expected: PALETTE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut entries = [Rgb8::default(); PALETTE_LEN];
        for (entry, triple) in entries.iter_mut().zip(bytes.chunks_exact(3)) {
            *entry = Rgb8::new(triple[0], triple[1], triple[2]);
        }

        Ok(Self { entries })
    }

    /// Read a whole byte stream and load it with [`from_bytes()`](Self::from_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if reading fails, or
    /// [`PaletteError::InvalidPaletteSize`] if the stream length is wrong.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, PaletteError> {
        let mut bytes = Vec::with_capacity(PALETTE_BYTES);
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// A grayscale ramp where entry `i` is `(i, i, i)`.
    pub fn grayscale() -> Self {
        let mut entries = [Rgb8::default(); PALETTE_LEN];
        for (i, entry) in entries.iter_mut().enumerate() {
            *entry = Rgb8::grey(i as u8);
        }
        Self { entries }
    }

    /// Returns the number of colors in the palette (always 256).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for symmetry with [`len()`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the color at the given index.
    #[inline]
    pub fn get(&self, idx: u8) -> Rgb8 {
        self.entries[idx as usize]
    }

    /// All 256 entries in index order.
    #[inline]
    pub fn entries(&self) -> &[Rgb8; PALETTE_LEN] {
        &self.entries
    }

    /// Serialize back to the flat 768-byte layout accepted by
    /// [`from_bytes()`](Self::from_bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.entries.iter().flat_map(|c| c.to_bytes()).collect()
    }

    /// Find the palette index nearest to `color`.
    ///
    /// Scans all entries in ascending index order and keeps the first one
    /// with the smallest squared RGB distance. An entry only replaces the
    /// current best when it is strictly closer, so on ties the lowest index
    /// wins. Output depends on this: duplicate palette entries always
    /// resolve to their first occurrence.
    #[inline]
    pub fn find_nearest(&self, color: Rgb8) -> u8 {
        let mut best_idx = 0;
        let mut best_dist = i32::MAX;

        for (i, &entry) in self.entries.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        best_idx as u8
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::grayscale()
    }
}
