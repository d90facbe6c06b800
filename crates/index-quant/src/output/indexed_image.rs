//! IndexedImage: palette indices plus dimensions.

use crate::palette::Palette;

/// The output of quantization.
///
/// Stores one `u8` palette index per pixel in row-major order, along with
/// the image dimensions.
///
/// # Example
///
/// ```
/// use index_quant::{IndexedImage, Palette};
///
/// let image = IndexedImage::new(vec![0, 255], 2, 1);
/// assert_eq!(image.indices(), &[0, 255]);
///
/// let rgb = image.to_rgb(&Palette::grayscale());
/// assert_eq!(rgb, vec![0, 0, 0, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
}

impl IndexedImage {
    /// Wrap an index buffer with its dimensions.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consume the image and return the index buffer.
    #[inline]
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Expand indices to packed RGB bytes using `palette`.
    ///
    /// Returns a `[R, G, B, R, G, B, ...]` buffer of length
    /// `width * height * 3`.
    pub fn to_rgb(&self, palette: &Palette) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&palette.get(idx).to_bytes());
        }
        rgb
    }
}
