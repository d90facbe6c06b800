//! Quantizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Quantizer`] owns the palette and maps whole images to
//! [`IndexedImage`]s, optionally spreading the per-pixel search over the
//! rayon thread pool.

use super::error::QuantizeError;
use crate::color::Rgb8;
use crate::output::IndexedImage;
use crate::palette::Palette;
use crate::quantize::{quantize, quantize_parallel};

/// High-level quantization builder.
///
/// - Constructor requires a [`Palette`], so every quantizer has exactly
///   256 entries to search
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self`, so one quantizer can be
///   reused for many images
///
/// Sequential and parallel modes produce identical output.
///
/// # Example
///
/// ```
/// use index_quant::{Palette, Quantizer, Rgb8};
///
/// let quantizer = Quantizer::new(Palette::grayscale()).parallel(false);
/// let pixels = [Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)];
/// let image = quantizer.quantize(&pixels, 2, 1).unwrap();
///
/// assert_eq!(image.indices(), &[0, 255]);
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    palette: Palette,
    parallel: bool,
}

impl Quantizer {
    /// Create a quantizer for `palette`. Parallel mode is on by default.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            parallel: true,
        }
    }

    /// Enable or disable the rayon-backed search.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// The palette this quantizer searches.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether the rayon path is used.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Quantize a row-major `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns [`QuantizeError::DimensionMismatch`] if `pixels.len()` is not
    /// `width * height`.
    pub fn quantize(
        &self,
        pixels: &[Rgb8],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, QuantizeError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(QuantizeError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let indices = if self.parallel {
            quantize_parallel(pixels, &self.palette)
        } else {
            quantize(pixels, &self.palette)
        };

        Ok(IndexedImage::new(indices, width, height))
    }
}
