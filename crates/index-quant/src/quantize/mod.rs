//! Per-pixel nearest-color quantization.
//!
//! Each pixel is mapped independently to the index of its nearest palette
//! entry. There is no state shared between pixels, so the parallel variant
//! splits the input into contiguous ranges and writes each range into its
//! own disjoint slice of the output without any locking.

use rayon::prelude::*;

use crate::color::Rgb8;
use crate::palette::Palette;

/// Pixels handed to one rayon task by [`quantize_parallel`].
const PARALLEL_CHUNK: usize = 4096;

/// Index of the palette entry nearest to `pixel`.
///
/// Equivalent to [`Palette::find_nearest()`]; lowest index wins on ties.
#[inline]
pub fn nearest_index(pixel: Rgb8, palette: &Palette) -> u8 {
    palette.find_nearest(pixel)
}

/// Map every pixel to its nearest palette index, preserving order.
///
/// The output has the same length as `pixels`; element `i` is the index
/// chosen for `pixels[i]`.
///
/// # Example
///
/// ```
/// use index_quant::{quantize, Palette, Rgb8};
///
/// let palette = Palette::grayscale();
/// let pixels = [Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)];
/// assert_eq!(quantize(&pixels, &palette), vec![0, 255]);
/// ```
pub fn quantize(pixels: &[Rgb8], palette: &Palette) -> Vec<u8> {
    pixels
        .iter()
        .map(|&pixel| nearest_index(pixel, palette))
        .collect()
}

/// Same result as [`quantize`], computed on the rayon thread pool.
///
/// The input is partitioned into contiguous chunks; each task fills the
/// matching chunk of the output buffer.
pub fn quantize_parallel(pixels: &[Rgb8], palette: &Palette) -> Vec<u8> {
    let mut indices = vec![0u8; pixels.len()];

    indices
        .par_chunks_mut(PARALLEL_CHUNK)
        .zip(pixels.par_chunks(PARALLEL_CHUNK))
        .for_each(|(out, chunk)| {
            for (slot, &pixel) in out.iter_mut().zip(chunk) {
                *slot = nearest_index(pixel, palette);
            }
        });

    indices
}
