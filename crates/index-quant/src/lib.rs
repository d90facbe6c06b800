#![allow(clippy::module_inception)]

//! index-quant: nearest-color quantization against a fixed 256-color palette
//!
//! This library maps true-color pixels to indices into a palette of exactly
//! 256 RGB entries. Each pixel is replaced by the index of the palette entry
//! with the smallest squared Euclidean distance in RGB space.
//!
//! # Quick Start
//!
//! ```
//! use index_quant::{Palette, Quantizer, Rgb8};
//!
//! // 256 (R, G, B) triples, no header
//! let bytes: Vec<u8> = (0..=255u8).flat_map(|i| [i, i, i]).collect();
//! let palette = Palette::from_bytes(&bytes).unwrap();
//!
//! let quantizer = Quantizer::new(palette);
//! let pixels = vec![Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)];
//! let image = quantizer.quantize(&pixels, 2, 1).unwrap();
//!
//! assert_eq!(image.indices(), &[0, 255]);
//! ```
//!
//! # Matching Rule
//!
//! ```text
//! d(i) = (r - palette[i].r)^2 + (g - palette[i].g)^2 + (b - palette[i].b)^2
//! ```
//!
//! Differences are signed and the sum is computed in `i32`. Entries are
//! scanned in ascending index order and replaced only by a strictly smaller
//! distance, so when several entries tie the lowest index is returned. This
//! makes output byte-for-byte reproducible across implementations.
//!
//! # Parallelism
//!
//! Pixels are independent. [`quantize_parallel`] splits the input into
//! contiguous chunks on the rayon pool and writes disjoint output chunks;
//! its result is identical to [`quantize`].

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;


pub use api::{QuantizeError, Quantizer};
pub use color::Rgb8;
pub use output::IndexedImage;
pub use palette::{Palette, PaletteError, PALETTE_BYTES, PALETTE_LEN};
pub use quantize::{nearest_index, quantize, quantize_parallel};
