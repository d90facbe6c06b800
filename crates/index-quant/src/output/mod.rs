//! Output types for the quantization pipeline.
//!
//! [`IndexedImage`] holds the index buffer (one palette index per pixel)
//! together with the source dimensions. The raw indices are what gets
//! serialized; [`IndexedImage::to_rgb`] expands them back to colors for
//! previews.

mod indexed_image;

pub use indexed_image::IndexedImage;
