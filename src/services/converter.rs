//! Converter - the image-to-text pipeline.
//!
//! Loads the palette once, then for each image: decode, quantize every
//! pixel to its nearest palette index, and base64-encode the index buffer.
//! Nothing is returned unless every stage succeeds, so a failed run never
//! produces partial output.

use std::path::Path;

use index_quant::{IndexedImage, Palette, Quantizer};

use super::image_decoder::{self, DecodedImage};
use super::index_encoder;
use super::palette_loader;
use crate::error::ConvertError;
use crate::models::Config;

/// Converts images into base64 index text against a fixed palette.
pub struct Converter {
    quantizer: Quantizer,
}

impl Converter {
    /// Create a converter around an already loaded palette.
    pub fn new(palette: Palette, parallel: bool) -> Self {
        Self {
            quantizer: Quantizer::new(palette).parallel(parallel),
        }
    }

    /// Load the palette named by `config` and create a converter.
    pub fn from_config(config: &Config) -> Result<Self, ConvertError> {
        let palette = palette_loader::load_palette(&config.palette_path)?;
        Ok(Self::new(palette, config.parallel))
    }

    /// The palette in use.
    pub fn palette(&self) -> &Palette {
        self.quantizer.palette()
    }

    /// Quantize an already decoded image.
    pub fn quantize(&self, image: &DecodedImage) -> Result<IndexedImage, ConvertError> {
        let indexed = self.quantizer.quantize(
            &image.pixels,
            image.width as usize,
            image.height as usize,
        )?;

        tracing::debug!(
            width = image.width,
            height = image.height,
            pixels = image.len(),
            parallel = self.quantizer.is_parallel(),
            "Quantized image"
        );

        Ok(indexed)
    }

    /// Decode the image at `path` and return its base64-encoded index buffer.
    pub fn convert(&self, path: &Path) -> Result<String, ConvertError> {
        let image = image_decoder::decode_file(path)?;
        let indexed = self.quantize(&image)?;
        let encoded = index_encoder::encode_indices(indexed.indices());

        tracing::info!(
            path = %path.display(),
            width = indexed.width(),
            height = indexed.height(),
            "Converted image"
        );

        Ok(encoded)
    }
}

/// One-shot helper: load the configured palette and convert a single image.
pub fn convert(config: &Config, path: &Path) -> Result<String, ConvertError> {
    Converter::from_config(config)?.convert(path)
}
