//! Decodes source images into flat RGB pixel buffers.
//!
//! Anything the `image` crate can read with the enabled codecs is accepted.
//! Alpha and any other extra channels are dropped by converting to 8-bit
//! RGB.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use index_quant::Rgb8;

use crate::error::ConvertError;

/// A decoded image: dimensions plus row-major RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb8>,
}

impl DecodedImage {
    /// Number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(image: DynamicImage) -> Self {
        let rgb = image.into_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0;
                Rgb8::new(r, g, b)
            })
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }
}

/// Decode the image file at `path`, detecting the format from its contents.
pub fn decode_file(path: &Path) -> Result<DecodedImage, ConvertError> {
    let to_error = |source: ImageError| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.with_guessed_format().map_err(ImageError::IoError))
        .and_then(|reader| reader.decode())
        .map_err(to_error)?;

    let decoded = DecodedImage::from(image);
    tracing::debug!(
        path = %path.display(),
        width = decoded.width,
        height = decoded.height,
        "Decoded image"
    );

    Ok(decoded)
}

/// Decode an in-memory encoded image.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()?;
    Ok(DecodedImage::from(image))
}
