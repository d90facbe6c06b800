use std::path::PathBuf;

use index_quant::{PaletteError, QuantizeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open palette {}: {source}", .path.display())]
    PaletteRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),
}
