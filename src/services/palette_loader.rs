//! Reads the palette file once at startup.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use index_quant::Palette;

use crate::error::ConvertError;

/// Load the 256-entry palette stored at `path`.
///
/// The file must hold exactly 768 bytes of (R, G, B) triples. Opening
/// failures carry the path; size and read failures come back as
/// [`ConvertError::Palette`].
pub fn load_palette(path: &Path) -> Result<Palette, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::PaletteRead {
        path: path.to_path_buf(),
        source,
    })?;

    let palette = Palette::from_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), "Loaded palette");

    Ok(palette)
}
