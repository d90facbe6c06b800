//! Test fixtures: palettes and encoded images.

use std::io::Cursor;

/// Raw palette bytes for the grayscale ramp (entry i = (i, i, i)).
pub fn grayscale_palette_bytes() -> Vec<u8> {
    (0..=255u8).flat_map(|i| [i, i, i]).collect()
}

/// Raw palette bytes where every entry is black except the given overrides.
pub fn palette_bytes_with(entries: &[(u8, [u8; 3])]) -> Vec<u8> {
    let mut bytes = vec![0u8; 768];
    for &(idx, rgb) in entries {
        let offset = idx as usize * 3;
        bytes[offset..offset + 3].copy_from_slice(&rgb);
    }
    bytes
}

/// Encode 8-bit RGB pixels as a PNG file.
pub fn rgb_png(width: u32, height: u32, pixels: &[[u8; 3]]) -> Vec<u8> {
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    encode_png(width, height, png::ColorType::Rgb, &data)
}

/// Encode 8-bit RGBA pixels as a PNG file.
pub fn rgba_png(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    encode_png(width, height, png::ColorType::Rgba, &data)
}

/// The 2x1 black/white image used by the end-to-end scenario.
pub fn black_white_png() -> Vec<u8> {
    rgb_png(2, 1, &[[0, 0, 0], [255, 255, 255]])
}

fn encode_png(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf.into_inner()
}
