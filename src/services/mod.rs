pub mod converter;
pub mod image_decoder;
pub mod index_encoder;
pub mod palette_loader;

pub use converter::Converter;
pub use image_decoder::DecodedImage;
