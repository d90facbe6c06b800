//! Texconv - convert true-color images to 256-color index text
//!
//! Each pixel of the source image is replaced by the index of its nearest
//! entry in a fixed 256-color palette; the index buffer is written out as
//! base64. This library exposes the pipeline for the binary and for
//! integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::ConvertError;
pub use models::Config;
pub use services::converter::convert;
pub use services::Converter;
