//! Color types
//!
//! Pixels and palette entries share one representation: [`Rgb8`], an
//! 8-bit-per-channel triple. Any extra source channels (alpha) are dropped
//! before a pixel reaches this crate.

mod rgb8;

pub use rgb8::Rgb8;
