pub mod config;

pub use config::{Config, DEFAULT_PALETTE_FILE};
