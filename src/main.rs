use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use texconv::{Config, Converter};

#[derive(Parser)]
#[command(name = "texconv", version)]
#[command(about = "Convert an image to base64-encoded indices into a 256-color palette")]
#[command(
    long_about = "Convert an image to base64-encoded indices into a 256-color palette.\n\n\
    The palette is read from PALETTE_FILE (default: ./palette), a raw file of \
    256 R,G,B byte triples. Set TEXCONV_PARALLEL=0 to quantize on one thread."
)]
struct Cli {
    /// Input image (PNG, JPEG, GIF or BMP)
    image: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the encoded output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "texconv=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config::from_env();
    let converter = Converter::from_config(&config)?;
    let encoded = converter.convert(&cli.image)?;

    println!("{encoded}");

    Ok(())
}
