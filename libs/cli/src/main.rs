//! `qr-stl` command-line entrypoint.
//!
//! Reads text from `--text`, a file, or stdin and writes a binary STL plate
//! carrying its QR code.

#![forbid(unsafe_code)]

mod run;

use clap::Parser;
use config::constants::{DEFAULT_BASE_HEIGHT, DEFAULT_BASE_SIZE, DEFAULT_PIXEL_SIZE};
use std::path::PathBuf;

/// Turn text into a 3D-printable QR code plate.
#[derive(Parser, Debug)]
#[command(name = "qr-stl")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// File to read the text from. Stdin is used when neither this nor
    /// `--text` is given.
    #[arg(short, long, conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Text to encode.
    #[arg(short, long)]
    text: Option<String>,

    /// Where to write the binary STL.
    #[arg(short, long)]
    output: PathBuf,

    /// Thickness of the base plate.
    #[arg(long, default_value_t = DEFAULT_BASE_HEIGHT.to_string())]
    base_height: String,

    /// Side length of the square base plate, quiet zone included.
    #[arg(long, default_value_t = DEFAULT_BASE_SIZE.to_string())]
    base_size: String,

    /// Height of each raised module above the plate.
    #[arg(long, default_value_t = DEFAULT_PIXEL_SIZE.to_string())]
    pixel_size: String,

    /// Print a JSON summary of the conversion on stdout.
    #[arg(long)]
    report: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for the JSON report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    run::run(&cli)
}
