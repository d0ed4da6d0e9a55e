//! Conversion command.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

use crate::Cli;

pub(crate) fn run(cli: &Cli) -> Result<()> {
    let data = read_input(cli.text.as_deref(), cli.input.as_deref())?;

    let conversion =
        qr_stl::convert_bytes_with_report(&data, &cli.base_height, &cli.base_size, &cli.pixel_size)
            .context("Conversion failed")?;

    fs::write(&cli.output, &conversion.stl)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    info!(
        path = %cli.output.display(),
        bytes = conversion.stl.len(),
        "Wrote STL"
    );

    if cli.report {
        let json = serde_json::to_string_pretty(&conversion.report)?;
        println!("{json}");
    }
    Ok(())
}

/// Bytes of the flag text, else the whole file, else all of stdin. Content
/// is used verbatim (trailing newline included) and need not be UTF-8.
fn read_input(text: Option<&str>, input: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.as_bytes().to_vec());
    }
    match input {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
