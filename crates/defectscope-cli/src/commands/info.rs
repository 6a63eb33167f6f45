use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = image::open(&args.file)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    let size_bytes = std::fs::metadata(&args.file).map(|m| m.len()).unwrap_or(0);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", img.width(), img.height());
    println!("Color type:  {:?}", img.color());
    println!("Bit depth:   {}", img.color().bits_per_pixel() / img.color().channel_count() as u16);
    println!("File size:   {:.1} KB", size_bytes as f64 / 1024.0);

    Ok(())
}
