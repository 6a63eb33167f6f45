use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use defectscope_core::edges::CannyEdgeDetector;
use defectscope_core::io::image_io::{load_session, save_raster};

use super::load_config;

#[derive(Args)]
pub struct EdgesArgs {
    /// Input image file
    pub file: PathBuf,

    /// Analysis config (TOML); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Canny low threshold (overrides config)
    #[arg(long)]
    pub low: Option<f32>,

    /// Canny high threshold (overrides config)
    #[arg(long)]
    pub high: Option<f32>,

    /// Output file path
    #[arg(short, long, default_value = "edges.png")]
    pub output: PathBuf,
}

pub fn run(args: &EdgesArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(low) = args.low {
        config.canny_low = low;
    }
    if let Some(high) = args.high {
        config.canny_high = high;
    }
    config.validate()?;

    let detector = CannyEdgeDetector::from_config(&config);
    let session = load_session(&args.file, &detector)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!(
        "Loaded {}x{} image",
        session.source.width(),
        session.source.height()
    );
    println!(
        "Canny thresholds: low={}, high={}",
        detector.low, detector.high
    );

    save_raster(&session.derived, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
