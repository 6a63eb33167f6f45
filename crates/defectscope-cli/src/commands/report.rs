use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use defectscope_core::io::image_io::load_source_image;
use defectscope_core::report::{DefectReport, DefectReporter};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::debug;

use crate::summary::{print_analysis_summary, print_failure, print_report};

use super::load_config;

#[derive(Args)]
pub struct ReportArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Analysis config (TOML); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Luminance above which pixels are background (overrides config)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Drop regions smaller than this contour area (overrides config)
    #[arg(long)]
    pub min_area: Option<f64>,

    /// Print only the per-file defect count
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: &ReportArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(min_area) = args.min_area {
        config.min_area = min_area;
    }
    config.validate()?;

    let reporter = DefectReporter::new(config);
    if !args.quiet {
        print_analysis_summary(reporter.config(), args.files.len());
    }

    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Analysing images");

    let results: Vec<(&PathBuf, defectscope_core::Result<DefectReport>)> = args
        .files
        .par_iter()
        .map(|path| {
            let result = load_source_image(path)
                .and_then(|source| reporter.generate(Some(&source.raster)));
            debug!(path = %path.display(), ok = result.is_ok(), "Report finished");
            pb.inc(1);
            (path, result)
        })
        .collect();
    pb.finish_and_clear();

    let mut failures = 0usize;
    for (path, result) in &results {
        match result {
            Ok(report) => print_report(path, report, args.quiet),
            Err(e) => {
                failures += 1;
                print_failure(path, e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} file(s) could not be analysed", results.len());
    }
    Ok(())
}
