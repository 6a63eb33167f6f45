pub mod config;
pub mod edges;
pub mod info;
pub mod report;

use std::path::Path;

use anyhow::{Context, Result};
use defectscope_core::AnalysisConfig;

/// Read an analysis config from TOML, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => AnalysisConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
