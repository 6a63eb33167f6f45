use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW, DEFAULT_DEFECT_THRESHOLD, DEFAULT_MIN_DEFECT_AREA,
};
use crate::error::{DefectscopeError, Result};

/// Tunable constants for edge detection and defect reporting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Canny hysteresis low threshold.
    #[serde(default = "default_canny_low")]
    pub canny_low: f32,
    /// Canny hysteresis high threshold.
    #[serde(default = "default_canny_high")]
    pub canny_high: f32,
    /// Pixels with luminance above this value are background.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Contours with a smaller area are left out of the report.
    #[serde(default = "default_min_area")]
    pub min_area: f64,
}

fn default_canny_low() -> f32 {
    DEFAULT_CANNY_LOW
}
fn default_canny_high() -> f32 {
    DEFAULT_CANNY_HIGH
}
fn default_threshold() -> u8 {
    DEFAULT_DEFECT_THRESHOLD
}
fn default_min_area() -> f64 {
    DEFAULT_MIN_DEFECT_AREA
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            canny_low: DEFAULT_CANNY_LOW,
            canny_high: DEFAULT_CANNY_HIGH,
            threshold: DEFAULT_DEFECT_THRESHOLD,
            min_area: DEFAULT_MIN_DEFECT_AREA,
        }
    }
}

impl AnalysisConfig {
    /// Reject combinations the detectors cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.canny_low.is_finite() && self.canny_high.is_finite()) {
            return Err(DefectscopeError::Config(
                "canny thresholds must be finite".into(),
            ));
        }
        if self.canny_low < 0.0 || self.canny_low > self.canny_high {
            return Err(DefectscopeError::Config(format!(
                "canny thresholds must satisfy 0 <= low <= high (got {} / {})",
                self.canny_low, self.canny_high
            )));
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(DefectscopeError::Config(format!(
                "min_area must be a non-negative number (got {})",
                self.min_area
            )));
        }
        Ok(())
    }
}
