use imageproc::edges::canny;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::raster::{gray_to_rgb, to_grayscale, Raster};

/// Produces the derived view shown next to the source image.
pub trait EdgeDetector {
    /// Returns a raster with the same dimensions as `source`.
    fn detect(&self, source: &Raster) -> Raster;
}

/// Grayscale, then Canny with hysteresis thresholds, then back to RGB.
#[derive(Clone, Debug)]
pub struct CannyEdgeDetector {
    pub low: f32,
    pub high: f32,
}

impl CannyEdgeDetector {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.canny_low, config.canny_high)
    }
}

impl Default for CannyEdgeDetector {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl EdgeDetector for CannyEdgeDetector {
    fn detect(&self, source: &Raster) -> Raster {
        let gray = to_grayscale(source);
        let edges = canny(&gray, self.low, self.high);
        let edge_pixels = edges.pixels().filter(|p| p.0[0] > 0).count();
        debug!(
            width = source.width(),
            height = source.height(),
            edge_pixels,
            low = self.low,
            high = self.high,
            "Canny edge detection complete"
        );
        gray_to_rgb(&edges)
    }
}
