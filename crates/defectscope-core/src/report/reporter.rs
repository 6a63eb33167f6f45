use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{DefectscopeError, Result};
use crate::raster::{to_grayscale, Raster};

use super::contours::{bounding_rect, signed_area, ContourExtractor, ImageprocContourExtractor};
use super::record::{DefectRecord, DefectReport};
use super::threshold::{binarize_inverted, foreground_count};

/// Turns a raster into a list of dark-region bounding boxes.
#[derive(Clone, Debug)]
pub struct DefectReporter<E = ImageprocContourExtractor> {
    config: AnalysisConfig,
    extractor: E,
}

impl Default for DefectReporter {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl DefectReporter {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_extractor(config, ImageprocContourExtractor)
    }
}

impl<E: ContourExtractor> DefectReporter<E> {
    pub fn with_extractor(config: AnalysisConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Build the report for `source`.
    ///
    /// Pipeline: grayscale -> inverted threshold -> external contours ->
    /// bounding box + area per contour -> drop contours under `min_area`.
    ///
    /// Does not look at or change any viewport state.
    pub fn generate(&self, source: Option<&Raster>) -> Result<DefectReport> {
        let source = source.ok_or(DefectscopeError::NoImageLoaded)?;

        // Step 1: Luminance.
        let gray = to_grayscale(source);

        // Step 2: Dark pixels become foreground.
        let mask = binarize_inverted(&gray, self.config.threshold);
        debug!(
            threshold = self.config.threshold,
            foreground = foreground_count(&mask),
            "Binarized for defect search"
        );

        // Step 3: Outermost boundaries only.
        let contours = self.extractor.extract(&mask);

        // Step 4: One record per contour, in discovery order.
        let records: Vec<DefectRecord> = contours
            .iter()
            .filter_map(|points| {
                let (x, y, width, height) = bounding_rect(points)?;
                let area = signed_area(points).abs();
                Some(DefectRecord {
                    x,
                    y,
                    width,
                    height,
                    area,
                })
            })
            .filter(|r| r.area >= self.config.min_area)
            .collect();

        debug!(
            contours = contours.len(),
            records = records.len(),
            "Defect report generated"
        );
        Ok(DefectReport::new(records))
    }
}

/// Report with the default threshold and contour extractor.
pub fn generate_defect_report(source: Option<&Raster>) -> Result<DefectReport> {
    DefectReporter::default().generate(source)
}
