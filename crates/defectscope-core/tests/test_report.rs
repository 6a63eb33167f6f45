mod common;

use approx::assert_relative_eq;
use common::{fill_rect, raster_with_square, white_raster, BLACK, WHITE};
use defectscope_core::config::AnalysisConfig;
use defectscope_core::report::{
    generate_defect_report, ContourExtractor, ContourPoints, DefectRecord, DefectReport,
    DefectReporter,
};
use defectscope_core::DefectscopeError;
use image::{GrayImage, Rgb};

#[test]
fn test_report_without_image_fails() {
    let err = generate_defect_report(None).unwrap_err();
    assert!(matches!(err, DefectscopeError::NoImageLoaded));
    assert_eq!(err.to_string(), "No image loaded");
}

#[test]
fn test_blank_image_has_no_defects() {
    let raster = white_raster(64, 48);
    let report = generate_defect_report(Some(&raster)).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.to_string(), "No defects detected");
}

#[test]
fn test_single_square_is_reported() {
    let (x0, y0, w0, h0) = (12, 7, 20, 15);
    let raster = raster_with_square(64, 48, x0, y0, w0, h0);

    let report = generate_defect_report(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);

    let r = &report.records[0];
    assert!((r.x - x0 as i32).abs() <= 1, "x = {}", r.x);
    assert!((r.y - y0 as i32).abs() <= 1, "y = {}", r.y);
    assert!((r.width as i64 - w0 as i64).abs() <= 1, "width = {}", r.width);
    assert!((r.height as i64 - h0 as i64).abs() <= 1, "height = {}", r.height);

    // Contour area runs through pixel centres, so it trails the pixel count
    // by about half the perimeter.
    let expected = (w0 * h0) as f64;
    assert!(r.area > 0.0);
    assert_relative_eq!(r.area, expected, max_relative = 0.2);
}

#[test]
fn test_square_in_corner_is_reported() {
    let raster = raster_with_square(30, 30, 0, 0, 10, 10);

    let report = generate_defect_report(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);

    let r = &report.records[0];
    assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 10, 10));
    assert_relative_eq!(r.area, 81.0);
}

#[test]
fn test_square_on_far_edges_is_reported() {
    let raster = raster_with_square(30, 20, 22, 14, 8, 6);

    let report = generate_defect_report(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);

    let r = &report.records[0];
    assert_eq!((r.x, r.y, r.width, r.height), (22, 14, 8, 6));
}

#[test]
fn test_all_dark_image_is_one_defect() {
    let raster = raster_with_square(8, 6, 0, 0, 8, 6);

    let report = generate_defect_report(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);

    let r = &report.records[0];
    assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 8, 6));
    assert_relative_eq!(r.area, 35.0);
}

#[test]
fn test_mid_gray_counts_as_foreground_at_threshold() {
    let mut raster = white_raster(30, 30);
    fill_rect(&mut raster, 5, 5, 10, 10, Rgb([128, 128, 128]));
    let report = generate_defect_report(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);

    let mut lighter = white_raster(30, 30);
    fill_rect(&mut lighter, 5, 5, 10, 10, Rgb([140, 140, 140]));
    let report = generate_defect_report(Some(&lighter)).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_nested_regions_report_outer_contour_only() {
    // Black ring with a white hole that holds a black dot.
    let mut raster = white_raster(60, 60);
    fill_rect(&mut raster, 10, 10, 40, 40, BLACK);
    fill_rect(&mut raster, 20, 20, 20, 20, WHITE);
    fill_rect(&mut raster, 27, 27, 6, 6, BLACK);

    let report = generate_defect_report(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.records[0].width, 40);
    assert_eq!(report.records[0].height, 40);
}

#[test]
fn test_separate_squares_each_reported() {
    let mut raster = white_raster(80, 40);
    fill_rect(&mut raster, 5, 5, 10, 10, BLACK);
    fill_rect(&mut raster, 40, 20, 12, 8, BLACK);

    let report = generate_defect_report(Some(&raster)).unwrap();
    assert_eq!(report.len(), 2);

    let mut boxes: Vec<_> = report
        .records
        .iter()
        .map(|r| (r.x, r.y, r.width, r.height))
        .collect();
    boxes.sort();
    assert_eq!(boxes, vec![(5, 5, 10, 10), (40, 20, 12, 8)]);
}

#[test]
fn test_min_area_filters_small_regions() {
    let mut raster = white_raster(80, 40);
    fill_rect(&mut raster, 2, 2, 2, 2, BLACK);
    fill_rect(&mut raster, 40, 10, 20, 20, BLACK);

    let config = AnalysisConfig {
        min_area: 10.0,
        ..AnalysisConfig::default()
    };
    let report = DefectReporter::new(config).generate(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report.records[0].x, 40);
}

#[test]
fn test_custom_threshold() {
    let mut raster = white_raster(30, 30);
    fill_rect(&mut raster, 5, 5, 10, 10, Rgb([200, 200, 200]));

    let config = AnalysisConfig {
        threshold: 220,
        ..AnalysisConfig::default()
    };
    let reporter = DefectReporter::new(config.clone());
    assert_eq!(reporter.config(), &config);

    let report = reporter.generate(Some(&raster)).unwrap();
    assert_eq!(report.len(), 1);
}

// ---------------------------------------------------------------------------
// Stub extractor
// ---------------------------------------------------------------------------

struct FixedContours(Vec<ContourPoints>);

impl ContourExtractor for FixedContours {
    fn extract(&self, _mask: &GrayImage) -> Vec<ContourPoints> {
        self.0.clone()
    }
}

#[test]
fn test_reporter_uses_extractor_order_and_shape() {
    let extractor = FixedContours(vec![
        vec![(10, 10), (10, 14), (13, 14), (13, 10)],
        vec![(0, 0)],
        vec![],
    ]);
    let reporter = DefectReporter::with_extractor(AnalysisConfig::default(), extractor);
    let raster = white_raster(4, 4);

    let report = reporter.generate(Some(&raster)).unwrap();
    assert_eq!(
        report.records,
        vec![
            DefectRecord {
                x: 10,
                y: 10,
                width: 4,
                height: 5,
                area: 12.0,
            },
            DefectRecord {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
                area: 0.0,
            },
        ]
    );
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn test_record_display() {
    let r = DefectRecord {
        x: 3,
        y: 4,
        width: 10,
        height: 5,
        area: 36.0,
    };
    assert_eq!(
        r.to_string(),
        "Defect at (3, 4), Width: 10, Height: 5, Area: 36.0"
    );
}

#[test]
fn test_report_display_joins_lines() {
    let report = DefectReport::new(vec![
        DefectRecord {
            x: 1,
            y: 2,
            width: 3,
            height: 4,
            area: 2.5,
        },
        DefectRecord {
            x: 5,
            y: 6,
            width: 7,
            height: 8,
            area: 30.0,
        },
    ]);
    assert_eq!(
        report.to_string(),
        "Defect at (1, 2), Width: 3, Height: 4, Area: 2.5\n\
         Defect at (5, 6), Width: 7, Height: 8, Area: 30.0"
    );
    assert_relative_eq!(report.total_area(), 32.5);
}
