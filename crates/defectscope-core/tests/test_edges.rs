mod common;

use common::{raster_with_square, white_raster};
use defectscope_core::config::AnalysisConfig;
use defectscope_core::edges::{CannyEdgeDetector, EdgeDetector};
use defectscope_core::raster::{gray_to_rgb, resample, scaled_dimensions, to_grayscale};
use image::{Luma, Rgb};

#[test]
fn test_edges_keep_source_dimensions() {
    let raster = raster_with_square(48, 32, 10, 10, 12, 8);
    let edges = CannyEdgeDetector::default().detect(&raster);
    assert_eq!(edges.dimensions(), (48, 32));
}

#[test]
fn test_flat_image_has_no_edges() {
    let edges = CannyEdgeDetector::default().detect(&white_raster(32, 32));
    assert!(edges.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn test_square_outline_produces_edges() {
    let raster = raster_with_square(64, 64, 20, 20, 24, 24);
    let edges = CannyEdgeDetector::default().detect(&raster);

    let edge_pixels = edges.pixels().filter(|p| p.0[0] == 255).count();
    assert!(edge_pixels > 0);
    // Edge output is gray expanded to RGB.
    assert!(edges.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
    // Far from the square there is nothing.
    assert_eq!(edges.get_pixel(2, 2).0, [0, 0, 0]);
}

#[test]
fn test_detector_from_config() {
    let config = AnalysisConfig {
        canny_low: 10.0,
        canny_high: 20.0,
        ..AnalysisConfig::default()
    };
    let detector = CannyEdgeDetector::from_config(&config);
    assert_eq!(detector.low, 10.0);
    assert_eq!(detector.high, 20.0);
}

// ---------------------------------------------------------------------------
// Raster helpers
// ---------------------------------------------------------------------------

#[test]
fn test_grayscale_uses_bt601_weights() {
    let mut raster = white_raster(3, 1);
    raster.put_pixel(0, 0, Rgb([255, 0, 0]));
    raster.put_pixel(1, 0, Rgb([0, 255, 0]));
    raster.put_pixel(2, 0, Rgb([0, 0, 255]));

    let gray = to_grayscale(&raster);
    assert_eq!(gray.get_pixel(0, 0), &Luma([76]));
    assert_eq!(gray.get_pixel(1, 0), &Luma([150]));
    assert_eq!(gray.get_pixel(2, 0), &Luma([29]));
}

#[test]
fn test_gray_to_rgb_replicates_channel() {
    let gray = image::GrayImage::from_pixel(2, 2, Luma([77]));
    let rgb = gray_to_rgb(&gray);
    assert!(rgb.pixels().all(|p| p.0 == [77, 77, 77]));
}

#[test]
fn test_scaled_dimensions_truncate() {
    assert_eq!(scaled_dimensions(10, 10, 1.25), (12, 12));
    assert_eq!(scaled_dimensions(3, 7, 0.5), (1, 3));
    assert_eq!(scaled_dimensions(1, 1, 0.5), (1, 1));
}

#[test]
fn test_resample_identity_is_exact() {
    let raster = raster_with_square(9, 9, 2, 2, 3, 3);
    assert_eq!(resample(&raster, 1.0), raster);
}

#[test]
fn test_resample_uniform_color_stays_uniform() {
    let raster = white_raster(8, 6);
    let up = resample(&raster, 2.0);
    assert_eq!(up.dimensions(), (16, 12));
    assert!(up.pixels().all(|p| p.0 == [255, 255, 255]));
}
