use image::GrayImage;
use imageproc::contrast::{threshold, ThresholdType};

/// Inverted binarization: pixels brighter than `level` become background (0),
/// everything else becomes foreground (255).
pub fn binarize_inverted(gray: &GrayImage, level: u8) -> GrayImage {
    threshold(gray, level, ThresholdType::BinaryInverted)
}

/// Number of foreground pixels in a binary mask.
pub fn foreground_count(mask: &GrayImage) -> usize {
    mask.pixels().filter(|p| p.0[0] > 0).count()
}
