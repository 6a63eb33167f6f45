use std::path::PathBuf;

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// An 8-bit RGB pixel grid. Every view and every derived image is one of these.
pub type Raster = RgbImage;

/// The image the user loaded, decoded once and never modified.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub path: PathBuf,
    pub raster: Raster,
}

impl SourceImage {
    pub fn new(path: PathBuf, raster: Raster) -> Self {
        Self { path, raster }
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }
}

/// A source image together with its edge-detected derivative.
#[derive(Clone, Debug)]
pub struct LoadedImages {
    pub source: SourceImage,
    /// Edge view, same dimensions as `source`.
    pub derived: Raster,
}

/// A raster with no pixels has nothing to show.
pub fn is_absent(raster: &Raster) -> bool {
    raster.width() == 0 || raster.height() == 0
}

/// Convert to 8-bit luminance using BT.601 weights.
pub fn to_grayscale(raster: &Raster) -> GrayImage {
    let (w, h) = raster.dimensions();
    let mut gray = GrayImage::new(w, h);
    for (x, y, Rgb([r, g, b])) in raster.enumerate_pixels() {
        let v = LUMINANCE_R * *r as f32 + LUMINANCE_G * *g as f32 + LUMINANCE_B * *b as f32;
        gray.put_pixel(x, y, Luma([v.round().clamp(0.0, 255.0) as u8]));
    }
    gray
}

/// Expand a single-channel image to three identical channels.
pub fn gray_to_rgb(gray: &GrayImage) -> Raster {
    let (w, h) = gray.dimensions();
    let mut rgb = RgbImage::new(w, h);
    for (x, y, Luma([v])) in gray.enumerate_pixels() {
        rgb.put_pixel(x, y, Rgb([*v, *v, *v]));
    }
    rgb
}

/// Pixel size of a `width` x `height` raster shown at `factor`.
///
/// Truncates like an integer cast and never drops below one pixel.
pub fn scaled_dimensions(width: u32, height: u32, factor: f32) -> (u32, u32) {
    let w = ((width as f64 * factor as f64).floor() as u32).max(1);
    let h = ((height as f64 * factor as f64).floor() as u32).max(1);
    (w, h)
}

/// Resample with linear interpolation at a uniform scale factor.
pub fn resample(raster: &Raster, factor: f32) -> Raster {
    let (w, h) = scaled_dimensions(raster.width(), raster.height(), factor);
    if (w, h) == raster.dimensions() {
        return raster.clone();
    }
    imageops::resize(raster, w, h, FilterType::Triangle)
}
