use std::path::Path;

use image::ImageFormat;
use tracing::{debug, info};

use crate::edges::EdgeDetector;
use crate::error::{DefectscopeError, Result};
use crate::raster::{is_absent, LoadedImages, Raster, SourceImage};

/// Decode any format the `image` crate understands into an RGB source image.
pub fn load_source_image(path: &Path) -> Result<SourceImage> {
    let img = image::open(path).map_err(|source| DefectscopeError::DecodeFailure {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), color = ?img.color(), "Decoded image");

    let raster = img.to_rgb8();
    if is_absent(&raster) {
        return Err(DefectscopeError::InvalidDimensions {
            width: raster.width(),
            height: raster.height(),
        });
    }

    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        "Loaded source image"
    );
    Ok(SourceImage::new(path.to_path_buf(), raster))
}

/// Decode a file and derive its edge view in one step.
pub fn load_session(path: &Path, detector: &impl EdgeDetector) -> Result<LoadedImages> {
    let source = load_source_image(path)?;
    let derived = detector.detect(&source.raster);
    Ok(LoadedImages { source, derived })
}

/// Save a raster, choosing the format from the file extension (PNG when unknown).
///
/// Missing parent directories are created.
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    raster.save_with_format(path, format)?;
    debug!(path = %path.display(), ?format, "Saved raster");
    Ok(())
}
