use defectscope_core::raster::Raster;

/// Convert an RGB raster to an egui ColorImage, one texel per pixel.
pub fn raster_to_color_image(raster: &Raster) -> egui::ColorImage {
    let size = [raster.width() as usize, raster.height() as usize];
    egui::ColorImage::from_rgb(size, raster.as_raw())
}

/// Screen offset of a raster origin.
pub fn offset_to_vec2(offset: (i32, i32)) -> egui::Vec2 {
    egui::vec2(offset.0 as f32, offset.1 as f32)
}
