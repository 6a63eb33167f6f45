use defectscope_core::raster::Raster;
use defectscope_core::viewport::Surface;

use crate::convert::{offset_to_vec2, raster_to_color_image};

/// One of the two side-by-side image displays, backed by an egui texture.
pub struct TextureSurface {
    name: &'static str,
    /// Blitted image not yet uploaded to the GPU.
    pending: Option<egui::ColorImage>,
    visible: bool,
    pub texture: Option<egui::TextureHandle>,
    /// Size of the raster currently shown, in pixels.
    pub image_size: Option<[usize; 2]>,
    /// Top-left corner of the raster relative to the display origin.
    pub offset: egui::Vec2,
}

impl TextureSurface {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pending: None,
            visible: false,
            texture: None,
            image_size: None,
            offset: egui::Vec2::ZERO,
        }
    }

    /// Push any blitted raster to the texture. Reuses the existing handle.
    pub fn upload(&mut self, ctx: &egui::Context) {
        let Some(image) = self.pending.take() else {
            return;
        };
        match self.texture {
            Some(ref mut texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture(self.name, image, egui::TextureOptions::NEAREST));
            }
        }
    }

    /// Texture and pixel size to paint, if something is shown.
    pub fn drawable(&self) -> Option<(egui::TextureId, egui::Vec2)> {
        if !self.visible {
            return None;
        }
        let texture = self.texture.as_ref()?;
        let size = self.image_size?;
        Some((texture.id(), egui::vec2(size[0] as f32, size[1] as f32)))
    }
}

impl Surface for TextureSurface {
    fn clear(&mut self) {
        self.pending = None;
        self.visible = false;
        self.image_size = None;
    }

    fn blit(&mut self, raster: &Raster, offset: (i32, i32)) {
        let image = raster_to_color_image(raster);
        self.image_size = Some(image.size);
        self.pending = Some(image);
        self.offset = offset_to_vec2(offset);
        self.visible = true;
    }

    fn move_to(&mut self, offset: (i32, i32)) {
        self.offset = offset_to_vec2(offset);
    }
}
