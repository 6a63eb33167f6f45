#![allow(dead_code)]

use defectscope_core::raster::Raster;
use defectscope_core::viewport::Surface;
use image::Rgb;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Solid white raster.
pub fn white_raster(width: u32, height: u32) -> Raster {
    Raster::from_pixel(width, height, WHITE)
}

/// Fill the rectangle `(x, y, w, h)` with `color`.
pub fn fill_rect(raster: &mut Raster, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for row in y..y + h {
        for col in x..x + w {
            raster.put_pixel(col, row, color);
        }
    }
}

/// White background with one black square.
pub fn raster_with_square(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> Raster {
    let mut raster = white_raster(width, height);
    fill_rect(&mut raster, x, y, w, h, BLACK);
    raster
}

/// Horizontal gradient so resampled output depends on the sampling.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    Raster::from_fn(width, height, |x, y| {
        let v = ((x * 255) / width.max(1)) as u8;
        Rgb([v, (y % 256) as u8, 255 - v])
    })
}

/// What a fake surface was asked to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Blit { size: (u32, u32), offset: (i32, i32) },
    Move { offset: (i32, i32) },
}

/// Surface that remembers every call and the raster it currently holds.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    pub shown: Option<Raster>,
    pub offset: (i32, i32),
}

impl RecordingSurface {
    pub fn blit_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Blit { .. }))
            .count()
    }

    pub fn shown_size(&self) -> Option<(u32, u32)> {
        self.shown.as_ref().map(|r| r.dimensions())
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
        self.shown = None;
    }

    fn blit(&mut self, raster: &Raster, offset: (i32, i32)) {
        self.ops.push(SurfaceOp::Blit {
            size: raster.dimensions(),
            offset,
        });
        self.shown = Some(raster.clone());
        self.offset = offset;
    }

    fn move_to(&mut self, offset: (i32, i32)) {
        self.ops.push(SurfaceOp::Move { offset });
        self.offset = offset;
    }
}
