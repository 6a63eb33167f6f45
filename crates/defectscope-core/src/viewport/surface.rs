use crate::raster::Raster;

/// A display region that shows at most one raster at an absolute pixel offset.
pub trait Surface {
    /// Remove whatever is currently shown.
    fn clear(&mut self);

    /// Show `raster` with its top-left corner at `offset`.
    fn blit(&mut self, raster: &Raster, offset: (i32, i32));

    /// Move the raster already shown to `offset` without re-blitting it.
    fn move_to(&mut self, offset: (i32, i32));
}
