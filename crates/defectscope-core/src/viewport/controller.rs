use tracing::{debug, warn};

use crate::raster::{is_absent, resample, Raster};

use super::state::ViewportState;
use super::surface::Surface;

/// Base rasters plus what is currently on screen.
#[derive(Clone, Debug)]
struct LoadedViews {
    source: Raster,
    derived: Raster,
    /// Last resample of `source`; replaced on every zoom, never edited in place.
    scaled_source: Raster,
    scaled_derived: Raster,
    state: ViewportState,
}

/// Keeps the original view and the edge view at the same zoom and pan.
///
/// Without images every gesture is a no-op.
pub struct ViewportController<S: Surface> {
    original: S,
    derived: S,
    views: Option<LoadedViews>,
}

impl<S: Surface> ViewportController<S> {
    pub fn new(original: S, derived: S) -> Self {
        Self {
            original,
            derived,
            views: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.views.is_some()
    }

    /// Current viewport, or `None` while empty.
    pub fn state(&self) -> Option<ViewportState> {
        self.views.as_ref().map(|v| v.state)
    }

    /// Effective zoom; identity while empty.
    pub fn zoom(&self) -> f32 {
        self.state().unwrap_or_default().zoom()
    }

    pub fn pan_offset(&self) -> (i32, i32) {
        self.state().unwrap_or_default().pan
    }

    /// The unscaled source raster, if any.
    pub fn source(&self) -> Option<&Raster> {
        self.views.as_ref().map(|v| &v.source)
    }

    /// The unscaled edge raster, if any.
    pub fn derived(&self) -> Option<&Raster> {
        self.views.as_ref().map(|v| &v.derived)
    }

    /// The rasters as last handed to the surfaces: `(original, derived)`.
    pub fn scaled(&self) -> Option<(&Raster, &Raster)> {
        self.views
            .as_ref()
            .map(|v| (&v.scaled_source, &v.scaled_derived))
    }

    pub fn original_surface(&self) -> &S {
        &self.original
    }

    pub fn derived_surface(&self) -> &S {
        &self.derived
    }

    pub fn surfaces_mut(&mut self) -> (&mut S, &mut S) {
        (&mut self.original, &mut self.derived)
    }

    /// Install new base rasters and show them at native size with no pan.
    ///
    /// Returns `false` and leaves everything untouched if either raster is empty.
    pub fn set_images(&mut self, source: Raster, derived: Raster) -> bool {
        if is_absent(&source) || is_absent(&derived) {
            warn!("Ignoring empty raster; nothing to show");
            return false;
        }
        if source.dimensions() != derived.dimensions() {
            warn!(
                source = ?source.dimensions(),
                derived = ?derived.dimensions(),
                "Source and derived rasters differ in size"
            );
        }

        let views = LoadedViews {
            scaled_source: source.clone(),
            scaled_derived: derived.clone(),
            source,
            derived,
            state: ViewportState::default(),
        };
        debug!(size = ?views.source.dimensions(), "Viewport reset for new images");
        self.views = Some(views);
        self.render();
        true
    }

    /// Clamp `factor` into the zoom range and resample both views with it.
    ///
    /// Returns the zoom actually applied, or `None` while empty.
    pub fn set_zoom(&mut self, factor: f32) -> Option<f32> {
        let views = self.views.as_mut()?;
        let zoom = views.state.set_zoom(factor);

        views.scaled_source = resample(&views.source, zoom);
        views.scaled_derived = resample(&views.derived, zoom);
        debug!(
            requested = factor,
            zoom,
            size = ?views.scaled_source.dimensions(),
            "Zoom applied to both views"
        );

        self.render();
        Some(zoom)
    }

    /// Multiply the current zoom, e.g. by one scroll-wheel step.
    pub fn adjust_zoom(&mut self, multiplier: f32) -> Option<f32> {
        let current = self.state()?.zoom();
        self.set_zoom(current * multiplier)
    }

    /// Shift both views by the same amount without resampling.
    ///
    /// Returns the new offset, or `None` while empty.
    pub fn pan(&mut self, dx: i32, dy: i32) -> Option<(i32, i32)> {
        let views = self.views.as_mut()?;
        views.state.pan_by(dx, dy);
        let offset = views.state.pan;
        self.original.move_to(offset);
        self.derived.move_to(offset);
        Some(offset)
    }

    /// Redraw both surfaces from the cached scaled rasters.
    fn render(&mut self) {
        let Some(views) = self.views.as_ref() else {
            return;
        };
        let offset = views.state.pan;
        self.original.clear();
        self.derived.clear();
        self.original.blit(&views.scaled_source, offset);
        self.derived.blit(&views.scaled_derived, offset);
    }
}
