use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// Zoom and pan shared by both views.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Always within `[MIN_ZOOM, MAX_ZOOM]`.
    zoom: f32,
    /// Translation of both views in screen pixels.
    pub pan: (i32, i32),
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: (0, 0),
        }
    }
}

impl ViewportState {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Store a clamped zoom factor and return the value actually stored.
    ///
    /// NaN and infinities leave the current zoom untouched.
    pub fn set_zoom(&mut self, factor: f32) -> f32 {
        if factor.is_finite() {
            self.zoom = clamp_zoom(factor);
        }
        self.zoom
    }

    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.pan.0 = self.pan.0.saturating_add(dx);
        self.pan.1 = self.pan.1.saturating_add(dy);
    }
}

pub fn clamp_zoom(factor: f32) -> f32 {
    factor.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Pointer tracking for an in-progress drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    last: Option<(i32, i32)>,
}

impl DragState {
    pub fn begin(&mut self, x: i32, y: i32) {
        self.last = Some((x, y));
    }

    /// Movement since the previous position, or `None` when no drag is active.
    pub fn drag_to(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        let (lx, ly) = self.last?;
        self.last = Some((x, y));
        Some((x - lx, y - ly))
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
