pub mod controller;
pub mod state;
pub mod surface;

pub use controller::ViewportController;
pub use state::{clamp_zoom, DragState, ViewportState};
pub use surface::Surface;
