/// Smallest zoom factor either view may be shown at.
pub const MIN_ZOOM: f32 = 0.5;

/// Largest zoom factor either view may be shown at.
pub const MAX_ZOOM: f32 = 3.0;

/// Zoom factor of a freshly loaded image.
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom multiplier applied per scroll-wheel tick towards the user.
pub const WHEEL_ZOOM_IN: f32 = 1.1;

/// Zoom multiplier applied per scroll-wheel tick away from the user.
pub const WHEEL_ZOOM_OUT: f32 = 0.9;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Canny hysteresis low threshold used for the edge view.
pub const DEFAULT_CANNY_LOW: f32 = 50.0;

/// Canny hysteresis high threshold used for the edge view.
pub const DEFAULT_CANNY_HIGH: f32 = 150.0;

/// Intensity at or below which a pixel counts as defect foreground.
pub const DEFAULT_DEFECT_THRESHOLD: u8 = 128;

/// Minimum contour area kept in a defect report. Zero keeps everything.
pub const DEFAULT_MIN_DEFECT_AREA: f64 = 0.0;

/// Text shown when a report contains no records.
pub const NO_DEFECTS_MESSAGE: &str = "No defects detected";
