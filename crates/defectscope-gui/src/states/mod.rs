mod ui;
mod viewport;

pub use ui::{Dialog, DialogKind, UIState};
pub use viewport::TextureSurface;
