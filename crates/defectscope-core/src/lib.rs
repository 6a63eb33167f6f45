pub mod config;
pub mod consts;
pub mod edges;
pub mod error;
pub mod io;
pub mod raster;
pub mod report;
pub mod viewport;

pub use config::AnalysisConfig;
pub use error::{DefectscopeError, Result};
