pub mod image_io;

pub use image_io::{load_session, load_source_image, save_raster};
