pub mod contours;
pub mod record;
pub mod reporter;
pub mod threshold;

pub use contours::{ContourExtractor, ContourPoints, ImageprocContourExtractor};
pub use record::{DefectRecord, DefectReport};
pub use reporter::{generate_defect_report, DefectReporter};
