use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::NO_DEFECTS_MESSAGE;

/// One candidate defect: the bounding box and area of an external contour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub area: f64,
}

impl fmt::Display for DefectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Defect at ({}, {}), Width: {}, Height: {}, Area: {:.1}",
            self.x, self.y, self.width, self.height, self.area
        )
    }
}

/// Records in the order their contours were discovered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DefectReport {
    pub records: Vec<DefectRecord>,
}

impl DefectReport {
    pub fn new(records: Vec<DefectRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Sum of all record areas.
    pub fn total_area(&self) -> f64 {
        self.records.iter().map(|r| r.area).sum()
    }
}

/// One line per record, or the "no defects" message.
impl fmt::Display for DefectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return f.write_str(NO_DEFECTS_MESSAGE);
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
