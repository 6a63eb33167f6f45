use image::{imageops, GrayImage};
use imageproc::contours::{find_contours, BorderType};

/// A closed boundary, as pixel coordinates `(x, y)` in traversal order.
pub type ContourPoints = Vec<(i32, i32)>;

/// Finds the outermost boundaries of the foreground regions in a binary mask.
pub trait ContourExtractor {
    /// Only external contours: boundaries nested inside another region are skipped.
    fn extract(&self, mask: &GrayImage) -> Vec<ContourPoints>;
}

/// Border following from `imageproc`, keeping outer borders without a parent.
///
/// The mask is traced inside a one-pixel background frame: `find_contours`
/// labels a region touching the image edge as a hole, which would drop it.
#[derive(Clone, Debug, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract(&self, mask: &GrayImage) -> Vec<ContourPoints> {
        let padded = pad_with_background(mask);
        find_contours::<i32>(&padded)
            .into_iter()
            .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
            .map(|c| c.points.iter().map(|p| (p.x - 1, p.y - 1)).collect())
            .collect()
    }
}

/// Copy of `mask` surrounded by a one-pixel zero border.
fn pad_with_background(mask: &GrayImage) -> GrayImage {
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut padded, mask, 1, 1);
    padded
}

/// Axis-aligned bounding box `(x, y, width, height)` with inclusive pixel extents.
///
/// Returns `None` for an empty point list.
pub fn bounding_rect(points: &[(i32, i32)]) -> Option<(i32, i32, u32, u32)> {
    let (&(x0, y0), rest) = points.split_first()?;
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (x0, x0, y0, y0);
    for &(x, y) in rest {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    Some((
        min_x,
        min_y,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    ))
}

/// Signed polygon area by the shoelace formula.
///
/// Positive for counter-clockwise traversal in a y-up frame; callers that only
/// care about size take the absolute value.
pub fn signed_area(points: &[(i32, i32)]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0_f64;
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        twice_area += x1 as f64 * y2 as f64 - x2 as f64 * y1 as f64;
    }
    twice_area / 2.0
}
