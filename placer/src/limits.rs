use std::ops::Range;

use crate::placer::PlacementError;

const MIN_RADIUS_FRAC: f64 = 0.05;
const MAX_RADIUS_FRAC: f64 = 0.20;
const MIN_SIDE_FRAC: f64 = 0.15;
const MAX_SIDE_FRAC: f64 = 0.6;

/// Sampling ranges derived from the canvas size.
///
/// Construction fails for canvases too small (or too elongated) for some draw to be
/// well defined, so a validated value never produces an empty range at sampling time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeLimits {
    width: u32,
    height: u32,
    radius: Range<i32>,
    side: Range<i32>,
}

impl ShapeLimits {
    pub fn new(width: u32, height: u32) -> Result<Self, PlacementError> {
        let degenerate = |what: &'static str, range: &Range<i32>| PlacementError::DegenerateRange {
            what,
            low: range.start,
            high: range.end,
            width,
            height,
        };

        // Radii scale with the canvas area.
        let scale = (f64::from(width) * f64::from(height)).sqrt().floor();
        let radius = (MIN_RADIUS_FRAC * scale) as i32..(MAX_RADIUS_FRAC * scale) as i32;
        if radius.start < 1 || radius.is_empty() {
            return Err(degenerate("circle radius", &radius));
        }
        let largest = radius.end - 1;
        for len in [width, height] {
            let centers = circle_centers(largest, len);
            if centers.is_empty() {
                return Err(degenerate("circle center", &centers));
            }
        }

        let smaller = f64::from(width.min(height));
        let side = (MIN_SIDE_FRAC * smaller) as i32..(MAX_SIDE_FRAC * smaller) as i32;
        if side.start < 2 || side.is_empty() {
            return Err(degenerate("rectangle side", &side));
        }
        let largest = f64::from(side.end - 1) / 2.0;
        for len in [width, height] {
            let centers = rect_centers(largest, len);
            if centers.is_empty() {
                return Err(degenerate("rectangle center", &centers));
            }
        }

        Ok(Self {
            width,
            height,
            radius,
            side,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn radius(&self) -> Range<i32> {
        self.radius.clone()
    }

    /// Integer side lengths before halving.
    pub fn side(&self) -> Range<i32> {
        self.side.clone()
    }
}

/// Centers keeping a circle's bounding square one pixel off every edge.
pub fn circle_centers(radius: i32, len: u32) -> Range<i32> {
    radius + 1..len as i32 - radius - 1
}

/// Centers for a rectangle of real extent `extent`, bounds truncated like the radius ones.
pub fn rect_centers(extent: f64, len: u32) -> Range<i32> {
    (extent + 1.0) as i32..(f64::from(len) - extent - 1.0) as i32
}
