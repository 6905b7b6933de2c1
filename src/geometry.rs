//! Points, sizes and the polar helpers used by radial charts.
//!
//! Angles are in degrees. Zero points along +x and angles grow towards +y,
//! so on a y-down surface they run clockwise.

use serde::{Deserialize, Serialize};

use crate::math::{DEG2RAD, RAD2DEG};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

/// Position around `center` at distance `dist` and `angle` degrees.
#[inline]
pub fn position(center: Point, dist: f64, angle: f64) -> Point {
    let rad = angle * DEG2RAD;
    Point::new(center.x + dist * rad.cos(), center.y + dist * rad.sin())
}

/// Fold `angle` into `[0, 360)`.
///
/// Undefined for NaN and infinities (returns NaN).
pub fn normalized_angle(angle: f64) -> f64 {
    // `%` is exact for floats; only the shift by 360 can round.
    let mut folded = angle % 360.0;
    if folded < 0.0 {
        folded += 360.0;
    }
    // `+ 0.0` turns the -0.0 left by exact multiples of -360 into 0.0.
    if folded >= 360.0 {
        0.0
    } else {
        folded + 0.0
    }
}

/// Angle of `point` as seen from `center`, in `[0, 360)`.
///
/// Inverse of [`position`] for any non-zero distance.
pub fn angle_for_point(center: Point, point: Point) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    normalized_angle(dy.atan2(dx) * RAD2DEG)
}

pub fn distance_to_center(center: Point, point: Point) -> f64 {
    (point.x - center.x).hypot(point.y - center.y)
}

/// Compute a circle that fits within `area`, accounting for aspect ratio.
/// `aspect_ratio`: height/width of a single unit (e.g. 2.0 for terminal
/// cells that are about twice as tall as wide, 1.0 for pixels).
/// Returns the center and the largest radius with a 5% margin.
pub fn fit_circle(area: Size, aspect_ratio: f64) -> (Point, f64) {
    let center = Point::new(area.width / 2.0, area.height / 2.0);
    let effective_w = area.width / aspect_ratio.max(f64::MIN_POSITIVE);
    let max_radius = (effective_w.min(area.height) / 2.0).max(0.0) * 0.95;
    (center, max_radius)
}
