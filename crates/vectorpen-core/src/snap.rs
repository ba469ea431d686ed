//! Snap functionality for aligning points to the grid.

use kurbo::{Point, Size};

/// Distance from a grid multiple within which a coordinate is snapped.
pub const SNAP_TOLERANCE: f64 = 10.0;

/// Snap a single coordinate to the nearest multiple of `step`.
///
/// The coordinate only moves when it lies strictly closer than `tolerance`
/// to a multiple, on either side. Returns `None` when it is left alone.
/// A non-positive or non-finite step never snaps.
pub fn snap_coordinate(value: f64, step: f64, tolerance: f64) -> Option<f64> {
    if !(step > 0.0 && step.is_finite()) {
        return None;
    }
    let remainder = value.rem_euclid(step);
    if remainder < tolerance || step - remainder < tolerance {
        Some((value / step).round() * step)
    } else {
        None
    }
}

/// Snap each axis of `point` independently to the grid spacing. An axis
/// outside the tolerance keeps its coordinate.
pub fn snap_to_grid(point: Point, spacing: Size, tolerance: f64) -> Point {
    Point::new(
        snap_coordinate(point.x, spacing.width, tolerance).unwrap_or(point.x),
        snap_coordinate(point.y, spacing.height, tolerance).unwrap_or(point.y),
    )
}
