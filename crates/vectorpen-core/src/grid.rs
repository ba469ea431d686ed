//! Drawing grid: snapping policy and overlay geometry.

use crate::geometry::PointExt;
use crate::snap::{SNAP_TOLERANCE, snap_to_grid};
use kurbo::{Line, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Default grid spacing in canvas units.
pub const DEFAULT_GRID_SPACING: f64 = 50.0;

/// Smallest spacing for which overlay lines are generated.
pub const MIN_GRID_SPACING: f64 = 1.0;

/// A snapping grid with its spacing and snap tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Horizontal and vertical spacing.
    pub spacing: Size,
    /// Distance from a grid line within which coordinates snap.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    SNAP_TOLERANCE
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SPACING, DEFAULT_GRID_SPACING)
    }
}

impl Grid {
    /// Create a grid with the default snap tolerance.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            spacing: Size::new(width, height),
            tolerance: SNAP_TOLERANCE,
        }
    }

    /// Override the snap tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Snap a point to this grid (per axis, within tolerance).
    pub fn snap(&self, point: Point) -> Point {
        snap_to_grid(point, self.spacing, self.tolerance)
    }

    /// Guide lines covering `bounds`: horizontal lines first, then vertical.
    ///
    /// Lines start at the origin and step by the spacing up to (excluding)
    /// the far edge of `bounds`. Spacing below [`MIN_GRID_SPACING`] or
    /// unbounded `bounds` yield no lines.
    pub fn lines(&self, bounds: Rect) -> Vec<Line> {
        let mut lines = Vec::new();
        if !(self.spacing.width >= MIN_GRID_SPACING && self.spacing.height >= MIN_GRID_SPACING)
            || !bounds.is_finite()
        {
            return lines;
        }

        let mut y = 0.0;
        while y < bounds.y1 {
            lines.push(Line::new((bounds.x0, y), (bounds.x1, y)));
            y += self.spacing.height;
        }
        let mut x = 0.0;
        while x < bounds.x1 {
            lines.push(Line::new((x, bounds.y0), (x, bounds.y1)));
            x += self.spacing.width;
        }
        lines
    }
}

/// Snap `point` to `grid` when one is given, then round it.
///
/// Every stored point passes through here so that anchors and control
/// points share the same placement rule.
pub fn place(point: Point, grid: Option<Grid>) -> Point {
    match grid {
        Some(grid) => grid.snap(point).rounded(),
        None => point.rounded(),
    }
}
