//! Curve elements: one anchor plus its control handles.

use crate::geometry::PointExt;
use crate::grid::{Grid, place};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Where an element's incoming (primary) handle comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PrimaryControl {
    /// Mirror image of the secondary handle about the anchor.
    #[default]
    Mirrored,
    /// Positioned independently of the secondary handle.
    Explicit(Point),
}

/// The resolved handle pair of a curve element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    /// Incoming handle, shaping the segment that ends at this anchor.
    pub primary: Point,
    /// Outgoing handle, shaping the segment that leaves this anchor.
    pub secondary: Point,
}

/// One on-curve anchor of the drawing.
///
/// All stored points are rounded (and grid snapped where a grid applies),
/// so the fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    anchor: Point,
    secondary: Option<Point>,
    #[serde(default)]
    primary: PrimaryControl,
}

impl Element {
    /// Create an element. Points are rounded but not snapped.
    pub fn new(anchor: Point, secondary: Option<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor: anchor.rounded(),
            secondary: secondary.map(PointExt::rounded),
            primary: PrimaryControl::Mirrored,
        }
    }

    /// Create a corner element with no handles.
    pub fn corner(anchor: Point) -> Self {
        Self::new(anchor, None)
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The on-curve point.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// The outgoing handle, if any.
    pub fn secondary_control_point(&self) -> Option<Point> {
        self.secondary
    }

    /// The incoming handle override, if the handles were decoupled.
    pub fn explicit_primary_control_point(&self) -> Option<Point> {
        match self.primary {
            PrimaryControl::Explicit(point) => Some(point),
            PrimaryControl::Mirrored => None,
        }
    }

    pub fn primary_control(&self) -> PrimaryControl {
        self.primary
    }

    /// The incoming handle: the explicit override, else the mirrored
    /// secondary handle.
    pub fn primary_control_point(&self) -> Option<Point> {
        match self.primary {
            PrimaryControl::Explicit(point) => Some(point),
            PrimaryControl::Mirrored => self.secondary.map(|s| s.mirrored(self.anchor)),
        }
    }

    /// Both handles, present only when the element has a secondary handle
    /// and a primary one.
    pub fn control_points(&self) -> Option<ControlPoints> {
        let secondary = self.secondary?;
        let primary = self.primary_control_point()?;
        Some(ControlPoints { primary, secondary })
    }

    /// Whether the handles move independently of each other.
    pub fn is_decoupled(&self) -> bool {
        matches!(self.primary, PrimaryControl::Explicit(_))
    }

    /// Move the anchor, carrying the secondary handle along.
    ///
    /// An explicit primary handle stays where it is.
    pub fn move_anchor(&mut self, to: Point, grid: Option<Grid>) {
        let target = place(to, grid);
        let diff = target - self.anchor;
        self.anchor = target;
        self.secondary = self.secondary.map(|s| s + diff);
    }

    /// Move the anchor by an offset.
    pub fn move_by(&mut self, delta: Vec2, grid: Option<Grid>) {
        self.move_anchor(self.anchor + delta, grid);
    }

    /// Drag the handle drawn at the primary position.
    ///
    /// While the handles are coupled this repositions the secondary handle
    /// as the mirror of `to`, so the dragged handle follows the pointer.
    /// With `decoupled`, or once an explicit primary exists, `to` becomes
    /// the explicit primary and the secondary handle keeps its value.
    pub fn move_secondary_control_point(&mut self, to: Point, grid: Option<Grid>, decoupled: bool) {
        let target = place(to, grid);
        if decoupled || self.is_decoupled() {
            self.primary = PrimaryControl::Explicit(target);
        } else {
            self.secondary = Some(target.mirrored(self.anchor));
        }
    }

    /// Drag the handle drawn at the secondary position.
    ///
    /// With `decoupled` and no explicit primary yet, the current mirrored
    /// primary is frozen first so it stays put from now on.
    pub fn move_primary_control_point(&mut self, to: Point, grid: Option<Grid>, decoupled: bool) {
        let target = place(to, grid);
        if decoupled && !self.is_decoupled() {
            if let Some(primary) = self.primary_control_point() {
                self.primary = PrimaryControl::Explicit(primary);
            }
        }
        self.secondary = Some(target);
    }

    /// Drop both handles, turning the element into a corner.
    pub fn reset_control_points(&mut self) {
        self.primary = PrimaryControl::Mirrored;
        self.secondary = None;
    }

    /// Set the secondary handle and restore mirroring of the primary one.
    pub fn set_coupled_control_point(&mut self, to: Point) {
        self.primary = PrimaryControl::Mirrored;
        self.secondary = Some(to.rounded());
    }
}
