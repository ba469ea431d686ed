//! Marker geometry and hit testing for anchors and control handles.

use crate::drawing::Drawing;
use crate::element::{ControlPoints, ElementId};
use kurbo::{Line, Point};

/// Which part of an element a handle manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// The on-curve anchor.
    Anchor,
    /// The handle drawn at the primary (incoming) position.
    PrimaryControl,
    /// The handle drawn at the secondary (outgoing) position.
    SecondaryControl,
}

/// A draggable marker with its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Element the handle belongs to.
    pub element: ElementId,
    /// Handle type.
    pub kind: HandleKind,
    /// Position in canvas coordinates.
    pub position: Point,
}

impl Handle {
    /// Check if a point hits this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// Everything the host needs to draw one element's markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: ElementId,
    pub anchor: Point,
    pub selected: bool,
    /// Control handles, only for selected elements or the last element
    /// while nothing is selected.
    pub controls: Option<ControlPoints>,
}

impl Marker {
    /// Guide lines from the primary handle to the anchor and on to the
    /// secondary handle.
    pub fn guide_lines(&self) -> Option<[Line; 2]> {
        self.controls.map(|cps| {
            [
                Line::new(cps.primary, self.anchor),
                Line::new(self.anchor, cps.secondary),
            ]
        })
    }

    /// The anchor first, then the control handles. The anchor is painted
    /// above its own handles, so it wins when they overlap.
    pub fn handles(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(3);
        handles.push(Handle {
            element: self.id,
            kind: HandleKind::Anchor,
            position: self.anchor,
        });
        if let Some(cps) = self.controls {
            handles.push(Handle {
                element: self.id,
                kind: HandleKind::PrimaryControl,
                position: cps.primary,
            });
            handles.push(Handle {
                element: self.id,
                kind: HandleKind::SecondaryControl,
                position: cps.secondary,
            });
        }
        handles
    }
}

/// Markers for every element, in curve order.
pub fn markers(drawing: &Drawing) -> Vec<Marker> {
    let last_id = drawing.last().map(|el| el.id());
    let nothing_selected = drawing.selection().is_empty();

    drawing
        .elements()
        .map(|el| {
            let selected = drawing.is_selected(el.id());
            let show_controls = selected || (nothing_selected && Some(el.id()) == last_id);
            Marker {
                id: el.id(),
                anchor: el.anchor(),
                selected,
                controls: if show_controls { el.control_points() } else { None },
            }
        })
        .collect()
}

/// Find the handle under `point`.
///
/// Follows the paint order from the top: later elements first, and within
/// an element its anchor before its control handles.
pub fn hit_test_handles(markers: &[Marker], point: Point, tolerance: f64) -> Option<Handle> {
    markers
        .iter()
        .rev()
        .flat_map(Marker::handles)
        .find(|h| h.hit_test(point, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DragGesture;

    fn drawing_with_two() -> (Drawing, ElementId, ElementId) {
        let mut drawing = Drawing::new(None);
        let a = drawing.add_point(
            &DragGesture {
                start: Point::new(0.0, 0.0),
                location: Point::new(20.0, 0.0),
            },
            1.0,
        );
        let b = drawing.add_point(
            &DragGesture {
                start: Point::new(100.0, 0.0),
                location: Point::new(100.0, 40.0),
            },
            1.0,
        );
        (drawing, a, b)
    }

    #[test]
    fn test_last_element_shows_controls_when_nothing_selected() {
        let (drawing, a, b) = drawing_with_two();
        let markers = markers(&drawing);
        assert_eq!(markers.len(), 2);
        let ma = markers.iter().find(|m| m.id == a).unwrap();
        let mb = markers.iter().find(|m| m.id == b).unwrap();
        assert!(ma.controls.is_none());
        let cps = mb.controls.unwrap();
        assert_eq!(cps.secondary, Point::new(100.0, 40.0));
        assert_eq!(cps.primary, Point::new(100.0, -40.0));
    }

    #[test]
    fn test_selected_elements_show_controls() {
        let (mut drawing, a, b) = drawing_with_two();
        drawing.toggle_select(a, true);
        let markers = markers(&drawing);
        let ma = markers.iter().find(|m| m.id == a).unwrap();
        let mb = markers.iter().find(|m| m.id == b).unwrap();
        assert!(ma.selected);
        assert!(ma.controls.is_some());
        assert!(mb.controls.is_none());
    }

    #[test]
    fn test_guide_lines() {
        let (drawing, _, b) = drawing_with_two();
        let markers = markers(&drawing);
        let mb = markers.iter().find(|m| m.id == b).unwrap();
        let [incoming, outgoing] = mb.guide_lines().unwrap();
        assert_eq!(incoming, Line::new((100.0, -40.0), (100.0, 0.0)));
        assert_eq!(outgoing, Line::new((100.0, 0.0), (100.0, 40.0)));
    }

    #[test]
    fn test_hit_test_control_handle() {
        let (drawing, _, b) = drawing_with_two();
        let markers = markers(&drawing);
        let hit = hit_test_handles(&markers, Point::new(101.0, 38.0), 7.0).unwrap();
        assert_eq!(hit.element, b);
        assert_eq!(hit.kind, HandleKind::SecondaryControl);
    }

    #[test]
    fn test_hit_test_anchor() {
        let (drawing, a, _) = drawing_with_two();
        let markers = markers(&drawing);
        let hit = hit_test_handles(&markers, Point::new(3.0, -2.0), 7.0).unwrap();
        assert_eq!(hit.element, a);
        assert_eq!(hit.kind, HandleKind::Anchor);
    }

    #[test]
    fn test_hidden_controls_not_hit() {
        let (drawing, _, _) = drawing_with_two();
        let markers = markers(&drawing);
        // The first element's handle at (20, 0) is hidden.
        assert!(hit_test_handles(&markers, Point::new(20.0, 0.0), 7.0).is_none());
    }

    #[test]
    fn test_hit_test_miss() {
        let (drawing, _, _) = drawing_with_two();
        assert!(hit_test_handles(&markers(&drawing), Point::new(50.0, 50.0), 7.0).is_none());
    }

    #[test]
    fn test_anchor_wins_over_own_handle() {
        let mut drawing = Drawing::new(None);
        let a = drawing.add_point(
            &DragGesture {
                start: Point::new(100.0, 100.0),
                location: Point::new(103.0, 100.0),
            },
            1.0,
        );
        let hit = hit_test_handles(&markers(&drawing), Point::new(100.0, 100.0), 7.0).unwrap();
        assert_eq!(hit.element, a);
        assert_eq!(hit.kind, HandleKind::Anchor);
    }

    #[test]
    fn test_later_handle_wins_over_earlier_anchor() {
        let mut drawing = Drawing::new(None);
        drawing.add_point(&DragGesture::new(Point::new(0.0, 0.0)), 1.0);
        let b = drawing.add_point(
            &DragGesture {
                start: Point::new(40.0, 0.0),
                location: Point::new(80.0, 0.0),
            },
            1.0,
        );
        // The primary handle of `b` is mirrored onto (0, 0).
        let hit = hit_test_handles(&markers(&drawing), Point::new(0.0, 0.0), 7.0).unwrap();
        assert_eq!(hit.element, b);
        assert_eq!(hit.kind, HandleKind::PrimaryControl);
    }
}
