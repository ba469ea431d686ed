//! The drawing: ordered curve elements, selection and grid.

use crate::codegen::{self, CodeStyle};
use crate::element::{Element, ElementId};
use crate::grid::{Grid, place};
use crate::input::{Direction, DragGesture};
use crate::path::{self, DrawCommand};
use kurbo::{BezPath, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single editable curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drawing {
    /// All elements, keyed by ID.
    elements: HashMap<ElementId, Element>,
    /// Curve order of elements (first to last).
    order: Vec<ElementId>,
    /// Selected element IDs.
    selection: HashSet<ElementId>,
    /// Grid that placements and mouse moves snap to.
    pub grid: Option<Grid>,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new(Some(Grid::default()))
    }
}

impl Drawing {
    /// Create an empty drawing.
    pub fn new(grid: Option<Grid>) -> Self {
        Self {
            elements: HashMap::new(),
            order: Vec::new(),
            selection: HashSet::new(),
            grid,
        }
    }

    /// Append an element at the end of the curve.
    pub fn push(&mut self, element: Element) -> ElementId {
        let id = element.id();
        self.order.push(id);
        self.elements.insert(id, element);
        id
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Elements in curve order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// The most recently added element.
    pub fn last(&self) -> Option<&Element> {
        self.order.last().and_then(|id| self.elements.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Create an element from a completed placement gesture.
    ///
    /// A press that travelled no further than `drag_threshold` creates a
    /// corner; a longer drag also sets the outgoing handle at the release
    /// location.
    pub fn add_point(&mut self, gesture: &DragGesture, drag_threshold: f64) -> ElementId {
        let anchor = place(gesture.start, self.grid);
        let secondary = gesture
            .is_drag(drag_threshold)
            .then(|| place(gesture.location, self.grid));
        let id = self.push(Element::new(anchor, secondary));
        log::debug!("Added element {} at {:?}", id, anchor);
        id
    }

    /// A copy of this drawing with `gesture` applied as if it had ended.
    pub fn preview(&self, gesture: &DragGesture, drag_threshold: f64) -> Drawing {
        let mut copy = self.clone();
        copy.add_point(gesture, drag_threshold);
        copy
    }

    /// Currently selected IDs.
    pub fn selection(&self) -> &HashSet<ElementId> {
        &self.selection
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selection.contains(&id)
    }

    /// Select `id` alone, or toggle it within the selection.
    ///
    /// IDs that do not belong to this drawing are ignored.
    pub fn toggle_select(&mut self, id: ElementId, exclusive: bool) {
        if !self.contains(id) {
            return;
        }
        if exclusive {
            self.selection.clear();
            self.selection.insert(id);
        } else if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Move every selected element by `delta`, snapping to the grid if asked.
    pub fn move_selection(&mut self, delta: Vec2, snap: bool) {
        let grid = if snap { self.grid } else { None };
        for id in &self.selection {
            if let Some(element) = self.elements.get_mut(id) {
                element.move_by(delta, grid);
            }
        }
    }

    /// Keyboard nudge of the selection by `distance` units. Never snaps.
    pub fn move_by_direction(&mut self, direction: Direction, distance: f64) {
        self.move_selection(direction.offset(distance), false);
    }

    /// Remove every selected element and clear the selection.
    /// Returns the number of elements removed.
    pub fn delete_selection(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let selection = std::mem::take(&mut self.selection);
        self.order.retain(|id| !selection.contains(id));
        let before = self.elements.len();
        self.elements.retain(|id, _| !selection.contains(id));
        let removed = before - self.elements.len();
        log::debug!("Deleted {} element(s)", removed);
        removed
    }

    /// Draw commands for the current curve.
    pub fn path_commands(&self) -> Vec<DrawCommand> {
        path::build_commands(self.elements())
    }

    /// The curve as a kurbo path.
    pub fn to_bez_path(&self) -> BezPath {
        path::to_bez_path(&self.path_commands())
    }

    /// Generated source code for the current curve.
    pub fn code(&self, style: CodeStyle) -> String {
        codegen::generate(&self.path_commands(), style)
    }

    /// Serialize the drawing to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
