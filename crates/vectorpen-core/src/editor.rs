//! Interactive editing session.
//!
//! The [`Editor`] turns host input events into drawing mutations. A
//! placement drag is kept as a pending gesture and only shown through a
//! preview copy of the drawing; the live drawing changes when the gesture
//! ends, and a cancelled gesture leaves it untouched.

use crate::codegen::{self, CodeStyle};
use crate::config::EditorConfig;
use crate::drawing::Drawing;
use crate::element::ElementId;
use crate::handles::{Handle, HandleKind, Marker, hit_test_handles, markers};
use crate::input::{Direction, DragGesture, Modifiers};
use crate::path::{self, DrawCommand};
use kurbo::{BezPath, Line, Point, Rect};
use std::borrow::Cow;

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// No button held.
    Idle,
    /// Pressed on empty canvas; a new point is created on release.
    Placing(DragGesture),
    /// Pressed on an anchor but not moved past the drag threshold yet.
    PendingClick { id: ElementId, start: Point },
    /// Dragging an anchor. `coupled` drags reshape the handles instead of
    /// moving the selection.
    DraggingAnchor { id: ElementId, coupled: bool },
    /// Dragging a control handle.
    DraggingControl { id: ElementId, kind: HandleKind },
}

/// An editing session over one drawing.
#[derive(Debug, Clone)]
pub struct Editor {
    drawing: Drawing,
    config: EditorConfig,
    interaction: Interaction,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty drawing.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            drawing: Drawing::new(config.snap_grid()),
            config,
            interaction: Interaction::Idle,
        }
    }

    /// The committed drawing.
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Whether a pointer gesture is in progress.
    pub fn is_interacting(&self) -> bool {
        self.interaction != Interaction::Idle
    }

    /// Switch the generated code syntax.
    pub fn set_code_style(&mut self, style: CodeStyle) {
        self.config.code_style = style;
    }

    /// The drawing to render: a preview copy while placing, otherwise the
    /// committed drawing.
    pub fn live_drawing(&self) -> Cow<'_, Drawing> {
        match self.interaction {
            Interaction::Placing(gesture) => {
                Cow::Owned(self.drawing.preview(&gesture, self.config.drag_threshold))
            }
            _ => Cow::Borrowed(&self.drawing),
        }
    }

    /// Pointer pressed at `location`.
    pub fn pointer_down(&mut self, location: Point, _modifiers: Modifiers) {
        let markers = markers(&self.drawing);
        self.interaction = match hit_test_handles(&markers, location, self.config.handle_radius) {
            Some(Handle {
                element,
                kind: HandleKind::Anchor,
                ..
            }) => Interaction::PendingClick {
                id: element,
                start: location,
            },
            Some(Handle { element, kind, .. }) => Interaction::DraggingControl { id: element, kind },
            None => {
                // A new placement gesture replaces any selection.
                self.drawing.clear_selection();
                Interaction::Placing(DragGesture::new(location))
            }
        };
        log::trace!("Pointer down at {:?}: {:?}", location, self.interaction);
    }

    /// Pointer moved to `location` while pressed.
    pub fn pointer_drag(&mut self, location: Point, modifiers: Modifiers) {
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Placing(mut gesture) => {
                gesture.location = location;
                self.interaction = Interaction::Placing(gesture);
            }
            Interaction::PendingClick { id, start } => {
                if start.distance(location) > self.config.drag_threshold {
                    self.interaction = Interaction::DraggingAnchor {
                        id,
                        coupled: modifiers.alt,
                    };
                    self.drag_anchor(id, modifiers.alt, location);
                }
            }
            Interaction::DraggingAnchor { id, coupled } => self.drag_anchor(id, coupled, location),
            Interaction::DraggingControl { id, kind } => {
                self.drag_control(id, kind, location, modifiers.alt)
            }
        }
    }

    /// Pointer released at `location`; completes the current gesture.
    pub fn pointer_up(&mut self, location: Point, modifiers: Modifiers) {
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Placing(mut gesture) => {
                gesture.location = location;
                self.drawing.add_point(&gesture, self.config.drag_threshold);
            }
            Interaction::PendingClick { id, .. } => {
                self.drawing.toggle_select(id, !modifiers.shift);
                log::debug!("Selection now holds {} element(s)", self.drawing.selection().len());
            }
            Interaction::DraggingAnchor { .. } | Interaction::DraggingControl { .. } => {
                self.pointer_drag(location, modifiers);
            }
        }
        self.interaction = Interaction::Idle;
    }

    /// The gesture was interrupted (pointer left the canvas, focus lost).
    /// A pending placement is dropped without touching the drawing.
    pub fn pointer_cancel(&mut self) {
        if let Interaction::Placing(_) = self.interaction {
            log::debug!("Placement cancelled");
        }
        self.interaction = Interaction::Idle;
    }

    /// Double click: turns the anchor under the pointer into a corner.
    pub fn double_click(&mut self, location: Point) {
        let markers = markers(&self.drawing);
        let anchor = markers
            .iter()
            .rev()
            .map(|m| Handle {
                element: m.id,
                kind: HandleKind::Anchor,
                position: m.anchor,
            })
            .find(|h| h.hit_test(location, self.config.handle_radius));
        if let Some(handle) = anchor {
            if let Some(element) = self.drawing.get_mut(handle.element) {
                element.reset_control_points();
                log::debug!("Reset control points of {}", handle.element);
            }
        }
    }

    /// Arrow key nudge of the selection. Never snaps to the grid.
    pub fn key_direction(&mut self, direction: Direction, amplified: bool) {
        self.drawing
            .move_by_direction(direction, self.config.nudge_distance(amplified));
    }

    /// Arrow key given by name; unknown names do nothing.
    pub fn key_named(&mut self, name: &str, amplified: bool) {
        if let Some(direction) = Direction::from_key(name) {
            self.key_direction(direction, amplified);
        }
    }

    /// Delete the selected elements.
    pub fn delete_key(&mut self) {
        self.drawing.delete_selection();
    }

    /// Draw commands of the live drawing.
    pub fn path_commands(&self) -> Vec<DrawCommand> {
        self.live_drawing().path_commands()
    }

    /// The live curve as a kurbo path.
    pub fn bez_path(&self) -> BezPath {
        path::to_bez_path(&self.path_commands())
    }

    /// Generated code for the live drawing in the configured style.
    pub fn code(&self) -> String {
        codegen::generate(&self.path_commands(), self.config.code_style)
    }

    /// Markers of the live drawing.
    pub fn markers(&self) -> Vec<Marker> {
        markers(&self.live_drawing())
    }

    /// Grid overlay lines for the visible `bounds`.
    pub fn grid_lines(&self, bounds: Rect) -> Vec<Line> {
        self.drawing
            .grid
            .map(|grid| grid.lines(bounds))
            .unwrap_or_default()
    }

    fn drag_anchor(&mut self, id: ElementId, coupled: bool, location: Point) {
        if !self.drawing.is_selected(id) {
            self.drawing.toggle_select(id, true);
        }
        if coupled {
            if let Some(element) = self.drawing.get_mut(id) {
                element.set_coupled_control_point(location);
            }
        } else if let Some(anchor) = self.drawing.get(id).map(|el| el.anchor()) {
            self.drawing.move_selection(location - anchor, true);
        }
        log::trace!("Anchor {} dragged to {:?}", id, location);
    }

    fn drag_control(&mut self, id: ElementId, kind: HandleKind, location: Point, decoupled: bool) {
        let grid = self.drawing.grid;
        let Some(element) = self.drawing.get_mut(id) else {
            return;
        };
        match kind {
            HandleKind::PrimaryControl => {
                element.move_secondary_control_point(location, grid, decoupled)
            }
            HandleKind::SecondaryControl => {
                element.move_primary_control_point(location, grid, decoupled)
            }
            HandleKind::Anchor => {}
        }
        log::trace!("Control {:?} of {} dragged to {:?}", kind, id, location);
    }
}
