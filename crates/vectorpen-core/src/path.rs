//! Derivation of draw commands from the ordered elements.

use crate::element::Element;
use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};

/// One step of path construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        to: Point,
        control: Point,
    },
    CurveTo {
        to: Point,
        control1: Point,
        control2: Point,
    },
}

impl DrawCommand {
    /// The on-curve point this command ends at.
    pub fn end_point(&self) -> Point {
        match *self {
            DrawCommand::MoveTo(to) | DrawCommand::LineTo(to) => to,
            DrawCommand::QuadTo { to, .. } | DrawCommand::CurveTo { to, .. } => to,
        }
    }

    /// Convert to a kurbo path element.
    pub fn to_path_el(&self) -> PathEl {
        match *self {
            DrawCommand::MoveTo(to) => PathEl::MoveTo(to),
            DrawCommand::LineTo(to) => PathEl::LineTo(to),
            DrawCommand::QuadTo { to, control } => PathEl::QuadTo(control, to),
            DrawCommand::CurveTo {
                to,
                control1,
                control2,
            } => PathEl::CurveTo(control1, control2, to),
        }
    }
}

/// Build the draw commands for elements in curve order.
///
/// A segment is cubic when the previous element has an outgoing handle,
/// quadratic when only the current element has handles, and straight
/// otherwise.
pub fn build_commands<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Vec<DrawCommand> {
    let mut elements = elements.into_iter();
    let Some(first) = elements.next() else {
        return Vec::new();
    };

    let mut commands = vec![DrawCommand::MoveTo(first.anchor())];
    let mut previous_outgoing = first.secondary_control_point();

    for element in elements {
        let to = element.anchor();
        let incoming = element.control_points().map(|cps| cps.primary);
        let command = match (previous_outgoing, incoming) {
            (Some(control1), incoming) => DrawCommand::CurveTo {
                to,
                control1,
                control2: incoming.unwrap_or(to),
            },
            (None, Some(control)) => DrawCommand::QuadTo { to, control },
            (None, None) => DrawCommand::LineTo(to),
        };
        commands.push(command);
        previous_outgoing = element.secondary_control_point();
    }
    commands
}

/// Convert draw commands into a kurbo path for stroking.
pub fn to_bez_path(commands: &[DrawCommand]) -> BezPath {
    BezPath::from_vec(commands.iter().map(DrawCommand::to_path_el).collect())
}
