//! Input vocabulary shared with the host: modifiers, directions, gestures.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer travel above which a press becomes a drag.
pub const DRAG_THRESHOLD: f64 = 1.0;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    /// Option on macOS.
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };
}

/// Arrow key direction for keyboard nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a key name such as `"ArrowUp"` or `"left"`.
    ///
    /// Unknown names yield `None`, which callers treat as a no-op.
    pub fn from_key(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "up" | "arrowup" => Some(Direction::Up),
            "down" | "arrowdown" => Some(Direction::Down),
            "left" | "arrowleft" => Some(Direction::Left),
            "right" | "arrowright" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Offset of `step` units in this direction. Up is towards negative y.
    pub fn offset(self, step: f64) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -step),
            Direction::Down => Vec2::new(0.0, step),
            Direction::Left => Vec2::new(-step, 0.0),
            Direction::Right => Vec2::new(step, 0.0),
        }
    }
}

/// A pointer press-and-move on the canvas, in progress or completed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    /// Where the pointer went down.
    pub start: Point,
    /// Where the pointer is now (or was released).
    pub location: Point,
}

impl DragGesture {
    /// A gesture that has not moved yet.
    pub fn new(start: Point) -> Self {
        Self {
            start,
            location: start,
        }
    }

    /// Distance travelled since the press.
    pub fn distance(&self) -> f64 {
        self.start.distance(self.location)
    }

    /// Whether the pointer travelled further than `threshold`.
    pub fn is_drag(&self, threshold: f64) -> bool {
        self.distance() > threshold
    }
}
