//! VectorPen Core Library
//!
//! Platform-agnostic curve model, path derivation and code generation for
//! the VectorPen path editor.

pub mod codegen;
pub mod config;
pub mod drawing;
pub mod editor;
pub mod element;
pub mod geometry;
pub mod grid;
pub mod handles;
pub mod input;
pub mod path;
pub mod snap;

pub use codegen::{CodeStyle, generate};
pub use config::{ConfigError, ConfigResult, EditorConfig};
pub use drawing::Drawing;
pub use editor::{Editor, Interaction};
pub use element::{ControlPoints, Element, ElementId, PrimaryControl};
pub use geometry::PointExt;
pub use grid::Grid;
pub use handles::{Handle, HandleKind, Marker};
pub use input::{Direction, DragGesture, Modifiers};
pub use path::{DrawCommand, build_commands};
pub use snap::snap_to_grid;
