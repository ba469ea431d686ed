//! VectorPen Application
//!
//! Native shell hosting the path editor: forwards pointer and keyboard
//! input to the core editor and paints the curve, markers and grid.

mod app;
mod canvas;
mod shortcuts;

pub use app::{App, CONFIG_FILE};
pub use shortcuts::{Shortcut, ShortcutRegistry};
