//! Keyboard and pointer shortcut registry.

/// A shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub shift: bool,
    pub alt: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, shift: bool, alt: bool, description: &'static str) -> Self {
        Self {
            key,
            shift,
            alt,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Shift+Arrows").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Click", false, false, "Add a corner point"),
            Shortcut::new("Drag", false, false, "Add a curved point"),
            Shortcut::new("Click point", false, false, "Select point"),
            Shortcut::new("Click point", true, false, "Toggle point in selection"),
            Shortcut::new("Drag point", false, false, "Move selected points"),
            Shortcut::new("Drag point", false, true, "Pull symmetric handles"),
            Shortcut::new("Drag handle", false, true, "Move handle independently"),
            Shortcut::new("Double-click point", false, false, "Remove handles"),
            Shortcut::new("Arrows", false, false, "Nudge selection by 1"),
            Shortcut::new("Arrows", true, false, "Nudge selection by 10"),
            Shortcut::new("Delete", false, false, "Delete selected points"),
            Shortcut::new("Backspace", false, false, "Delete selected points"),
        ]
    }
}
