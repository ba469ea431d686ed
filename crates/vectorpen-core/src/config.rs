//! Editor configuration.

use crate::codegen::CodeStyle;
use crate::grid::{DEFAULT_GRID_SPACING, Grid, MIN_GRID_SPACING};
use crate::input::DRAG_THRESHOLD;
use crate::snap::SNAP_TOLERANCE;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Hit radius of anchor and control markers, in canvas units.
pub const HANDLE_RADIUS: f64 = 7.0;
/// Nudge distance for a plain arrow key press.
pub const NUDGE_STEP: f64 = 1.0;
/// Multiplier applied to the nudge when the amplifying modifier is held.
pub const AMPLIFIED_NUDGE_FACTOR: f64 = 10.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Editing policy: grid, snapping, thresholds and output style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid spacing; `None` disables snapping.
    pub grid: Option<Size>,
    /// Distance from a grid line within which coordinates snap.
    pub snap_tolerance: f64,
    /// Pointer travel above which a press counts as a drag.
    pub drag_threshold: f64,
    /// Hit radius for markers.
    pub handle_radius: f64,
    /// Keyboard nudge distance.
    pub nudge_step: f64,
    /// Nudge multiplier while the amplifying modifier is held.
    pub amplified_nudge_factor: f64,
    /// Syntax of the generated code.
    pub code_style: CodeStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid: Some(Size::new(DEFAULT_GRID_SPACING, DEFAULT_GRID_SPACING)),
            snap_tolerance: SNAP_TOLERANCE,
            drag_threshold: DRAG_THRESHOLD,
            handle_radius: HANDLE_RADIUS,
            nudge_step: NUDGE_STEP,
            amplified_nudge_factor: AMPLIFIED_NUDGE_FACTOR,
            code_style: CodeStyle::default(),
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn non_negative(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a non-negative number, got {value}")))
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration. Missing fields use defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a configuration file if it exists, falling back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(grid) = self.grid {
            if !(grid.width >= MIN_GRID_SPACING
                && grid.height >= MIN_GRID_SPACING
                && grid.is_finite())
            {
                return Err(invalid(
                    "grid",
                    format!(
                        "spacing must be at least {MIN_GRID_SPACING}, got {}x{}",
                        grid.width, grid.height
                    ),
                ));
            }
        }
        non_negative("snap_tolerance", self.snap_tolerance)?;
        non_negative("drag_threshold", self.drag_threshold)?;
        non_negative("handle_radius", self.handle_radius)?;
        non_negative("nudge_step", self.nudge_step)?;
        if !(self.amplified_nudge_factor.is_finite() && self.amplified_nudge_factor > 0.0) {
            return Err(invalid(
                "amplified_nudge_factor",
                format!("expected a positive number, got {}", self.amplified_nudge_factor),
            ));
        }
        Ok(())
    }

    /// The snapping grid described by this configuration.
    pub fn snap_grid(&self) -> Option<Grid> {
        self.grid
            .map(|size| Grid::new(size.width, size.height).with_tolerance(self.snap_tolerance))
    }

    /// Keyboard nudge distance, amplified or not.
    pub fn nudge_distance(&self, amplified: bool) -> f64 {
        if amplified {
            self.nudge_step * self.amplified_nudge_factor
        } else {
            self.nudge_step
        }
    }
}
