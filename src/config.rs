//! Navigator construction parameters.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{KurmaError, Result};
use crate::navigator::{AngleMode, PenState};

/// Navigator configuration.
///
/// Every field has a default, so a TOML file only needs the fields it wants
/// to override:
///
/// ```toml
/// mode = "standard"
/// canvas_width = 256
/// canvas_height = 256
/// start_x = 128
/// start_y = 128
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Angle convention (default: logo)
    #[serde(default = "default_mode")]
    pub mode: AngleMode,

    /// Initial pen state (default: down)
    #[serde(default = "default_pen_mode")]
    pub pen_mode: PenState,

    /// Canvas width in pixels (default: 128)
    #[serde(default = "default_canvas_extent")]
    pub canvas_width: usize,

    /// Canvas height in pixels (default: 128)
    #[serde(default = "default_canvas_extent")]
    pub canvas_height: usize,

    /// Start x coordinate (default: 64, the default canvas center)
    #[serde(default = "default_start_coord")]
    pub start_x: f64,

    /// Start y coordinate (default: 64, the default canvas center)
    #[serde(default = "default_start_coord")]
    pub start_y: f64,

    /// Pixel value the pen writes; the background is `true` (default: false)
    #[serde(default)]
    pub pen_color: bool,
}

fn default_mode() -> AngleMode {
    AngleMode::Logo
}

fn default_pen_mode() -> PenState {
    PenState::Down
}

fn default_canvas_extent() -> usize {
    128
}

fn default_start_coord() -> f64 {
    64.0
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            pen_mode: default_pen_mode(),
            canvas_width: default_canvas_extent(),
            canvas_height: default_canvas_extent(),
            start_x: default_start_coord(),
            start_y: default_start_coord(),
            pen_color: false,
        }
    }
}

impl NavigatorConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check the configuration describes a usable navigator.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(KurmaError::Config(format!(
                "canvas dimensions must be non-zero, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !self.start_x.is_finite() || !self.start_y.is_finite() {
            return Err(KurmaError::Config(format!(
                "start position must be finite, got ({}, {})",
                self.start_x, self.start_y
            )));
        }
        Ok(())
    }
}
