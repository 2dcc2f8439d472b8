//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include the initial pen color,
//! shared path styling, multi-contact engine policies, and the export destination.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, OverflowPolicy, PartialEndPolicy};
pub use types::{DrawingConfig, EngineConfig, ExportConfig};

use crate::draw::StrokeStyle;
use crate::export::expand_tilde;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#1e90ff"
/// stroke_width = 5.0
/// opacity = 0.75
/// palette_size = 5
///
/// [engine]
/// overflow = "ignore"
/// partial_end = "freeze"
/// max_strokes = 0
///
/// [export]
/// save_directory = "~/Drawings"
/// filename_prefix = "sketchpad"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pen color and path styling
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Multi-contact engine policies
    #[serde(default)]
    pub engine: EngineConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 50.0
    /// - `opacity`: 0.0 - 1.0
    /// - `palette_size`: 1 - 32
    fn validate_and_clamp(&mut self) {
        if !(1.0..=50.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-50.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = if self.drawing.stroke_width.is_nan() {
                5.0
            } else {
                self.drawing.stroke_width.clamp(1.0, 50.0)
            };
        }

        if !(0.0..=1.0).contains(&self.drawing.opacity) {
            log::warn!(
                "Invalid opacity {:.2}, clamping to 0.0-1.0 range",
                self.drawing.opacity
            );
            self.drawing.opacity = if self.drawing.opacity.is_nan() {
                1.0
            } else {
                self.drawing.opacity.clamp(0.0, 1.0)
            };
        }

        if !(1..=32).contains(&self.drawing.palette_size) {
            log::warn!(
                "Invalid palette_size {}, clamping to 1-32 range",
                self.drawing.palette_size
            );
            self.drawing.palette_size = self.drawing.palette_size.clamp(1, 32);
        }

        let prefix = self.export.filename_prefix.trim();
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            log::warn!(
                "Invalid filename_prefix '{}', falling back to 'sketchpad'",
                self.export.filename_prefix
            );
            self.export.filename_prefix = types::default_filename_prefix();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config path cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Path styling shared by every stroke on the surface.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.drawing.stroke_width,
            opacity: Some(self.drawing.opacity),
            ..StrokeStyle::default()
        }
    }

    /// Export directory: the configured path with `~` expanded, or
    /// `<pictures>/Sketchpad` when none is set.
    pub fn save_directory(&self) -> PathBuf {
        match &self.export.save_directory {
            Some(dir) => expand_tilde(dir),
            None => dirs::picture_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Sketchpad"),
        }
    }
}
