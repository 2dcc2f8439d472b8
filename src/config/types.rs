//! Configuration type definitions.

use super::enums::{ColorSpec, OverflowPolicy, PartialEndPolicy};
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen color used before any palette swatch is picked and the
/// styling shared by every exported path.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initial pen color. When unset, the first palette swatch (black) is used.
    #[serde(default)]
    pub default_color: Option<ColorSpec>,

    /// Stroke width in surface units (valid range: 1.0 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Path opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Number of random swatches generated at startup (valid range: 1 - 32)
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: None,
            stroke_width: default_stroke_width(),
            opacity: default_opacity(),
            palette_size: default_palette_size(),
        }
    }
}

/// Multi-contact engine behavior.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Handling of a third simultaneous contact (`ignore` or `concatenate`)
    #[serde(default)]
    pub overflow: OverflowPolicy,

    /// Handling of a filled pair losing one contact (`freeze` or `revert`)
    #[serde(default)]
    pub partial_end: PartialEndPolicy,

    /// Maximum number of strokes kept on the surface (0 = unlimited)
    #[serde(default)]
    pub max_strokes: usize,
}

/// Export destination settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported documents are written to (`~` is expanded).
    /// Defaults to `Sketchpad` inside the user's pictures directory.
    #[serde(default)]
    pub save_directory: Option<String>,

    /// Filename prefix; files are named `<prefix>-<unix-millis>.svg`
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: None,
            filename_prefix: default_filename_prefix(),
        }
    }
}

fn default_stroke_width() -> f64 {
    5.0
}

fn default_opacity() -> f64 {
    0.75
}

fn default_palette_size() -> usize {
    5
}

pub(crate) fn default_filename_prefix() -> String {
    "sketchpad".to_string()
}
