//! Configuration enum types.

use crate::draw::{BLACK, Color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex string, with or without the leading '#'
/// default_color = "#1e90ff"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color name or hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown names and malformed hex strings fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name.parse().unwrap_or_else(|err| {
                warn!("{}, using black", err);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}

/// What happens when a contact begins while two are already active.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    /// Reject the extra contact; its later updates and ends are no-ops.
    #[default]
    Ignore,
    /// Track the extra contact and render every contact as one concatenated
    /// open path.
    Concatenate,
}

/// What happens to a filled pair when one of its two contacts ends.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PartialEndPolicy {
    /// Keep the filled ring as it was when the pair broke. The survivor no
    /// longer moves the geometry and no new contact may join.
    #[default]
    Freeze,
    /// Recompute from the surviving contact alone (open path); a new contact
    /// may join and re-form a pair.
    Revert,
}
