//! RGB color type and predefined color constants.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an opaque RGB color with 8-bit components.
///
/// Colors render as lowercase `#rrggbb` in exported documents. Parsing accepts
/// the palette form (`"1a2b3c"`), the CSS hex form (`"#1a2b3c"`) and a handful
/// of color names.
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let orange: Color = "ff8000".parse().unwrap();
/// assert_eq!(orange.to_string(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the six hex digits without the leading `#`.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Looks up one of the predefined color names (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            "yellow" => Some(YELLOW),
            "orange" => Some(ORANGE),
            "pink" => Some(PINK),
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Error returned when a color string is neither hex nor a known name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected rrggbb, #rrggbb or a color name")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(color) = Color::from_name(trimmed) {
            return Ok(color);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

pub const RED: Color = Color::new(0xff, 0x00, 0x00);
pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);
pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);
pub const YELLOW: Color = Color::new(0xff, 0xff, 0x00);
pub const ORANGE: Color = Color::new(0xff, 0x80, 0x00);
pub const PINK: Color = Color::new(0xff, 0x00, 0xff);
pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
/// Default pen color, and the first swatch of every palette.
pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
