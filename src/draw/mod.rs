//! Stroke records, the drawing surface, and SVG rendering.
//!
//! This module defines the vector types the engine produces:
//! - [`Color`]: RGB color with predefined constants and hex parsing
//! - [`Stroke`]: one path in the history, with its [`Geometry`]
//! - [`DrawingSurface`]: ordered stroke history (undo/clear)
//! - [`render_document`]: SVG serialization of a surface

pub mod color;
pub mod stroke;
pub mod surface;
pub mod svg;

// Re-export commonly used types at module level
pub use color::{Color, ColorParseError};
pub use stroke::{Geometry, Point, Stroke};
pub use surface::DrawingSurface;
pub use svg::{StrokeStyle, render_document};

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
