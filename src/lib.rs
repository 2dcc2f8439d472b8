//! Multi-touch freehand sketch surface.
//!
//! Pointer contacts are fed to a [`StrokeEngine`], which keeps an ordered
//! history of vector strokes and exports it as an SVG document. One contact
//! traces an open path; two simultaneous contacts span a single filled shape.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod palette;

pub use config::Config;
pub use input::StrokeEngine;
