//! SVG document rendering for a [`DrawingSurface`].
//!
//! The exported document is a projection of the stroke history: one `<path>`
//! element per stroke, in history order, each carrying the same `d` string the
//! live surface shows.

use super::surface::DrawingSurface;
use super::stroke::Stroke;
use std::fmt::Write;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const SVG_VERSION: &str = "1.1";

/// Styling shared by every path on a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in surface units
    pub width: f64,
    /// `stroke-linecap` value
    pub linecap: &'static str,
    /// `stroke-linejoin` value
    pub linejoin: &'static str,
    /// Optional path opacity (0.0-1.0); omitted from the output when `None`
    pub opacity: Option<f64>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 5.0,
            linecap: "round",
            linejoin: "round",
            opacity: Some(0.75),
        }
    }
}

/// Serializes the surface into a self-contained SVG document.
///
/// An empty surface still produces a valid document with no paths.
pub fn render_document(surface: &DrawingSurface, style: &StrokeStyle) -> String {
    let mut doc = format!(r#"<svg xmlns="{SVG_NAMESPACE}" version="{SVG_VERSION}">"#);
    for stroke in surface {
        doc.push('\n');
        render_path(&mut doc, stroke, style);
    }
    if !surface.is_empty() {
        doc.push('\n');
    }
    doc.push_str("</svg>\n");
    doc
}

/// Appends a single `<path/>` element for `stroke`.
pub fn render_path(out: &mut String, stroke: &Stroke, style: &StrokeStyle) {
    let fill = stroke
        .fill()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "none".to_string());

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<path stroke="{}" fill="{}" stroke-linecap="{}" stroke-linejoin="{}" stroke-width="{}""#,
        stroke.color,
        fill,
        escape_attr(style.linecap),
        escape_attr(style.linejoin),
        style.width,
    );
    if let Some(opacity) = style.opacity {
        let _ = write!(out, r#" opacity="{opacity}""#);
    }
    let _ = write!(out, r#" d="{}"/>"#, escape_attr(&stroke.path_data()));
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};
    use crate::draw::stroke::{Geometry, Point};

    #[test]
    fn empty_surface_renders_bare_root() {
        let doc = render_document(&DrawingSurface::new(), &StrokeStyle::default());
        assert_eq!(
            doc,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\"></svg>\n"
        );
    }

    #[test]
    fn open_stroke_has_no_fill() {
        let mut stroke = Stroke::new(RED);
        stroke.geometry = Geometry::Polyline(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        let mut out = String::new();
        render_path(&mut out, &stroke, &StrokeStyle::default());
        assert_eq!(
            out,
            r##"<path stroke="#ff0000" fill="none" stroke-linecap="round" stroke-linejoin="round" stroke-width="5" opacity="0.75" d="M 0 0 L 3 4"/>"##
        );
    }

    #[test]
    fn opacity_is_optional() {
        let style = StrokeStyle {
            opacity: None,
            ..StrokeStyle::default()
        };
        let mut out = String::new();
        render_path(&mut out, &Stroke::new(BLACK), &style);
        assert!(!out.contains("opacity"));
    }

    #[test]
    fn closed_stroke_is_filled_with_its_color() {
        let mut stroke = Stroke::new(RED);
        stroke.geometry = Geometry::ring(&[Point::new(0.0, 0.0)], &[Point::new(1.0, 1.0)]);
        let mut out = String::new();
        render_path(&mut out, &stroke, &StrokeStyle::default());
        assert!(out.contains(r##"fill="#ff0000""##));
    }
}
