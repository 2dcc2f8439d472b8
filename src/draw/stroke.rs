//! Stroke records and the geometry synthesized from active contacts.

use super::color::Color;
use std::fmt::Write;

/// A point in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Path geometry of a stroke.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Open, unfilled polyline traced by one contact (or several, concatenated).
    Polyline(Vec<Point>),
    /// Closed ring spanned by two simultaneous contacts; rendered filled.
    Polygon(Vec<Point>),
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::Polyline(Vec::new())
    }
}

impl Geometry {
    /// Builds an open polyline by concatenating the given point runs in order.
    pub fn polyline<'a, I>(runs: I) -> Self
    where
        I: IntoIterator<Item = &'a [Point]>,
    {
        Geometry::Polyline(runs.into_iter().flatten().copied().collect())
    }

    /// Builds the closed ring for a pair of contacts.
    ///
    /// The ring walks `first` forward, `second` backward, then returns to the
    /// first point of `first`.
    pub fn ring(first: &[Point], second: &[Point]) -> Self {
        let mut points = Vec::with_capacity(first.len() + second.len() + 1);
        points.extend_from_slice(first);
        points.extend(second.iter().rev().copied());
        if let Some(&start) = first.first().or_else(|| second.last()) {
            points.push(start);
        }
        Geometry::Polygon(points)
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Geometry::Polyline(points) | Geometry::Polygon(points) => points,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Geometry::Polygon(_))
    }

    /// Renders the move-to/line-to command string (`M x y L x y ...`).
    ///
    /// Empty geometry yields an empty string; a single point yields a lone
    /// move-to.
    pub fn path_data(&self) -> String {
        let mut data = String::new();
        for (i, p) in self.points().iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            // Writing into a String cannot fail.
            let _ = write!(data, "{cmd} {} {}", p.x, p.y);
        }
        data
    }
}

/// One committed vector path in the drawing history.
///
/// The color is captured when the stroke's session begins and never changes
/// afterwards; the geometry is replaced wholesale on every recompute while the
/// session is live.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub geometry: Geometry,
}

impl Stroke {
    /// Creates a stroke with the given color and no geometry yet.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            geometry: Geometry::default(),
        }
    }

    /// Fill color: the stroke color for closed rings, `None` for open paths.
    pub fn fill(&self) -> Option<Color> {
        self.geometry.is_closed().then_some(self.color)
    }

    pub fn path_data(&self) -> String {
        self.geometry.path_data()
    }
}
