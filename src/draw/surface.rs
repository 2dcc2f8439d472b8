//! The ordered stroke history that exports serialize.

use super::stroke::Stroke;

/// Ordered history of strokes on one drawing surface.
///
/// Strokes are only ever appended at the end. Undo removes the newest stroke,
/// clear removes everything; nothing is removed from the middle.
#[derive(Debug, Clone, Default)]
pub struct DrawingSurface {
    strokes: Vec<Stroke>,
}

impl DrawingSurface {
    /// Creates a new empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to append a stroke, enforcing a maximum stroke count when `max` > 0.
    ///
    /// Returns the index of the new stroke, or `None` if the limit would be exceeded.
    pub fn try_push(&mut self, stroke: Stroke, max: usize) -> Option<usize> {
        if max == 0 || self.strokes.len() < max {
            self.strokes.push(stroke);
            Some(self.strokes.len() - 1)
        } else {
            None
        }
    }

    /// Removes and returns the most recently added stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Removes all strokes, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.strokes.len();
        self.strokes.clear();
        count
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Stroke> {
        self.strokes.get_mut(index)
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }
}

impl<'a> IntoIterator for &'a DrawingSurface {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
