//! Contact identity and per-contact point accumulation.

use crate::draw::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle for one physical contact (pointer id, touch id, ...).
///
/// Unique among concurrently active contacts; may be reused once the contact ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One ongoing contact and the points it has traced, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    points: Vec<Point>,
}

impl Contact {
    /// Starts a contact at its initial point.
    pub fn new(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
