//! Multi-contact stroke capture engine.

use super::contact::{Contact, ContactId};
use super::mode::ContactMode;
use crate::config::{Config, OverflowPolicy, PartialEndPolicy};
use crate::draw::{
    Color, ColorParseError, DrawingSurface, Geometry, Point, Stroke, StrokeStyle,
    render_document,
};
use crate::export::{ExportError, ExportSink, export_filename};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::path::PathBuf;

/// Whether a gesture is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// No contact is active - waiting for the next gesture
    Idle,
    /// At least one contact of the current gesture is still down
    Drawing,
}

/// Live state of one gesture: its contacts and the stroke they draw into.
#[derive(Debug)]
struct ActiveSession {
    /// Active contacts in the order they began
    contacts: IndexMap<ContactId, Contact>,
    /// Index of the target stroke in the surface history
    target: usize,
    /// Set once a filled pair loses a contact under [`PartialEndPolicy::Freeze`]
    frozen: bool,
}

impl ActiveSession {
    fn mode(&self) -> ContactMode {
        ContactMode::from_count(self.contacts.len())
    }

    /// Rebuilds the stroke geometry from every point of every active contact.
    fn geometry(&self) -> Geometry {
        if self.mode() == ContactMode::Paired {
            let mut contacts = self.contacts.values();
            if let (Some(first), Some(second)) = (contacts.next(), contacts.next()) {
                return Geometry::ring(first.points(), second.points());
            }
        }
        Geometry::polyline(self.contacts.values().map(Contact::points))
    }
}

/// Owns the drawing surface and turns contact begin/update/end calls into strokes.
///
/// One engine backs one surface; nothing is shared between engines. All
/// operations are infallible: calls that arrive out of order (an update for an
/// unknown contact, an undo on an empty history) are absorbed as no-ops.
///
/// A single contact traces an open polyline. When a second contact joins a
/// one-contact gesture, the same stroke becomes a filled ring: the first
/// contact's points, then the second's reversed, closed back to the start.
#[derive(Debug)]
pub struct StrokeEngine {
    surface: DrawingSurface,
    current_color: Color,
    session: Option<ActiveSession>,
    /// Styling applied to every exported path
    pub style: StrokeStyle,
    /// Handling of a third simultaneous contact
    pub overflow: OverflowPolicy,
    /// Handling of a filled pair losing one contact
    pub partial_end: PartialEndPolicy,
    /// Maximum number of strokes on the surface (0 = unlimited)
    pub max_strokes: usize,
    /// Filename prefix for exported documents
    pub filename_prefix: String,
}

impl Default for StrokeEngine {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl StrokeEngine {
    /// Creates an engine with an empty surface and default policies.
    pub fn new(color: Color) -> Self {
        Self {
            surface: DrawingSurface::new(),
            current_color: color,
            session: None,
            style: StrokeStyle::default(),
            overflow: OverflowPolicy::default(),
            partial_end: PartialEndPolicy::default(),
            max_strokes: 0,
            filename_prefix: "sketchpad".to_string(),
        }
    }

    /// Creates an engine configured from the user's settings.
    ///
    /// `fallback_color` is used when the config does not name a default color.
    pub fn from_config(config: &Config, fallback_color: Color) -> Self {
        let color = config
            .drawing
            .default_color
            .as_ref()
            .map(|spec| spec.to_color())
            .unwrap_or(fallback_color);
        Self {
            style: config.stroke_style(),
            overflow: config.engine.overflow,
            partial_end: config.engine.partial_end,
            max_strokes: config.engine.max_strokes,
            filename_prefix: config.export.filename_prefix.clone(),
            ..Self::new(color)
        }
    }

    /// Registers a new contact at `(x, y)`.
    ///
    /// The first contact of a gesture appends a new stroke in the current color.
    /// A second contact joins the existing stroke, switching it to a filled ring.
    ///
    /// Returns `false` when the contact is not tracked: a coordinate is not
    /// finite, its id is already active, the gesture is frozen, two contacts
    /// are already active under [`OverflowPolicy::Ignore`], or the stroke
    /// limit has been reached.
    pub fn begin_contact(&mut self, id: ContactId, x: f64, y: f64) -> bool {
        let Some(point) = finite_point(x, y) else {
            trace!("Non-finite begin ({}, {}) for {}; ignoring", x, y, id);
            return false;
        };
        match self.session.as_mut() {
            None => {
                let stroke = Stroke::new(self.current_color);
                let Some(target) = self.surface.try_push(stroke, self.max_strokes) else {
                    warn!(
                        "Stroke limit ({}) reached; ignoring contact {}",
                        self.max_strokes, id
                    );
                    return false;
                };
                let mut contacts = IndexMap::new();
                contacts.insert(id, Contact::new(point));
                self.session = Some(ActiveSession {
                    contacts,
                    target,
                    frozen: false,
                });
                debug!(
                    "Contact {} started stroke {} in {}",
                    id, target, self.current_color
                );
            }
            Some(session) => {
                if session.contacts.contains_key(&id) {
                    debug!("Contact {} is already active; ignoring begin", id);
                    return false;
                }
                if session.frozen {
                    debug!("Gesture is frozen; ignoring contact {}", id);
                    return false;
                }
                if session.contacts.len() >= 2 && self.overflow == OverflowPolicy::Ignore {
                    debug!("Two contacts already active; ignoring contact {}", id);
                    return false;
                }
                session.contacts.insert(id, Contact::new(point));
                debug!(
                    "Contact {} joined stroke {} ({} active)",
                    id,
                    session.target,
                    session.contacts.len()
                );
            }
        }
        self.recompute();
        true
    }

    /// Appends `(x, y)` to an active contact and refreshes the stroke.
    ///
    /// Ignored when no gesture is in progress, the contact is unknown, or a
    /// coordinate is not finite.
    pub fn update_contact(&mut self, id: ContactId, x: f64, y: f64) {
        let Some(point) = finite_point(x, y) else {
            trace!("Non-finite update ({}, {}) for {}; ignoring", x, y, id);
            return;
        };
        let Some(session) = self.session.as_mut() else {
            trace!("Update for {} while idle; ignoring", id);
            return;
        };
        let Some(contact) = session.contacts.get_mut(&id) else {
            trace!("Update for inactive contact {}; ignoring", id);
            return;
        };
        contact.push(point);
        if !session.frozen {
            self.recompute();
        }
    }

    /// Ends an active contact.
    ///
    /// When the last contact ends the gesture is over and the stroke stays in
    /// the history as drawn. When one contact of a filled pair ends, the
    /// outcome follows [`PartialEndPolicy`].
    pub fn end_contact(&mut self, id: ContactId) {
        let Some(session) = self.session.as_mut() else {
            trace!("End for {} while idle; ignoring", id);
            return;
        };
        let before = session.contacts.len();
        if session.contacts.shift_remove(&id).is_none() {
            trace!("End for inactive contact {}; ignoring", id);
            return;
        }

        if session.contacts.is_empty() {
            debug!("Gesture on stroke {} finished", session.target);
            self.session = None;
            return;
        }

        if before == 2 && self.partial_end == PartialEndPolicy::Freeze {
            debug!("Pair on stroke {} broke; freezing geometry", session.target);
            session.frozen = true;
        } else if !session.frozen {
            self.recompute();
        }
    }

    /// Removes the most recent stroke; no-op when the history is empty.
    ///
    /// Undoing the stroke of an in-progress gesture ends that gesture.
    pub fn undo(&mut self) {
        if self.surface.undo().is_some() {
            debug!("Undo: {} strokes remain", self.surface.len());
            self.release_orphaned_session();
        }
    }

    /// Removes every stroke and ends any in-progress gesture.
    pub fn clear(&mut self) {
        let removed = self.surface.clear();
        if removed > 0 {
            debug!("Cleared {} strokes", removed);
        }
        self.release_orphaned_session();
    }

    /// Sets the color used by the next stroke. Existing strokes keep theirs.
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Parses and sets the color for the next stroke.
    ///
    /// On a parse error the current color is left unchanged.
    pub fn set_color_str(&mut self, color: &str) -> Result<Color, ColorParseError> {
        match color.parse::<Color>() {
            Ok(parsed) => {
                self.set_color(parsed);
                Ok(parsed)
            }
            Err(err) => {
                warn!("{}; keeping {}", err, self.current_color);
                Err(err)
            }
        }
    }

    /// Serializes the stroke history into an SVG document.
    pub fn export_document(&self) -> String {
        render_document(&self.surface, &self.style)
    }

    /// Serializes the history and hands it to `sink` under a timestamped name.
    pub fn export_to<S: ExportSink + ?Sized>(&self, sink: &S) -> Result<PathBuf, ExportError> {
        let millis = chrono::Utc::now().timestamp_millis();
        let filename = export_filename(&self.filename_prefix, millis);
        sink.save(&self.export_document(), &filename)
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn state(&self) -> DrawingState {
        if self.session.is_some() {
            DrawingState::Drawing
        } else {
            DrawingState::Idle
        }
    }

    /// Contact mode of the in-progress gesture ([`ContactMode::Empty`] when idle).
    pub fn mode(&self) -> ContactMode {
        self.session
            .as_ref()
            .map_or(ContactMode::Empty, ActiveSession::mode)
    }

    pub fn active_contacts(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.contacts.len())
    }

    /// Whether the in-progress gesture's geometry is frozen after a broken pair.
    pub fn is_frozen(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.frozen)
    }

    fn recompute(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let geometry = session.geometry();
        trace!(
            "Stroke {} recomputed: {:?}, {} points",
            session.target,
            session.mode(),
            geometry.points().len()
        );
        if let Some(stroke) = self.surface.get_mut(session.target) {
            stroke.geometry = geometry;
        }
    }

    fn release_orphaned_session(&mut self) {
        if let Some(session) = &self.session
            && session.target >= self.surface.len()
        {
            debug!(
                "Stroke {} removed mid-gesture; dropping {} active contacts",
                session.target,
                session.contacts.len()
            );
            self.session = None;
        }
    }
}

/// NaN or infinite coordinates would end up verbatim in the path data.
fn finite_point(x: f64, y: f64) -> Option<Point> {
    (x.is_finite() && y.is_finite()).then(|| Point::new(x, y))
}
